//! Path addressing for nested value trees.
//!
//! A [`TreePath`] is an ordered sequence of [`Segment`]s, each either a
//! string key into an object or a numeric index into an array. The empty
//! path addresses the root. Paths have a textual form used by the CLI:
//! keys are joined with `.` and indexes are written in brackets, e.g.
//! `jobs.build.steps[0].uses`.
//!
//! Escaping is not supported: keys containing `.`, `[` or `]` are only
//! addressable through the typed API, not the textual form.

use crate::error::{Result, TrellisError};
use std::fmt;
use std::str::FromStr;

/// One step into a nested value: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A string key into an object.
    Key(String),
    /// A numeric index into an array.
    Index(usize),
}

impl Segment {
    /// The segment rendered as a plain string (index becomes its decimal form).
    ///
    /// This is the form used for [`FieldNode::key`](crate::fields::FieldNode).
    pub fn as_key(&self) -> String {
        match self {
            Segment::Key(k) => k.clone(),
            Segment::Index(i) => i.to_string(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => write!(f, "{}", k),
            Segment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// An ordered sequence of segments addressing a location in a value tree.
///
/// The empty path denotes the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TreePath {
    segments: Vec<Segment>,
}

impl TreePath {
    /// The empty path (the root of the tree).
    pub fn root() -> Self {
        TreePath::default()
    }

    /// Build a path from a sequence of segments.
    pub fn from_segments<I: IntoIterator<Item = Segment>>(segments: I) -> Self {
        TreePath {
            segments: segments.into_iter().collect(),
        }
    }

    /// Extend this path with a string key segment.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(Segment::Key(key.into()));
        self
    }

    /// Extend this path with an array index segment.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(Segment::Index(index));
        self
    }

    /// Append a segment in place.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// True when this path addresses the root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments of this path, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The final segment, if any.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// The path with its final segment removed; `None` for the root.
    pub fn parent(&self) -> Option<TreePath> {
        if self.segments.is_empty() {
            return None;
        }
        Some(TreePath {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, ".");
        }
        let mut first = true;
        for segment in &self.segments {
            match segment {
                Segment::Key(k) => {
                    if !first {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", k)?;
                }
                Segment::Index(i) => write!(f, "[{}]", i)?,
            }
            first = false;
        }
        Ok(())
    }
}

impl FromStr for TreePath {
    type Err = TrellisError;

    /// Parse the textual path form.
    ///
    /// `""` and `"."` both denote the root. Each dot-separated part is a key
    /// optionally followed by bracketed indexes (`steps[0][1]`); a part that
    /// is only brackets indexes into the value addressed so far (`[0].name`).
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s == "." {
            return Ok(TreePath::root());
        }

        let invalid = |reason: &str| TrellisError::InvalidPath(s.to_string(), reason.to_string());

        let mut segments = Vec::new();
        for part in s.split('.') {
            let (name, mut brackets) = match part.find('[') {
                Some(pos) => (&part[..pos], &part[pos..]),
                None => (part, ""),
            };

            if name.is_empty() && brackets.is_empty() {
                return Err(invalid("empty segment"));
            }
            if !name.is_empty() {
                segments.push(Segment::Key(name.to_string()));
            }

            while !brackets.is_empty() {
                if !brackets.starts_with('[') {
                    return Err(invalid("unexpected text after ']'"));
                }
                let close = brackets.find(']').ok_or_else(|| invalid("unclosed '['"))?;
                let digits = &brackets[1..close];
                let index: usize = digits
                    .parse()
                    .map_err(|_| invalid("index must be a non-negative integer"))?;
                segments.push(Segment::Index(index));
                brackets = &brackets[close + 1..];
            }
        }

        Ok(TreePath { segments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_empty() {
        let path = TreePath::root();
        assert!(path.is_root());
        assert_eq!(path.len(), 0);
        assert_eq!(path.last(), None);
        assert_eq!(path.parent(), None);
    }

    #[test]
    fn builder_extends_segments() {
        let path = TreePath::root().key("jobs").key("build").index(2);
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("jobs".to_string()),
                Segment::Key("build".to_string()),
                Segment::Index(2),
            ]
        );
    }

    #[test]
    fn parent_drops_last_segment() {
        let path = TreePath::root().key("jobs").index(0);
        let parent = path.parent().unwrap();
        assert_eq!(parent, TreePath::root().key("jobs"));
        assert_eq!(path.last(), Some(&Segment::Index(0)));
    }

    #[test]
    fn display_uses_dots_and_brackets() {
        let path = TreePath::root().key("jobs").key("build").index(0).key("uses");
        assert_eq!(path.to_string(), "jobs.build[0].uses");
    }

    #[test]
    fn display_root_is_dot() {
        assert_eq!(TreePath::root().to_string(), ".");
    }

    #[test]
    fn parse_empty_and_dot_are_root() {
        assert_eq!("".parse::<TreePath>().unwrap(), TreePath::root());
        assert_eq!(".".parse::<TreePath>().unwrap(), TreePath::root());
    }

    #[test]
    fn parse_keys_and_indexes() {
        let path: TreePath = "jobs.build.steps[0].uses".parse().unwrap();
        assert_eq!(
            path,
            TreePath::root()
                .key("jobs")
                .key("build")
                .key("steps")
                .index(0)
                .key("uses")
        );
    }

    #[test]
    fn parse_leading_index() {
        let path: TreePath = "[3].name".parse().unwrap();
        assert_eq!(path, TreePath::root().index(3).key("name"));
    }

    #[test]
    fn parse_consecutive_indexes() {
        let path: TreePath = "matrix[1][2]".parse().unwrap();
        assert_eq!(path, TreePath::root().key("matrix").index(1).index(2));
    }

    #[test]
    fn parse_rejects_empty_segment() {
        assert!("a..b".parse::<TreePath>().is_err());
    }

    #[test]
    fn parse_rejects_unclosed_bracket() {
        assert!("steps[0".parse::<TreePath>().is_err());
    }

    #[test]
    fn parse_rejects_non_numeric_index() {
        assert!("steps[x]".parse::<TreePath>().is_err());
        assert!("steps[-1]".parse::<TreePath>().is_err());
    }

    #[test]
    fn parse_rejects_text_after_bracket() {
        assert!("steps[0]x".parse::<TreePath>().is_err());
    }

    #[test]
    fn display_parse_round_trip() {
        for text in ["jobs.build[0].uses", "on.push.branches[1]", "[0][1]", "name"] {
            let path: TreePath = text.parse().unwrap();
            assert_eq!(path.to_string(), text);
        }
    }

    #[test]
    fn segment_as_key() {
        assert_eq!(Segment::Key("env".to_string()).as_key(), "env");
        assert_eq!(Segment::Index(4).as_key(), "4");
    }
}

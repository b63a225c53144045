//! CLI argument parsing for trellis.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Trellis: path-addressable editing engine for CI workflow definitions.
///
/// Workflow documents are YAML files. Locations inside a document are
/// addressed by paths: keys joined with dots, array indexes in brackets,
/// e.g. `jobs.build.steps[0].uses`.
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for trellis.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a workflow overview.
    ///
    /// Prints the workflow name, recognized triggers with their branch and
    /// path filters, job metadata, and a per-job step summary.
    Summary(SummaryArgs),

    /// Show the editable field tree of a workflow.
    ///
    /// Projects the document into the node tree a visual editor navigates,
    /// one line per field with its kind and path.
    Fields(FieldsArgs),

    /// Read the value at a path.
    ///
    /// Prints the value as YAML. A path that resolves to nothing prints
    /// nothing and still succeeds.
    Get(GetArgs),

    /// Write a value at a path.
    ///
    /// The value is parsed as a YAML fragment (`true`, `3`, `[a, b]`,
    /// `{k: v}`, or plain text). Missing intermediate containers are
    /// created; the file is rewritten in place.
    Set(SetArgs),

    /// Delete the value at a path.
    ///
    /// Removing an array element shifts later elements down. A path that
    /// resolves to nothing leaves the document unchanged.
    Delete(DeleteArgs),

    /// Rename a key on an object.
    ///
    /// Fails when a field with the new name already exists on that object.
    Rename(RenameArgs),
}

/// Arguments for the `summary` command.
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Workflow file to summarize.
    pub file: String,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `fields` command.
#[derive(Parser, Debug)]
pub struct FieldsArgs {
    /// Workflow file to project.
    pub file: String,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `get` command.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Workflow file to read.
    pub file: String,

    /// Path to read (e.g. `jobs.build.steps[0].uses`).
    pub path: String,
}

/// Arguments for the `set` command.
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Workflow file to edit.
    pub file: String,

    /// Path to write (e.g. `jobs.build.runs-on`).
    pub path: String,

    /// Value to write, parsed as a YAML fragment.
    pub value: String,

    /// Print the edited document to stdout instead of rewriting the file.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `delete` command.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Workflow file to edit.
    pub file: String,

    /// Path to delete.
    pub path: String,

    /// Print the edited document to stdout instead of rewriting the file.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `rename` command.
#[derive(Parser, Debug)]
pub struct RenameArgs {
    /// Workflow file to edit.
    pub file: String,

    /// Path of the object holding the key (`.` for the document root).
    pub parent: String,

    /// Existing key name.
    pub old_key: String,

    /// New key name.
    pub new_key: String,

    /// Print the edited document to stdout instead of rewriting the file.
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_summary() {
        let cli = Cli::try_parse_from(["trellis", "summary", "ci.yml"]).unwrap();
        if let Command::Summary(args) = cli.command {
            assert_eq!(args.file, "ci.yml");
            assert!(!args.json);
        } else {
            panic!("Expected Summary command");
        }
    }

    #[test]
    fn parse_summary_json() {
        let cli = Cli::try_parse_from(["trellis", "summary", "ci.yml", "--json"]).unwrap();
        if let Command::Summary(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Summary command");
        }
    }

    #[test]
    fn parse_fields() {
        let cli = Cli::try_parse_from(["trellis", "fields", "ci.yml"]).unwrap();
        assert!(matches!(cli.command, Command::Fields(_)));
    }

    #[test]
    fn parse_get() {
        let cli = Cli::try_parse_from(["trellis", "get", "ci.yml", "jobs.build.runs-on"]).unwrap();
        if let Command::Get(args) = cli.command {
            assert_eq!(args.file, "ci.yml");
            assert_eq!(args.path, "jobs.build.runs-on");
        } else {
            panic!("Expected Get command");
        }
    }

    #[test]
    fn parse_set() {
        let cli = Cli::try_parse_from([
            "trellis",
            "set",
            "ci.yml",
            "jobs.build.runs-on",
            "ubuntu-latest",
        ])
        .unwrap();
        if let Command::Set(args) = cli.command {
            assert_eq!(args.path, "jobs.build.runs-on");
            assert_eq!(args.value, "ubuntu-latest");
            assert!(!args.stdout);
        } else {
            panic!("Expected Set command");
        }
    }

    #[test]
    fn parse_set_stdout() {
        let cli =
            Cli::try_parse_from(["trellis", "set", "ci.yml", "name", "CI", "--stdout"]).unwrap();
        if let Command::Set(args) = cli.command {
            assert!(args.stdout);
        } else {
            panic!("Expected Set command");
        }
    }

    #[test]
    fn parse_delete() {
        let cli = Cli::try_parse_from(["trellis", "delete", "ci.yml", "jobs.build.steps[1]"])
            .unwrap();
        if let Command::Delete(args) = cli.command {
            assert_eq!(args.path, "jobs.build.steps[1]");
        } else {
            panic!("Expected Delete command");
        }
    }

    #[test]
    fn parse_rename() {
        let cli = Cli::try_parse_from([
            "trellis",
            "rename",
            "ci.yml",
            "jobs.build",
            "timeout",
            "timeout-minutes",
        ])
        .unwrap();
        if let Command::Rename(args) = cli.command {
            assert_eq!(args.parent, "jobs.build");
            assert_eq!(args.old_key, "timeout");
            assert_eq!(args.new_key, "timeout-minutes");
        } else {
            panic!("Expected Rename command");
        }
    }

    #[test]
    fn parse_rename_requires_all_args() {
        assert!(Cli::try_parse_from(["trellis", "rename", "ci.yml", "jobs.build"]).is_err());
    }
}

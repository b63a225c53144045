//! Trellis: path-addressable editing engine for CI workflow definitions.
//!
//! The engine keeps a visual workflow model synchronized with its textual
//! configuration. A workflow document is decoded into a generic [`value::Value`]
//! tree; [`fields`] projects that tree into navigable nodes for a UI;
//! [`editor`] applies path-addressed edits with structural sharing; and
//! [`normalize`] derives display summaries (triggers, jobs, steps) from the
//! same tree. [`document`] is the decode/encode boundary back to text.
//!
//! Everything in the engine is synchronous, pure, and side-effect-free;
//! mutating operations return new trees and never touch their input, so old
//! references stay valid for undo history.

pub mod cli;
pub mod commands;
pub mod document;
pub mod editor;
pub mod error;
pub mod exit_codes;
pub mod fields;
pub mod normalize;
pub mod path;
pub mod value;

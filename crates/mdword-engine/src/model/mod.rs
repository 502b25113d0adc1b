//! # Document Model
//!
//! The structured output of rich-document conversion: an ordered list of
//! [`Block`]s, each carrying styled [`Run`]s. Everything here is plain owned
//! data, built fresh per conversion and never mutated afterwards.

pub mod document;
pub mod run;

pub use document::{Block, Document, TableRow};
pub use run::{Run, RunStyle};

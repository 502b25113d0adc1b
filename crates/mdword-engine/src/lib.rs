//! Conversion engine for mdword: plain-text cleaning and rich-document
//! parsing of a loosely structured Markdown dialect.
//!
//! Both modes are pure functions of `(text, &Configuration)`. Nothing is
//! shared between calls, so they can run concurrently from any thread.

pub mod clean;
pub mod config;
pub mod error;
pub mod model;
pub mod parsing;
pub(crate) mod patterns;
pub mod sink;

// Re-export key types for easier usage
pub use clean::clean;
pub use config::{AppliedOption, Configuration, TableConversion, TableMode};
pub use error::ConfigError;
pub use model::{Block, Document, Run, RunStyle, TableRow};
pub use parsing::{inline::resolve, parse_document};
pub use sink::{DocumentSink, HtmlSink, StyledRun, emit, render_html};

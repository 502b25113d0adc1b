//! # Block Parsing
//!
//! One forward pass over the document's lines.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line gets a `LineClass`
//!    from local facts only, in a fixed priority order.
//! 2. **Block Construction** (`builder`): `BlockParser` owns a `LineCursor`
//!    and dispatches each class to an extractor, which may consume several
//!    lines and returns the index of the next unconsumed one.
//!
//! ## Modules
//!
//! - **`kinds`**: block types with owned delimiters (`CodeFence`, `BlockQuote`, `Table`, ...)
//! - **`classify`**: `MarkdownLineClassifier`
//! - **`cursor`**: `LineCursor`, forward-only
//! - **`fence`**: fenced code extraction (top level and inside quotes)
//! - **`table`**: pipe table extraction
//! - **`quote`**: block-quote processing
//! - **`builder`**: `BlockParser`
//!
//! ## Key Invariants
//!
//! - Lines are never revisited; the cursor only moves forward
//! - Fenced code is a raw zone: no block or inline parsing inside
//! - Unterminated constructs consume to end of input instead of failing

pub mod builder;
pub mod classify;
pub mod cursor;
pub mod fence;
pub mod kinds;
pub mod quote;
pub mod table;

pub use builder::BlockParser;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use cursor::LineCursor;

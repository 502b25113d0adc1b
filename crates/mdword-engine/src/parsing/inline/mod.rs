//! # Inline Span Resolution
//!
//! Turns the text of one line or paragraph into an ordered list of styled
//! [`Run`](crate::Run)s.
//!
//! ## Architecture
//!
//! Resolution happens in two phases over byte spans of the original text:
//!
//! 1. **Tokenize** (`tokenize`): delimiter-bounded spans are collected into
//!    one position-sorted token stream. Markers are found first, then code
//!    spans, then bold and quoted text; each stage runs with the spans of the
//!    earlier stages hidden.
//! 2. **Resolve** (`resolve`): tokens are selected left to right; a token
//!    overlapping an already selected one is dropped. The content of a
//!    selected bold or marker span is resolved recursively and flattened, which
//!    settles the two nesting collisions (marker around bold, bold around
//!    marker) without rewriting the text.
//!
//! ## Modules
//!
//! - **`types`**: `Token` and `TokenKind`
//! - **`kinds`**: inline kinds owning their delimiters and patterns
//! - **`tokenize`**: phase 1
//! - **`resolve`**: phase 2, the `resolve()` entry point
//!
//! ## Raw Zone Precedence
//!
//! Code spans are raw zones: `` `**x**` `` produces one code run containing
//! the asterisks, and in `` `**` and **b** `` the bold still starts at the
//! second pair.

pub mod kinds;
pub mod resolve;
pub mod tokenize;
pub mod types;

pub use resolve::resolve;
pub use tokenize::tokenize;
pub use types::{Token, TokenKind};

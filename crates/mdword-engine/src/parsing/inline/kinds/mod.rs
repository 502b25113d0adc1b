//! # Inline Kinds
//!
//! Inline span types that own their delimiters and match patterns. The
//! tokenizer and the cleaning pipeline both ask these types; neither
//! hardcodes `**` or `` md`` ``.
//!
//! ## Types
//!
//! - **`Bold`**: `**x**`
//! - **`Quoted`**: `"x"` (quotes are kept in the output text)
//! - **`Marker`**: `` md``x`` `` custom emphasis, may span lines
//! - **`CodeSpan`**: `` `x` `` raw zone, nothing is parsed inside it

pub mod bold;
pub mod code_span;
pub mod marker;
pub mod quoted;

pub use bold::Bold;
pub use code_span::CodeSpan;
pub use marker::Marker;
pub use quoted::Quoted;

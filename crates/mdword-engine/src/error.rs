use thiserror::Error;

/// Errors raised while building a [`Configuration`](crate::Configuration).
///
/// Conversion itself never fails; anything invalid is rejected here, before
/// a single line is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown table conversion mode: {0:?} (expected none, space, tab or comma)")]
    UnknownTableConversion(String),
}

use serde::Serialize;

/// The single style carried by a [`Run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RunStyle {
    Plain,
    Bold,
    /// Double-quoted text; the quote characters stay in the run text.
    Quoted,
    /// Inline code and the resolved `` md``x`` `` marker.
    InlineCode,
    /// Emphasis styled as strong text by sinks. The resolver itself renders
    /// `` md``x`` `` as [`RunStyle::InlineCode`]; this style is for documents
    /// assembled by callers.
    EmphasisMarker,
    /// The label half of a `key: value` line.
    KeyLabel,
}

/// A contiguous span of text with exactly one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub style: RunStyle,
    /// Point size requested for emphasised headings embedded in quotes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_hint: Option<u8>,
}

impl Run {
    pub fn new(style: RunStyle, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style,
            size_hint: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(RunStyle::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(RunStyle::Bold, text)
    }

    pub fn quoted(text: impl Into<String>) -> Self {
        Self::new(RunStyle::Quoted, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(RunStyle::InlineCode, text)
    }

    pub fn key_label(text: impl Into<String>) -> Self {
        Self::new(RunStyle::KeyLabel, text)
    }

    #[must_use]
    pub fn with_size_hint(mut self, points: u8) -> Self {
        self.size_hint = Some(points);
        self
    }
}

/// Concatenated text of a run sequence, styles dropped.
pub fn text_of(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

use std::fmt;

use serde::Serialize;

use crate::model::{Run, RunStyle};

/// A foreground colour hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const QUOTE_BLUE: Rgb = Rgb(0, 0, 255);
    pub const CODE_GREY: Rgb = Rgb(80, 80, 80);
    pub const LABEL_GREY: Rgb = Rgb(100, 100, 100);
}

impl fmt::Display for Rgb {
    /// `#RRGGBB`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Which font family a sink should pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum FontHint {
    #[default]
    Body,
    /// The heavier face used for bold text and labels.
    Strong,
    Monospace,
}

/// A run as a sink sees it: text plus rendering hints, no markup semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
    pub font: FontHint,
    pub color: Option<Rgb>,
    /// Point size, `None` for the sink's default.
    pub size_hint: Option<u8>,
}

impl StyledRun {
    pub const CODE_SIZE: u8 = 10;
    pub const LABEL_SIZE: u8 = 9;

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            font: FontHint::Body,
            color: None,
            size_hint: None,
        }
    }

    /// Body text of a code block.
    pub fn code(text: impl Into<String>) -> Self {
        Self {
            font: FontHint::Monospace,
            color: Some(Rgb::CODE_GREY),
            size_hint: Some(Self::CODE_SIZE),
            ..Self::plain(text)
        }
    }

    /// The language label shown above a code block.
    pub fn code_label(language: &str) -> Self {
        Self {
            bold: true,
            color: Some(Rgb::LABEL_GREY),
            size_hint: Some(Self::LABEL_SIZE),
            ..Self::plain(language)
        }
    }

    /// Same run rendered bold, as in a table header.
    #[must_use]
    pub fn strong(self) -> Self {
        Self {
            bold: true,
            font: match self.font {
                FontHint::Monospace => FontHint::Monospace,
                _ => FontHint::Strong,
            },
            ..self
        }
    }
}

impl From<&Run> for StyledRun {
    fn from(run: &Run) -> Self {
        let base = StyledRun {
            size_hint: run.size_hint,
            ..StyledRun::plain(run.text.clone())
        };
        match run.style {
            RunStyle::Plain => base,
            RunStyle::Bold | RunStyle::EmphasisMarker | RunStyle::KeyLabel => base.strong(),
            RunStyle::Quoted => StyledRun {
                color: Some(Rgb::QUOTE_BLUE),
                ..base
            },
            RunStyle::InlineCode => StyledRun {
                font: FontHint::Monospace,
                color: Some(Rgb::CODE_GREY),
                ..base
            },
        }
    }
}

pub fn styled(runs: &[Run]) -> Vec<StyledRun> {
    runs.iter().map(StyledRun::from).collect()
}

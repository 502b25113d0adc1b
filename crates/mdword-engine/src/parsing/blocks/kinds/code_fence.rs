/// How a fenced code block is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceClose {
    /// Any line starting with the fence closes the block (top level).
    Prefix,
    /// Only a line consisting of the bare fence closes the block (inside quotes).
    Bare,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string (language) if `trimmed` opens a fence.
    ///
    /// `Some(None)` is a fence without a language.
    pub fn open(trimmed: &str) -> Option<Option<&str>> {
        let info = trimmed.strip_prefix(Self::BACKTICKS)?.trim();
        Some((!info.is_empty()).then_some(info))
    }

    pub fn closes(close: FenceClose, line: &str) -> bool {
        let trimmed = line.trim();
        match close {
            FenceClose::Prefix => trimmed.starts_with(Self::BACKTICKS),
            FenceClose::Bare => trimmed == Self::BACKTICKS,
        }
    }
}

use crate::patterns::lazy_regex;

/// Strong emphasis delimited by double asterisks.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";

    lazy_regex! {
        /// Non-greedy, single line. Group 1 is the content.
        pub fn pattern = r"\*\*(.*?)\*\*";
    }
}

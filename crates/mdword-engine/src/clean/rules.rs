//! Individual stripping rules shared by the cleaning pipeline and the inline
//! resolver.

use crate::{
    config::Configuration,
    parsing::{
        blocks::kinds::{Heading, ListItem},
        inline::kinds::{Bold, Marker},
    },
    patterns::lazy_regex,
};

lazy_regex! {
    fn doubled_single_quote = r"''(.*?)''";
}

lazy_regex! {
    fn strikethrough = r"~~(.*?)~~";
}

lazy_regex! {
    fn highlight = r"==(.+?)==";
}

lazy_regex! {
    fn link = r"\[([^\]]+)\]\([^)]+\)";
}

/// Replaces every match of `re` with its first capture group.
fn unwrap_all(re: &regex::Regex, text: &str) -> String {
    re.replace_all(text, "${1}").into_owned()
}

/// Rules applied regardless of configuration: heading hashes, bold,
/// `''x''` and the `` md``x`` `` marker.
pub fn strip_structure(text: &str) -> String {
    let text = Heading::prefix_pattern().replace_all(text, "");
    let text = unwrap_all(Bold::pattern(), &text);
    let text = unwrap_all(doubled_single_quote(), &text);
    unwrap_all(Marker::pattern(), &text)
}

/// The configurable inline rules: italic, strikethrough, highlight, links.
///
/// Plain runs produced by the resolver go through exactly this function.
pub fn strip_inline(text: &str, cfg: &Configuration) -> String {
    let mut out = text.to_string();
    if cfg.remove_italic {
        out = strip_single_delimiter(&out, b'*');
        out = strip_single_delimiter(&out, b'_');
    }
    if cfg.remove_strikethrough {
        out = unwrap_all(strikethrough(), &out);
    }
    if cfg.remove_highlight {
        out = unwrap_all(highlight(), &out);
    }
    if cfg.remove_links {
        out = unwrap_all(link(), &out);
    }
    out
}

/// Configurable line-prefix rules for list markers.
///
/// With both flags set the two marker kinds are stripped together, so a
/// mixed prefix like `- 1. x` goes in one replacement.
pub fn strip_list_markers(text: &str, cfg: &Configuration) -> String {
    let prefix = match (cfg.remove_unordered_list, cfg.remove_ordered_list) {
        (true, true) => ListItem::any_prefix(),
        (true, false) => ListItem::bullet_prefix(),
        (false, true) => ListItem::number_prefix(),
        (false, false) => return text.to_string(),
    };
    prefix.replace_all(text, "").into_owned()
}

/// Removes single-character emphasis such as `*x*` or `_x_`.
///
/// An opener is a delimiter with no delimiter on either side; the closer is
/// the nearest delimiter on the same line not followed by another one. Doubled
/// delimiters (`**bold**`, `__x__`) therefore never open a match.
pub fn strip_single_delimiter(text: &str, delim: u8) -> String {
    let bytes = text.as_bytes();
    let is_delim = |i: usize| bytes.get(i) == Some(&delim);

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        let opens = is_delim(i) && !(i > 0 && is_delim(i - 1)) && !is_delim(i + 1);
        if opens && let Some(close) = find_closer(bytes, i + 1, delim) {
            out.push_str(&text[copied..i]);
            out.push_str(&text[i + 1..close]);
            copied = close + 1;
            i = close + 1;
            continue;
        }
        i += 1;
    }
    out.push_str(&text[copied..]);
    out
}

fn find_closer(bytes: &[u8], from: usize, delim: u8) -> Option<usize> {
    for (j, &b) in bytes.iter().enumerate().skip(from) {
        if b == b'\n' {
            return None;
        }
        if b == delim && bytes.get(j + 1) != Some(&delim) {
            return Some(j);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("*a*", "a")]
    #[case("x *a* y *b*", "x a y b")]
    #[case("**bold**", "**bold**")]
    #[case("*a**", "a*")]
    #[case("*a**b*", "a*b*")]
    #[case("*open\nclose*", "*open\nclose*")]
    #[case("2 * 3 = 6", "2 * 3 = 6")]
    #[case("日*本*語", "日本語")]
    fn single_asterisk(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_single_delimiter(input, b'*'), expected);
    }

    #[test]
    fn single_underscore_leaves_doubled_alone() {
        assert_eq!(strip_single_delimiter("_a_ __b__", b'_'), "a __b__");
    }

    #[test]
    fn structure_rules_always_apply() {
        assert_eq!(
            strip_structure("## **Title** ''q'' md``m``"),
            "Title q m"
        );
    }

    #[test]
    fn heading_hashes_stripped_per_line() {
        assert_eq!(strip_structure("# one\n### two"), "one\ntwo");
    }

    #[test]
    fn inline_rules_follow_flags() {
        let text = "*i* ~~s~~ ==h== [l](http://x)";
        assert_eq!(strip_inline(text, &Configuration::default()), text);

        let cfg = Configuration {
            remove_italic: true,
            remove_strikethrough: true,
            remove_highlight: true,
            remove_links: true,
            ..Configuration::default()
        };
        assert_eq!(strip_inline(text, &cfg), "i s h l");
    }

    #[test]
    fn empty_highlight_is_not_a_match() {
        let cfg = Configuration {
            remove_highlight: true,
            ..Configuration::default()
        };
        assert_eq!(strip_inline("a ==== b", &cfg), "a ==== b");
    }

    #[test]
    fn repeated_heading_hashes_go_in_one_replacement() {
        assert_eq!(strip_structure("# # ### Title\n#\t# x"), "Title\nx");
    }

    #[rstest]
    #[case(true, false, "- * + a\n1. b", "a\n1. b")]
    #[case(false, true, "1. 2. a\n- b", "a\n- b")]
    #[case(true, true, "- 1. * 2. a", "a")]
    fn repeated_list_markers_go_in_one_replacement(
        #[case] unordered: bool,
        #[case] ordered: bool,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        let cfg = Configuration {
            remove_unordered_list: unordered,
            remove_ordered_list: ordered,
            ..Configuration::default()
        };
        assert_eq!(strip_list_markers(input, &cfg), expected);
    }

    #[test]
    fn list_markers_follow_flags() {
        let cfg = Configuration {
            remove_unordered_list: true,
            ..Configuration::default()
        };
        assert_eq!(
            strip_list_markers("- a\n  * b\n1. c", &cfg),
            "a\nb\n1. c"
        );
    }
}

//! Lazily compiled built-in patterns.
//!
//! Every pattern is a compile-time constant, so a failure to compile is a
//! programming error rather than a runtime condition.

/// Declares a function returning a process-wide compiled [`regex::Regex`].
macro_rules! lazy_regex {
    ($(#[$meta:meta])* $vis:vis fn $name:ident = $re:expr;) => {
        $(#[$meta])*
        $vis fn $name() -> &'static ::regex::Regex {
            static RE: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
            RE.get_or_init(|| ::regex::Regex::new($re).expect("invalid built-in pattern"))
        }
    };
}

pub(crate) use lazy_regex;

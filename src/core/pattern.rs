//! Compilation helpers for the built-in country patterns.

use regex::{Regex, RegexBuilder};

/// Compile a built-in pattern with ASCII-only `\d`, `\s` and `\b`.
///
/// Only called from `LazyLock` initialisers with literal patterns, all of
/// which are exercised by the test suite.
pub(crate) fn ascii(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .unicode(false)
        .build()
        .unwrap_or_else(|err| panic!("built-in pattern {pattern:?} does not compile: {err}"))
}

/// Compile a built-in pattern that needs Unicode literals.
pub(crate) fn unicode(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|err| panic!("built-in pattern {pattern:?} does not compile: {err}"))
}

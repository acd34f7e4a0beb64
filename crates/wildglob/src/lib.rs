//! Whole-string wildcard matching.
//!
//! A pattern may contain two wildcard symbols:
//! - a *zero-or-more* symbol (`*` by default) matching any run of characters, including an empty one
//! - an *exactly-one* symbol (`.` by default) matching any single character
//!
//! Every other pattern character is a literal compared with the data by a [`CharCompare`] policy.
//! A match always covers the whole data string.
//!
//! # Examples
//!
//! ```
//! use wildglob::{is_glob, matches};
//!
//! assert!(matches("report_01.csv", "report_*.csv"));
//! assert!(matches("abc", "a.c"));
//! assert!(!matches("abcdef", "a*g"));
//!
//! assert!(is_glob("report_*.csv"));
//! assert!(!is_glob("report_01"));
//! ```

// private modules
mod compare;
mod matcher;
mod pattern;
mod symbols;

// public uses
pub use compare::{CaseInsensitive, CaseMode, CaseSensitive, CharCompare};
pub use matcher::{Matcher, match_iter};
pub use pattern::Pattern;
pub use symbols::Symbols;

/// Tests whether `pattern` matches the whole of `data` using the default symbols and case-sensitive comparison.
///
/// ```
/// assert!(wildglob::matches("", "*"));
/// assert!(wildglob::matches("aaaa", "a*a"));
/// assert!(!wildglob::matches("abc", ""));
/// ```
#[inline]
pub fn matches(data: &str, pattern: &str) -> bool {
    Matcher::new().matches(data, pattern)
}

/// Tests whether `pattern` contains any of the default wildcard symbols.
///
/// ```
/// assert!(wildglob::is_glob("a*"));
/// assert!(wildglob::is_glob("a.b"));
/// assert!(!wildglob::is_glob("ab"));
/// ```
#[inline]
pub fn is_glob(pattern: &str) -> bool {
    Symbols::<char>::default().is_glob(pattern)
}

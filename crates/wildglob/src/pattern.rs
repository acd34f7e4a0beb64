// std imports
use std::fmt;

// local imports
use crate::{
    compare::{CaseSensitive, CharCompare},
    matcher::Matcher,
};

/// A wildcard pattern bound to the matcher it is evaluated with.
///
/// # Examples
///
/// ```
/// use wildglob::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
/// assert!(pattern.is_glob());
///
/// let pattern = Pattern::new("test.log");
/// assert!(pattern.matches("test1log"));
/// assert!(!pattern.matches("test.logs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern<C = CaseSensitive> {
    raw: String,
    glob: bool,
    matcher: Matcher<C>,
}

impl Pattern {
    /// Creates a case-sensitive pattern with the default symbols.
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_matcher(raw, Matcher::new())
    }
}

impl<C> Pattern<C> {
    /// Creates a pattern evaluated by `matcher`.
    ///
    /// This function is infallible; all input strings are valid patterns.
    pub fn with_matcher(raw: impl Into<String>, matcher: Matcher<C>) -> Self {
        let raw = raw.into();
        let glob = matcher.is_glob(&raw);
        Self { raw, glob, matcher }
    }

    /// Returns `true` if the pattern contains any wildcard symbol.
    ///
    /// A pattern that is not a glob matches only text equal to it.
    #[inline]
    pub fn is_glob(&self) -> bool {
        self.glob
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn matcher(&self) -> &Matcher<C> {
        &self.matcher
    }
}

impl<C: CharCompare<char>> Pattern<C> {
    /// Tests whether the pattern matches the whole of `text`.
    ///
    /// ```
    /// use wildglob::{CaseInsensitive, Matcher, Pattern};
    ///
    /// let pattern = Pattern::with_matcher("*test*", Matcher::new().with_compare(CaseInsensitive));
    /// assert!(pattern.matches("this is a TEST case"));
    /// assert!(pattern.matches("test"));
    /// assert!(!pattern.matches("no match here"));
    /// ```
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.matches(text, &self.raw)
    }
}

impl<C> fmt::Display for Pattern<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<C> AsRef<str> for Pattern<C> {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests;

// third-party imports
use memchr::memchr2;

// ---

/// The pair of wildcard symbols recognized in a pattern.
///
/// Symbols are only special in the pattern, a data string may contain them freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub struct Symbols<T = char> {
    /// Matches any run of zero or more data characters.
    pub zero_or_more: T,
    /// Matches exactly one data character.
    pub exactly_one: T,
}

impl<T> Symbols<T> {
    pub const fn new(zero_or_more: T, exactly_one: T) -> Self {
        Self {
            zero_or_more,
            exactly_one,
        }
    }
}

impl<T: PartialEq> Symbols<T> {
    /// Returns `true` if the two symbols differ.
    ///
    /// With equal symbols every occurrence acts as zero-or-more.
    #[inline]
    pub fn are_distinct(&self) -> bool {
        self.zero_or_more != self.exactly_one
    }
}

impl Default for Symbols<char> {
    fn default() -> Self {
        Self::new('*', '.')
    }
}

impl Default for Symbols<u8> {
    fn default() -> Self {
        Self::new(b'*', b'.')
    }
}

impl Symbols<char> {
    /// Tests whether `pattern` contains any of the symbols.
    pub fn is_glob(&self, pattern: &str) -> bool {
        match (ascii(self.zero_or_more), ascii(self.exactly_one)) {
            (Some(a), Some(b)) => memchr2(a, b, pattern.as_bytes()).is_some(),
            _ => pattern.contains(|c| c == self.zero_or_more || c == self.exactly_one),
        }
    }
}

impl Symbols<u8> {
    /// Tests whether `pattern` contains any of the symbols.
    #[inline]
    pub fn is_glob(&self, pattern: &[u8]) -> bool {
        memchr2(self.zero_or_more, self.exactly_one, pattern).is_some()
    }
}

impl TryFrom<Symbols<char>> for Symbols<u8> {
    type Error = Symbols<char>;

    /// Converts ASCII symbols to their byte form, non-ASCII symbols are returned back as the error.
    fn try_from(symbols: Symbols<char>) -> Result<Self, Self::Error> {
        match (ascii(symbols.zero_or_more), ascii(symbols.exactly_one)) {
            (Some(zero_or_more), Some(exactly_one)) => Ok(Self::new(zero_or_more, exactly_one)),
            _ => Err(symbols),
        }
    }
}

#[inline]
fn ascii(ch: char) -> Option<u8> {
    if ch.is_ascii() { Some(ch as u8) } else { None }
}

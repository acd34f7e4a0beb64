// local imports
use crate::{
    compare::{CaseSensitive, CharCompare},
    symbols::Symbols,
};

// ---

/// Tests whether `pattern` matches the whole of `data`.
///
/// Both sequences are walked with a pair of cursors. When a run of zero-or-more symbols is met,
/// the data cursor skips ahead to the first character that can start matching the rest of the pattern,
/// and that position is remembered as the only backtrack point. A later mismatch resumes from it
/// with one more data character given to the wildcard. A newer wildcard run replaces the point.
///
/// The zero-or-more symbol wins over a literal comparison, so `*` in the pattern is never matched
/// literally against `*` in the data. When both symbols are equal, each occurrence acts as zero-or-more.
///
/// Works with any cloneable iterator, e.g. [`str::chars`] or copied bytes of a slice:
///
/// ```
/// use wildglob::{CaseInsensitive, Symbols, match_iter};
///
/// let data = b"Report_01.CSV";
/// let pattern = b"report_*.csv";
/// let symbols = Symbols::new(b'*', b'?');
/// assert!(match_iter(data.iter().copied(), pattern.iter().copied(), symbols, &CaseInsensitive));
/// ```
pub fn match_iter<T, D, P, C>(data: D, pattern: P, symbols: Symbols<T>, compare: &C) -> bool
where
    T: Copy + PartialEq,
    D: Iterator<Item = T> + Clone,
    P: Iterator<Item = T> + Clone,
    C: CharCompare<T> + ?Sized,
{
    let mut p = pattern;
    let mut d = data;
    let mut resume: Option<(P, D)> = None;

    loop {
        match p.clone().next() {
            Some(c) if c == symbols.zero_or_more => {
                // `star` stays at the last symbol of the run
                let mut star = p.clone();
                p.next();
                while p.clone().next() == Some(symbols.zero_or_more) {
                    star = p.clone();
                    p.next();
                }

                let Some(next) = p.clone().next() else {
                    return true;
                };

                loop {
                    let mut ahead = d.clone();
                    match ahead.next() {
                        Some(x) if next == symbols.exactly_one || compare.same(next, x) => {
                            resume = Some((star, ahead));
                            break;
                        }
                        Some(_) => d = ahead,
                        None => return false,
                    }
                }
                continue;
            }
            Some(c) => {
                let mut ahead = d.clone();
                match ahead.next() {
                    Some(x) if c == symbols.exactly_one || compare.same(c, x) => {
                        p.next();
                        d = ahead;
                        continue;
                    }
                    Some(_) => {}
                    None => return false,
                }
            }
            None => {
                if d.clone().next().is_none() {
                    return true;
                }
            }
        }

        match &resume {
            Some((rp, rd)) => {
                p = rp.clone();
                d = rd.clone();
            }
            None => return false,
        }
    }
}

// ---

/// Wildcard symbols together with a character comparison policy.
///
/// # Examples
///
/// ```
/// use wildglob::{CaseInsensitive, Matcher, Symbols};
///
/// let matcher = Matcher::new();
/// assert!(matcher.matches("abc", "a.c"));
/// assert!(!matcher.matches("ABC", "abc"));
///
/// let matcher = Matcher::new().with_compare(CaseInsensitive);
/// assert!(matcher.matches("ABC", "abc"));
///
/// let matcher = Matcher::new().with_symbols(Symbols::new('%', '_'));
/// assert!(matcher.matches("hello", "h_l%"));
/// assert!(matcher.is_glob("h_llo"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Matcher<C = CaseSensitive> {
    symbols: Symbols,
    compare: C,
}

impl Matcher {
    /// Creates a case-sensitive matcher with the default symbols.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> Matcher<C> {
    pub fn with_symbols(self, symbols: Symbols) -> Self {
        Self { symbols, ..self }
    }

    pub fn with_compare<C2>(self, compare: C2) -> Matcher<C2> {
        Matcher {
            symbols: self.symbols,
            compare,
        }
    }

    #[inline]
    pub fn symbols(&self) -> Symbols {
        self.symbols
    }

    #[inline]
    pub fn compare(&self) -> &C {
        &self.compare
    }

    /// Tests whether `pattern` contains any of the matcher's symbols.
    #[inline]
    pub fn is_glob(&self, pattern: &str) -> bool {
        self.symbols.is_glob(pattern)
    }
}

impl<C: CharCompare<char>> Matcher<C> {
    /// Tests whether `pattern` matches the whole of `data`.
    #[inline]
    pub fn matches(&self, data: &str, pattern: &str) -> bool {
        match_iter(data.chars(), pattern.chars(), self.symbols, &self.compare)
    }
}

/// Decides whether a literal pattern character matches a data character.
pub trait CharCompare<T> {
    fn same(&self, pattern: T, data: T) -> bool;
}

impl<T, F> CharCompare<T> for F
where
    F: Fn(T, T) -> bool,
{
    #[inline]
    fn same(&self, pattern: T, data: T) -> bool {
        self(pattern, data)
    }
}

// ---

/// Exact comparison.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaseSensitive;

impl<T: PartialEq> CharCompare<T> for CaseSensitive {
    #[inline]
    fn same(&self, pattern: T, data: T) -> bool {
        pattern == data
    }
}

// ---

/// Comparison ignoring letter case.
///
/// Characters are folded with [`char::to_lowercase`], bytes with ASCII folding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaseInsensitive;

impl CharCompare<char> for CaseInsensitive {
    #[inline]
    fn same(&self, pattern: char, data: char) -> bool {
        pattern == data || pattern.to_lowercase().eq(data.to_lowercase())
    }
}

impl CharCompare<u8> for CaseInsensitive {
    #[inline]
    fn same(&self, pattern: u8, data: u8) -> bool {
        pattern.eq_ignore_ascii_case(&data)
    }
}

// ---

/// Comparison policy chosen at run time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CaseMode {
    #[default]
    Sensitive,
    Insensitive,
}

impl<T> CharCompare<T> for CaseMode
where
    CaseSensitive: CharCompare<T>,
    CaseInsensitive: CharCompare<T>,
{
    #[inline]
    fn same(&self, pattern: T, data: T) -> bool {
        match self {
            Self::Sensitive => CaseSensitive.same(pattern, data),
            Self::Insensitive => CaseInsensitive.same(pattern, data),
        }
    }
}

#[cfg(test)]
mod tests;

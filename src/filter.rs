// third-party imports
use wildglob::{CaseMode, Matcher, Pattern};

// ---

/// Selects lines matched in full by any of a set of patterns.
pub struct LineFilter {
    rules: Vec<Rule>,
    invert: bool,
}

impl LineFilter {
    pub fn new<I, S>(patterns: I, matcher: Matcher<CaseMode>, invert: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules = patterns
            .into_iter()
            .map(|raw| {
                let pattern = Pattern::with_matcher(raw, matcher);
                log::debug!(
                    "pattern {:?} is {}",
                    pattern.as_str(),
                    if pattern.is_glob() { "a glob" } else { "a literal" }
                );
                Rule::new(pattern)
            })
            .collect();

        Self { rules, invert }
    }

    /// Returns `true` if the line is selected.
    #[inline]
    pub fn accept(&self, line: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(line)) != self.invert
    }

    pub fn patterns(&self) -> impl Iterator<Item = &Pattern<CaseMode>> {
        self.rules.iter().map(|rule| rule.pattern())
    }
}

// ---

enum Rule {
    Exact(Pattern<CaseMode>),
    Wild(Pattern<CaseMode>),
}

impl Rule {
    fn new(pattern: Pattern<CaseMode>) -> Self {
        if !pattern.is_glob() && *pattern.matcher().compare() == CaseMode::Sensitive {
            Self::Exact(pattern)
        } else {
            Self::Wild(pattern)
        }
    }

    #[inline]
    fn matches(&self, line: &str) -> bool {
        match self {
            Self::Exact(pattern) => pattern.as_str() == line,
            Self::Wild(pattern) => pattern.matches(line),
        }
    }

    fn pattern(&self) -> &Pattern<CaseMode> {
        match self {
            Self::Exact(pattern) | Self::Wild(pattern) => pattern,
        }
    }
}

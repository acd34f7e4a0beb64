use rstest::rstest;

use super::*;
use crate::{compare::CaseMode, symbols::Symbols};

fn pattern(s: &str) -> Pattern {
    Pattern::new(s)
}

#[rstest]
#[case("hello", false)]
#[case("*", true)]
#[case(".", true)]
#[case("report_*.csv", true)]
#[case("report_01", false)]
#[case("", false)]
fn test_is_glob(#[case] raw: &str, #[case] expected: bool) {
    assert_eq!(pattern(raw).is_glob(), expected);
}

#[test]
fn test_is_glob_custom_symbols() {
    let matcher = Matcher::new().with_symbols(Symbols::new('*', '?'));
    assert!(!Pattern::with_matcher("report_01.csv", matcher).is_glob());
    assert!(Pattern::with_matcher("report_0?.csv", matcher).is_glob());
}

#[rstest]
#[case("*.txt", "file.txt", true)]
#[case("*.txt", "path/to/file.txt", true)]
#[case("*.txt", "file.pdf", false)]
#[case("test_*", "test_debug", true)]
#[case("....-..-..", "2024-01-15", true)]
#[case("....-..-..", "2024-1-15", false)]
fn test_matches(#[case] raw: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(pattern(raw).matches(text), expected);
}

#[test]
fn test_case_mode() {
    let p = Pattern::with_matcher("abc*", Matcher::new().with_compare(CaseMode::Insensitive));
    assert!(p.matches("ABCdef"));
    let p = Pattern::with_matcher("abc*", Matcher::new().with_compare(CaseMode::Sensitive));
    assert!(!p.matches("ABCdef"));
}

#[rstest]
#[case("hello")]
#[case("***")]
#[case("foo*bar.baz")]
#[case("")]
fn test_display(#[case] raw: &str) {
    let p = pattern(raw);
    assert_eq!(p.to_string(), raw);
    assert_eq!(p.as_str(), raw);
    assert_eq!(p.as_ref(), raw);
}

#[test]
fn test_default() {
    let p = Pattern::<CaseSensitive>::default();
    assert!(!p.is_glob());
    assert!(p.matches(""));
    assert!(!p.matches("x"));
}

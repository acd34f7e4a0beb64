use rstest::rstest;

use super::*;

#[rstest]
#[case('a', 'a', true)]
#[case('a', 'A', false)]
#[case('ä', 'ä', true)]
#[case('ä', 'Ä', false)]
fn test_case_sensitive(#[case] pattern: char, #[case] data: char, #[case] expected: bool) {
    assert_eq!(CaseSensitive.same(pattern, data), expected);
    assert_eq!(CaseMode::Sensitive.same(pattern, data), expected);
}

#[rstest]
#[case('a', 'a', true)]
#[case('a', 'A', true)]
#[case('Z', 'z', true)]
#[case('ä', 'Ä', true)]
#[case('Σ', 'σ', true)]
#[case('a', 'b', false)]
#[case('1', '1', true)]
fn test_case_insensitive(#[case] pattern: char, #[case] data: char, #[case] expected: bool) {
    assert_eq!(CaseInsensitive.same(pattern, data), expected);
    assert_eq!(CaseMode::Insensitive.same(pattern, data), expected);
}

#[test]
fn test_bytes() {
    assert!(CaseSensitive.same(b'x', b'x'));
    assert!(!CaseSensitive.same(b'x', b'X'));
    assert!(CaseInsensitive.same(b'x', b'X'));
    assert!(!CaseInsensitive.same(b'x', b'y'));
    assert!(CaseMode::Insensitive.same(b'Q', b'q'));
}

#[test]
fn test_closure() {
    let digits = |p: char, d: char| p == d || (p == '#' && d.is_ascii_digit());
    assert!(digits.same('#', '7'));
    assert!(digits.same('a', 'a'));
    assert!(!digits.same('#', 'x'));
}

#[test]
fn test_default_mode() {
    assert_eq!(CaseMode::default(), CaseMode::Sensitive);
}

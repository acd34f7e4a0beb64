use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Opt {
    Opt::try_parse_from(std::iter::once("wgrep").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_positional_pattern() {
    let opt = parse(&["*error*", "a.log", "b.log"]);
    assert_eq!(
        opt.patterns_and_inputs(),
        (vec!["*error*".to_string()], vec!["a.log".to_string(), "b.log".to_string()])
    );
}

#[test]
fn test_explicit_patterns() {
    let opt = parse(&["-e", "*error*", "--pattern", "warn*", "a.log"]);
    assert_eq!(
        opt.patterns_and_inputs(),
        (
            vec!["*error*".to_string(), "warn*".to_string()],
            vec!["a.log".to_string()]
        )
    );

    let opt = parse(&["-e", "x"]);
    assert_eq!(opt.patterns_and_inputs(), (vec!["x".to_string()], vec![]));
}

#[test]
fn test_pattern_required() {
    assert!(Opt::try_parse_from(["wgrep"]).is_err());
    assert!(Opt::try_parse_from(["wgrep", "-v"]).is_err());
}

#[test]
fn test_defaults() {
    let opt = parse(&["x"]);
    assert_eq!(opt.case_mode(), CaseMode::Sensitive);
    assert_eq!(opt.symbols(), Symbols::new('*', '.'));
    assert!(!opt.invert_match);
    assert!(!opt.count);
    assert!(!opt.quiet);
    assert!(!opt.classify);
}

#[test]
fn test_case_options() {
    assert_eq!(parse(&["-i", "x"]).case_mode(), CaseMode::Insensitive);
    assert_eq!(parse(&["--case", "insensitive", "x"]).case_mode(), CaseMode::Insensitive);
    assert_eq!(parse(&["--case", "sensitive", "-i", "x"]).case_mode(), CaseMode::Insensitive);
    assert_eq!(
        parse(&["--case", "insensitive", "--case", "sensitive", "x"]).case_mode(),
        CaseMode::Sensitive
    );
    assert!(Opt::try_parse_from(["wgrep", "--case", "maybe", "x"]).is_err());
}

#[test]
fn test_symbols() {
    let opt = parse(&["--zero-or-more", "%", "--exactly-one", "_", "x"]);
    assert_eq!(opt.symbols(), Symbols::new('%', '_'));
    assert!(Opt::try_parse_from(["wgrep", "--exactly-one", "??", "x"]).is_err());
}

#[test]
fn test_count_conflicts_with_quiet() {
    assert!(Opt::try_parse_from(["wgrep", "-c", "-q", "x"]).is_err());
}

#[test]
fn test_case_option_conversion() {
    for mode in [CaseMode::Sensitive, CaseMode::Insensitive] {
        assert_eq!(CaseMode::from(CaseOption::from(mode)), mode);
    }
}

// third-party imports
use clap::{ArgAction, Parser, ValueEnum};
use wildglob::{CaseMode, Symbols};

// local imports
use crate::config;

// ---

/// Prints lines that a wildcard pattern matches in full.
///
/// In patterns the zero-or-more symbol ('*' by default) matches any run of characters
/// and the exactly-one symbol ('.' by default) matches any single character.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Opt {
    /// Pattern followed by input files, or only input files if --pattern is used; no files or '-' means standard input.
    #[arg(value_name = "ARGS", required_unless_present = "pattern")]
    pub args: Vec<String>,

    /// Wildcard pattern, may be repeated; a line is selected if any pattern matches it.
    #[arg(short = 'e', long, number_of_values = 1)]
    pub pattern: Vec<String>,

    /// Comparison of literal pattern characters.
    #[arg(
        long,
        value_enum,
        env = "WGREP_CASE",
        default_value_t = config::get().case.into(),
        overrides_with = "case",
    )]
    pub case: CaseOption,

    /// Handful alias for --case=insensitive, overrides --case option.
    #[arg(short = 'i', long, action = ArgAction::SetTrue)]
    pub ignore_case: bool,

    /// Symbol matching any run of zero or more characters.
    #[arg(
        long,
        env = "WGREP_ZERO_OR_MORE",
        default_value_t = config::get().symbols.zero_or_more,
        overrides_with = "zero_or_more",
    )]
    pub zero_or_more: char,

    /// Symbol matching exactly one character.
    #[arg(
        long,
        env = "WGREP_EXACTLY_ONE",
        default_value_t = config::get().symbols.exactly_one,
        overrides_with = "exactly_one",
    )]
    pub exactly_one: char,

    /// Select lines that do not match.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only the number of selected lines.
    #[arg(short, long, conflicts_with = "quiet")]
    pub count: bool,

    /// Print nothing, report the result with the exit status only.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print each pattern followed by 'glob' or 'literal' and exit.
    #[arg(long)]
    pub classify: bool,
}

impl Opt {
    /// Splits positional arguments into patterns and input file names.
    pub fn patterns_and_inputs(&self) -> (Vec<String>, Vec<String>) {
        if !self.pattern.is_empty() {
            return (self.pattern.clone(), self.args.clone());
        }

        match self.args.split_first() {
            Some((pattern, files)) => (vec![pattern.clone()], files.to_vec()),
            None => (Vec::new(), Vec::new()),
        }
    }

    pub fn case_mode(&self) -> CaseMode {
        if self.ignore_case {
            CaseMode::Insensitive
        } else {
            self.case.into()
        }
    }

    pub fn symbols(&self) -> Symbols {
        Symbols::new(self.zero_or_more, self.exactly_one)
    }
}

// ---

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOption {
    Sensitive,
    Insensitive,
}

impl From<CaseMode> for CaseOption {
    fn from(mode: CaseMode) -> Self {
        match mode {
            CaseMode::Sensitive => Self::Sensitive,
            CaseMode::Insensitive => Self::Insensitive,
        }
    }
}

impl From<CaseOption> for CaseMode {
    fn from(option: CaseOption) -> Self {
        match option {
            CaseOption::Sensitive => Self::Sensitive,
            CaseOption::Insensitive => Self::Insensitive,
        }
    }
}

#[cfg(test)]
mod tests;

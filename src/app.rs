// std imports
use std::io::{BufRead, Write};

// third-party imports
use wildglob::{CaseMode, Matcher, Symbols};

// local imports
use crate::{
    error::*,
    filter::LineFilter,
    input::InputReference,
};

// ---

pub struct Options {
    pub patterns: Vec<String>,
    pub case: CaseMode,
    pub symbols: Symbols,
    pub invert: bool,
    pub output: OutputMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            case: CaseMode::default(),
            symbols: Symbols::default(),
            invert: false,
            output: OutputMode::default(),
        }
    }
}

/// What is written for the selected lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The lines themselves.
    #[default]
    Lines,
    /// Number of selected lines per input.
    Count,
    /// Nothing, reading stops at the first selected line.
    Quiet,
}

// ---

pub struct App {
    options: Options,
    filter: LineFilter,
}

impl App {
    pub fn new(options: Options) -> Result<Self> {
        if !options.symbols.are_distinct() {
            return Err(Error::SameSymbols(options.symbols.zero_or_more));
        }

        let matcher = Matcher::new().with_symbols(options.symbols).with_compare(options.case);
        let filter = LineFilter::new(options.patterns.iter().cloned(), matcher, options.invert);

        Ok(Self { options, filter })
    }

    /// Filters the inputs in order, returns `true` if any line was selected.
    pub fn run(&self, inputs: &[InputReference], output: &mut impl Write) -> Result<bool> {
        let named = inputs.len() > 1;
        let mut total = 0;

        for reference in inputs {
            let input = reference.open()?;
            let selected = self.process(input.stream, output)?;
            log::debug!("{}: {} line(s) selected", reference, selected);

            if self.options.output == OutputMode::Count {
                if named {
                    writeln!(output, "{}:{}", reference, selected)?;
                } else {
                    writeln!(output, "{}", selected)?;
                }
            }

            total += selected;
            if total != 0 && self.options.output == OutputMode::Quiet {
                break;
            }
        }

        Ok(total != 0)
    }

    /// Filters a single input, returns the number of selected lines.
    pub fn process<R: BufRead>(&self, mut input: R, output: &mut impl Write) -> Result<usize> {
        let mut buf = Vec::new();
        let mut selected = 0;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            if !self.filter.accept(&String::from_utf8_lossy(trim_eol(&buf))) {
                continue;
            }

            selected += 1;
            match self.options.output {
                OutputMode::Lines => {
                    output.write_all(&buf)?;
                    if !buf.ends_with(b"\n") {
                        output.write_all(b"\n")?;
                    }
                }
                OutputMode::Count => {}
                OutputMode::Quiet => break,
            }
        }

        Ok(selected)
    }

    /// Writes each pattern with its kind, `glob` or `literal`.
    pub fn classify(&self, output: &mut impl Write) -> Result<()> {
        for pattern in self.filter.patterns() {
            let kind = if pattern.is_glob() { "glob" } else { "literal" };
            writeln!(output, "{}\t{}", pattern, kind)?;
        }
        Ok(())
    }
}

fn trim_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

// std imports
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("file {path:?} not found")]
    FileNotFound { path: PathBuf },
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("wildcard symbols must differ, both are {0:?}")]
    SameSymbols(char),
}

impl Error {
    /// Prints the error to stderr, styled if stderr is a terminal.
    pub fn log(&self) {
        let mut stderr = io::stderr().lock();
        let result = if stderr.is_terminal() {
            self.log_to(&mut stderr)
        } else {
            writeln!(stderr, "error: {}", self)
        };
        result.ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)
    }

    /// Returns `true` if the error is caused by a closed output pipe.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

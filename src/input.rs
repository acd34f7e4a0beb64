// std imports
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, stdin},
    path::PathBuf,
};

// local imports
use crate::error::{Error, Result};

// ---

pub type InputStream = Box<dyn BufRead>;

// ---

/// A reference to an input that has not been opened yet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Interprets a command-line argument, `-` stands for standard input.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(arg.into())
        }
    }

    /// Opens the input for buffered reading.
    pub fn open(&self) -> Result<Input> {
        log::debug!("opening {}", self);

        let stream: InputStream = match self {
            Self::Stdin => Box::new(BufReader::new(stdin())),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => Error::FileNotFound { path: path.clone() },
                    _ => Error::Open {
                        path: path.clone(),
                        source: e,
                    },
                })?;
                Box::new(BufReader::new(file))
            }
        };

        Ok(Input::new(self.clone(), stream))
    }
}

impl fmt::Display for InputReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("(stdin)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---

/// An opened input.
pub struct Input {
    pub reference: InputReference,
    pub stream: InputStream,
}

impl Input {
    pub fn new(reference: InputReference, stream: InputStream) -> Self {
        Self { reference, stream }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(InputReference::parse("-"), InputReference::Stdin);
        assert_eq!(InputReference::parse("a.log"), InputReference::File("a.log".into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(InputReference::Stdin.to_string(), "(stdin)");
        assert_eq!(InputReference::File("logs/a.log".into()).to_string(), "logs/a.log");
    }

    #[test]
    fn test_open_missing() {
        let result = InputReference::File("/nonexistent/wgrep/input.log".into())
            .open()
            .map(|_| ());
        assert_matches!(result, Err(Error::FileNotFound { .. }));
    }

    #[test]
    fn test_open_file() {
        let mut input = InputReference::File(concat!(env!("CARGO_MANIFEST_DIR"), "/etc/defaults/config.yaml").into())
            .open()
            .unwrap();
        let mut line = String::new();
        assert!(input.stream.read_line(&mut line).unwrap() > 0);
    }
}

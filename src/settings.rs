// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;
use wildglob::{CaseMode, Matcher, Symbols};

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub case: CaseMode,
    pub symbols: Symbols,
}

impl Settings {
    /// Loads settings layering `sources` over the embedded defaults, later sources win.
    pub fn load(sources: impl IntoIterator<Item = Source>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        for source in sources {
            log::debug!("adding settings source {:?}", source);
            builder = match source {
                Source::File(path) => builder.add_source(File::from(path).required(true)),
                Source::OptionalFile(stem) => {
                    builder.add_source(File::with_name(&stem.to_string_lossy()).required(false))
                }
                Source::Yaml(text) => builder.add_source(File::from_str(&text, FileFormat::Yaml)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Returns the matcher described by the settings.
    pub fn matcher(&self) -> Matcher<CaseMode> {
        Matcher::new().with_symbols(self.symbols).with_compare(self.case)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::load([]).expect("embedded default settings are valid")
    }
}

// ---

/// A settings source layered over the embedded defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file that must exist, its format is taken from the extension.
    File(PathBuf),
    /// A path without extension, any of the supported extensions is tried and a missing file is ignored.
    OptionalFile(PathBuf),
    /// Inline YAML text.
    Yaml(String),
}

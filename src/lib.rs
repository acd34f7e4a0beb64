// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod settings;

// private modules
mod filter;

// public uses
pub use app::{App, Options, OutputMode};
pub use input::InputReference;
pub use settings::Settings;

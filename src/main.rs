// std imports
use std::{
    io::{BufWriter, Write, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use wgrep::{App, InputReference, Options, OutputMode, cli, config, error::*};

const WGREP_DEBUG_LOG: &str = "WGREP_DEBUG_LOG";
const WGREP_DEBUG_LOG_STYLE: &str = "WGREP_DEBUG_LOG_STYLE";

// ---

fn bootstrap() -> Result<()> {
    if std::env::var(WGREP_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WGREP_DEBUG_LOG).write_style(WGREP_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let settings = config::load()?;
    log::debug!("settings: {:?}", settings);
    config::global::initialize(settings);

    Ok(())
}

fn run() -> Result<bool> {
    bootstrap()?;

    let opt = cli::Opt::parse();
    let (patterns, inputs) = opt.patterns_and_inputs();

    let output = if opt.quiet {
        OutputMode::Quiet
    } else if opt.count {
        OutputMode::Count
    } else {
        OutputMode::Lines
    };

    let app = App::new(Options {
        patterns,
        case: opt.case_mode(),
        symbols: opt.symbols(),
        invert: opt.invert_match,
        output,
    })?;

    let mut out = BufWriter::new(stdout().lock());

    if opt.classify {
        app.classify(&mut out)?;
        out.flush()?;
        return Ok(true);
    }

    let inputs: Vec<_> = if inputs.is_empty() {
        vec![InputReference::Stdin]
    } else {
        inputs.iter().map(|arg| InputReference::parse(arg)).collect()
    };

    let found = app.run(&inputs, &mut out)?;
    out.flush()?;

    Ok(found)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) if err.is_broken_pipe() => {}
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}

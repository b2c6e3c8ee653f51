mod args;
mod codegen;
mod labels;
mod lut;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use args::ArgHandler;
use labels::error::LabelError;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;

/// Main application entrypoint.
fn main() -> ExitCode {
    env_logger::Builder::new()
        .format_timestamp(None)
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    // Parse CLI arguments
    let arg_handler = ArgHandler::parse();

    match start(&arg_handler) {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            exit_code(&why)
        }
    }
}

/// Read the label list, and write the generated lookups.
fn start(arg_handler: &ArgHandler) -> Result<()> {
    let input = read_input(arg_handler.input())?;

    let registry = labels::parser::parse(&input)?;
    if registry.is_empty() {
        warn!("input doesn't define any labels");
    }

    // Render everything first, a failed run must not leave partial output
    let source = codegen::render::render(&registry, arg_handler.header());
    write_output(arg_handler.output(), &source)?;

    info!(
        "generated lookups for {} labels to {}",
        registry.len(),
        arg_handler
            .output()
            .map_or_else(|| "stdout".into(), |path| path.display().to_string())
    );

    Ok(())
}

/// Label errors carry their own exit code, anything else is a plain failure.
fn exit_code(why: &anyhow::Error) -> ExitCode {
    match why.downcast_ref::<LabelError>() {
        Some(err) => ExitCode::from(err.exit_code()),
        None => ExitCode::FAILURE,
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, source: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, source).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(source.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

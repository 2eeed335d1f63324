pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::Path;

use self::cli::Cli;
use self::config::load_config;
use self::error::ContextError;
use self::formatter::{assemble, BlockFormatter};
use self::models::Config;
use self::scanner::Scanner;

/// Loads the config, bundles every input and writes the result.
pub fn run() -> Result<()> {
    let args = Cli::parse();

    let config = load_config(&args.config)?;
    let bundle = build_bundle(&config)?;

    if args.stdout {
        print!("{}", bundle);
        return Ok(());
    }

    write_output(&config.output, &bundle)?;
    println!("Context successfully written to {}", config.output.display());

    Ok(())
}

/// Formats configured files, then walked directories, into one string.
///
/// Recoverable errors are logged and the input skipped.
pub fn build_bundle(config: &Config) -> Result<String, ContextError> {
    let formatter = BlockFormatter::new(config.cut_comments, &config.exceptions);
    let mut blocks = Vec::new();
    let mut skipped = 0usize;

    for file in &config.files {
        match formatter.format_file(file) {
            Ok(block) => blocks.push(block),
            Err(err) => {
                report(err)?;
                skipped += 1;
            }
        }
    }

    for dir in &config.dirs {
        log::debug!("Walking {}", dir.display());
        for entry in Scanner::new(dir).scan() {
            let result = entry.and_then(|path| formatter.format_file(&path));
            match result {
                Ok(block) => blocks.push(block),
                Err(err) => {
                    report(err)?;
                    skipped += 1;
                }
            }
        }
    }

    log::info!("Bundled {} file(s), skipped {}", blocks.len(), skipped);
    Ok(assemble(&blocks))
}

/// Logs a recoverable error; hands a fatal one back to the caller.
fn report(err: ContextError) -> Result<(), ContextError> {
    if err.is_fatal() {
        return Err(err);
    }
    log::error!("{}", err);
    Ok(())
}

fn write_output(path: &Path, bundle: &str) -> Result<(), ContextError> {
    fs::write(path, bundle).map_err(|source| ContextError::Write {
        path: path.to_path_buf(),
        source,
    })
}

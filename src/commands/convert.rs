use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use log::info;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use nrc_convert::checks::check_conversion;
use nrc_convert::config::read_config;
use nrc_convert::converter::{failure_notice, Converter};

use crate::display;

/// What `convert` writes out
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SQL INSERT statements
    Sql,
    /// Region groups as JSON
    Json,
}

/// Options for the convert command
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub download: bool,
    pub format: OutputFormat,
    pub check: bool,
    pub report: bool,
    pub config: Option<PathBuf>,
}

/// Run the convert command
pub fn convert_command(options: &ConvertOptions) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let (config, source) = read_config(options.config.as_deref(), &current_dir)
        .context("Failed to load configuration")?;
    if let Some(path) = &source {
        info!("Using configuration from {}", path.display());
    }

    let input = read_input(options.input.as_deref())?;
    let converter = Converter::new(config)?;

    let (text, conversion) = match converter.convert(&input) {
        Ok(conversion) => {
            let text = match options.format {
                OutputFormat::Sql => conversion.sql.clone(),
                OutputFormat::Json => conversion.to_json()?,
            };
            (text, Some(conversion))
        }
        Err(err) => (failure_notice(&err), None),
    };

    let target = if let Some(path) = &options.output {
        Some(path.clone())
    } else if options.download {
        Some(current_dir.join(&converter.config().output_file))
    } else {
        None
    };

    match &target {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Saved output to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    let Some(conversion) = conversion else {
        return Ok(());
    };

    if options.report {
        display::display_conversion_summary(&conversion);
    }

    if options.check {
        let check = check_conversion(&conversion);
        display::display_check(&check);
        if !check.is_ok() {
            bail!(
                "{} generated statements failed to parse",
                check.failures.len()
            );
        }
    }

    Ok(())
}

/// Read the whole input from a file, or from stdin for `None` and `-`
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read input from stdin")?;
            Ok(input)
        }
    }
}

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use nrc_convert::config::{read_config, DEFAULT_CONFIG_FILE};

/// Usage notes and the expected column layout
pub fn format_text() -> String {
    format!(
        "{}\n\
         1. Copy your spreadsheet data including the header row\n\
         2. Save or pipe it into `nrc convert`\n\
         3. The output is MySQL INSERT statements, one per region\n\
         4. Use --output FILE or --download to save it as a SQL file\n\
         \n\
         {}\n\
         Columns, separated by tabs or by two or more spaces:\n\
         \n\
         \x20 RegionName Eng  RegionName MM  Code  NRC Pattern Eng  Code  NRC Pattern MM\n\
         \n\
         The first line is always treated as a header and dropped.\n\
         Lines with fewer than 6 columns are skipped (see --report).\n\
         \n\
         {}\n\
         One INSERT ... SELECT ... UNION SELECT statement per region, in the\n\
         order regions first appear. Settings can be overridden in {}.\n",
        "How to use this converter".bold(),
        "Expected input format".bold(),
        "Output format".bold(),
        DEFAULT_CONFIG_FILE
    )
}

/// Print the expected input format
pub fn format_command() {
    print!("{}", format_text());
}

/// Print the effective configuration as YAML
pub fn config_command(config_path: Option<&Path>) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let (config, source) =
        read_config(config_path, &current_dir).context("Failed to load configuration")?;

    match &source {
        Some(path) => eprintln!("# loaded from {}", path.display()),
        None => eprintln!("# defaults (no {} found)", DEFAULT_CONFIG_FILE),
    }
    print!("{}", config.to_yaml()?);

    Ok(())
}

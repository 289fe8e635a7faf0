use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::fs::File;
use std::path::PathBuf;
use std::process;

mod commands;
mod display;

use commands::convert::{ConvertOptions, OutputFormat};

/// NRC converter (nrc) CLI - region/township tables to SQL
#[derive(Parser)]
#[command(name = "nrc", about = "NRC data converter - tables to SQL INSERT statements", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Also write log messages to this file
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert pasted region/township data into SQL
    Convert {
        /// Input file, or - for stdin (default)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write the output to this file instead of stdout
        #[arg(short, long, value_name = "FILE", conflicts_with = "download")]
        output: Option<PathBuf>,

        /// Save the output under the configured file name (nrc_townships.sql)
        #[arg(short, long)]
        download: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Sql)]
        format: OutputFormat,

        /// Parse the generated SQL and report statements that do not parse
        #[arg(long)]
        check: bool,

        /// Print region, township and skipped-line counts to stderr
        #[arg(short, long)]
        report: bool,

        /// Path to a config file (defaults to ./nrc_convert.yaml if present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Show the expected input format
    Format,

    /// Print the effective configuration
    Config {
        /// Path to a config file (defaults to ./nrc_convert.yaml if present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn init_logger(filter_level: log::LevelFilter, logfile: Option<PathBuf>) {
    let mut loggers = vec![simplelog::TermLogger::new(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) as Box<dyn simplelog::SharedLogger>];

    if let Some(filename) = logfile {
        match File::create(&filename) {
            Ok(file) => loggers.push(simplelog::WriteLogger::new(
                filter_level,
                simplelog::Config::default(),
                file,
            )),
            Err(e) => eprintln!("Could not create log file {}: {}", filename.display(), e),
        }
    }

    if let Err(e) = simplelog::CombinedLogger::init(loggers) {
        eprintln!("Could not initialise logging: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose.log_level_filter(), cli.log_file);

    let result = match cli.command {
        Command::Convert {
            input,
            output,
            download,
            format,
            check,
            report,
            config,
        } => commands::convert::convert_command(&ConvertOptions {
            input,
            output,
            download,
            format,
            check,
            report,
            config,
        }),
        Command::Format => {
            commands::info::format_command();
            Ok(())
        }
        Command::Config { config } => commands::info::config_command(config.as_deref()),
        Command::Version => {
            display::display_version();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

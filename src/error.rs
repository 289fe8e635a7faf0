//! Error types for the converter.

use thiserror::Error;

/// Failures that can happen while turning input text into SQL.
///
/// None of these are raised for malformed input lines; short lines are
/// skipped and only show up in the conversion report.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A line or region-name pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Writing the SQL template into the output buffer failed.
    #[error("failed to write SQL output")]
    Render(#[from] std::fmt::Error),

    /// A region group reached the renderer without any township.
    #[error("region '{0}' has no townships")]
    EmptyGroup(String),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for converter operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConvertResult;

/// Name of the config file looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "nrc_convert.yaml";

/// Literal pieces of the generated SQL, plus where downloads are saved.
///
/// The defaults reproduce the `fineract_default` code-value layout, so a
/// converter built from `ConverterConfig::default()` emits the stock script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Database (schema) holding the code-value table
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Table that receives the township rows
    #[serde(default = "default_value_table")]
    pub value_table: String,

    /// Table the code id is looked up from
    #[serde(default = "default_code_table")]
    pub code_table: String,

    /// Prepended to the upper-cased region name to build the code name
    #[serde(default = "default_code_name_prefix")]
    pub code_name_prefix: String,

    /// Appended to the upper-cased region name to build the code name
    #[serde(default = "default_code_name_suffix")]
    pub code_name_suffix: String,

    /// Leading text of the description column
    #[serde(default = "default_description_prefix")]
    pub description_prefix: String,

    /// File name used by `convert --download`
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_schema() -> String {
    "fineract_default".to_string()
}

fn default_value_table() -> String {
    "m_code_value".to_string()
}

fn default_code_table() -> String {
    "m_code".to_string()
}

fn default_code_name_prefix() -> String {
    "NRC_".to_string()
}

fn default_code_name_suffix() -> String {
    "_TOWNSHIP".to_string()
}

fn default_description_prefix() -> String {
    "Township of ".to_string()
}

fn default_output_file() -> String {
    "nrc_townships.sql".to_string()
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            value_table: default_value_table(),
            code_table: default_code_table(),
            code_name_prefix: default_code_name_prefix(),
            code_name_suffix: default_code_name_suffix(),
            description_prefix: default_description_prefix(),
            output_file: default_output_file(),
        }
    }
}

impl ConverterConfig {
    /// Parse a config from YAML text. Missing keys fall back to defaults.
    pub fn from_yaml(text: &str) -> ConvertResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Serialize the config back to YAML
    pub fn to_yaml(&self) -> ConvertResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Read a config file from disk
    pub fn from_path(path: &Path) -> ConvertResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }
}

/// Reads the configuration from the given path, or looks for
/// nrc_convert.yaml in `search_dir` when no path is given.
///
/// An explicit path that does not exist is an error; a missing file in the
/// search directory just means defaults.
pub fn read_config(
    config_path: Option<&Path>,
    search_dir: &Path,
) -> ConvertResult<(ConverterConfig, Option<PathBuf>)> {
    if let Some(path) = config_path {
        let config = ConverterConfig::from_path(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    let candidate = search_dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        let config = ConverterConfig::from_path(&candidate)?;
        return Ok((config, Some(candidate)));
    }

    Ok((ConverterConfig::default(), None))
}

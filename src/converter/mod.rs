//! Conversion of pasted region/township tables into SQL
//!
//! The input is a header line followed by tab- or multi-space-delimited
//! rows. Rows are grouped by region and each region becomes one
//! `INSERT ... SELECT ... UNION SELECT ...` statement.

pub mod group;
pub mod record;
pub mod render;

#[cfg(test)]
mod tests;

use log::{debug, info};
use regex::Regex;
use serde::Serialize;

use crate::config::ConverterConfig;
use crate::error::ConvertResult;
use group::{RegionGroup, RegionGroups};
use record::{split_fields, Record, FIELD_SEPARATOR};
use render::{code_name, format_region_name, render_group, REGION_SUFFIX};

/// Output produced for blank input
pub const EMPTY_INPUT_NOTICE: &str = "Please enter some data to convert";

/// Output produced when a failure has no description
pub const UNKNOWN_ERROR_NOTICE: &str = "An unknown error occurred";

/// A data line that was dropped for having too few fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the input text
    pub line_number: usize,
    /// Number of fields the line split into
    pub field_count: usize,
}

/// A region group together with the names derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRegion {
    #[serde(flatten)]
    pub group: RegionGroup,
    pub formatted_name: String,
    pub code_name: String,
}

/// Result of one conversion: the output text plus what went into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub sql: String,
    pub regions: Vec<RenderedRegion>,
    pub skipped: Vec<SkippedLine>,
    #[serde(skip)]
    empty_input: bool,
}

impl Conversion {
    fn empty_input() -> Self {
        Self {
            sql: EMPTY_INPUT_NOTICE.to_string(),
            regions: Vec::new(),
            skipped: Vec::new(),
            empty_input: true,
        }
    }

    /// Whether the input was blank and `sql` holds the notice
    pub fn is_empty_input(&self) -> bool {
        self.empty_input
    }

    /// Total townships across all regions
    pub fn township_count(&self) -> usize {
        self.regions.iter().map(|r| r.group.townships.len()).sum()
    }

    /// Region groups and skipped lines as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct JsonOutput<'a> {
            regions: &'a [RenderedRegion],
            skipped: &'a [SkippedLine],
        }

        serde_json::to_string_pretty(&JsonOutput {
            regions: &self.regions,
            skipped: &self.skipped,
        })
    }
}

/// Parses, groups and renders input text with a fixed configuration
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
    separator: Regex,
    suffix: Regex,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> ConvertResult<Self> {
        Ok(Self {
            config,
            separator: Regex::new(FIELD_SEPARATOR)?,
            suffix: Regex::new(REGION_SUFFIX)?,
        })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Region name with any trailing " (...)" removed
    pub fn format_region_name(&self, region: &str) -> String {
        format_region_name(region, &self.suffix)
    }

    /// Convert input text into SQL.
    ///
    /// Blank input is not an error: the returned conversion carries
    /// [`EMPTY_INPUT_NOTICE`] as its text.
    pub fn convert(&self, input: &str) -> ConvertResult<Conversion> {
        if input.trim().is_empty() {
            debug!("Input is blank, nothing to convert");
            return Ok(Conversion::empty_input());
        }

        let (groups, skipped) = self.collect(input);

        let mut sql = String::new();
        let mut regions = Vec::with_capacity(groups.len());

        for group in groups.into_vec() {
            let formatted = self.format_region_name(&group.region);
            render_group(&mut sql, &group, &formatted, &self.config)?;
            debug!(
                "Rendered region '{}' with {} townships",
                group.region,
                group.townships.len()
            );

            regions.push(RenderedRegion {
                code_name: code_name(&formatted, &self.config),
                formatted_name: formatted,
                group,
            });
        }

        let conversion = Conversion {
            sql,
            regions,
            skipped,
            empty_input: false,
        };

        info!(
            "Converted {} townships in {} regions ({} lines skipped)",
            conversion.township_count(),
            conversion.regions.len(),
            conversion.skipped.len()
        );

        Ok(conversion)
    }

    /// Group all data lines, skipping the header and blank lines
    fn collect(&self, input: &str) -> (RegionGroups, Vec<SkippedLine>) {
        let mut groups = RegionGroups::new();
        let mut skipped = Vec::new();

        let data_lines = input
            .split('\n')
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .skip(1);

        for (index, line) in data_lines {
            let fields = split_fields(line, &self.separator);
            match Record::from_fields(&fields) {
                Some(record) => groups.push(record),
                None => {
                    debug!(
                        "Skipping line {}: {} fields, need at least {}",
                        index + 1,
                        fields.len(),
                        record::MIN_FIELDS
                    );
                    skipped.push(SkippedLine {
                        line_number: index + 1,
                        field_count: fields.len(),
                    });
                }
            }
        }

        (groups, skipped)
    }
}

/// User-facing text for a failed conversion
pub fn failure_notice(err: &dyn std::error::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        UNKNOWN_ERROR_NOTICE.to_string()
    } else {
        format!("Error converting data: {}", message)
    }
}

/// Convert input text into SQL with the default configuration.
///
/// Never fails: blank input gives [`EMPTY_INPUT_NOTICE`] and any internal
/// failure gives an `Error converting data: ...` message.
pub fn convert_to_sql(input: &str) -> String {
    convert_with(&ConverterConfig::default(), input)
}

/// Like [`convert_to_sql`], with an explicit configuration
pub fn convert_with(config: &ConverterConfig, input: &str) -> String {
    match Converter::new(config.clone()).and_then(|converter| converter.convert(input)) {
        Ok(conversion) => conversion.sql,
        Err(err) => failure_notice(&err),
    }
}

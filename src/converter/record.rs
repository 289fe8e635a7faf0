//! Splitting raw input lines into records

use regex::Regex;
use serde::Serialize;

/// Field separator: a run of tabs, or two or more whitespace characters.
///
/// Alternation is leftmost-first, so at a tab the tab run wins and any
/// spaces right after it form a separator of their own.
pub const FIELD_SEPARATOR: &str = r"\t+|\s{2,}";

/// Lines that split into fewer fields than this are dropped
pub const MIN_FIELDS: usize = 6;

/// One accepted data line.
///
/// Column 4 of the source layout is not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub region: String,
    pub region_local: String,
    pub code: String,
    pub township: String,
    pub township_local: String,
}

impl Record {
    /// Build a record from split fields, or `None` when there are too few.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        if fields.len() < MIN_FIELDS {
            return None;
        }

        Some(Self {
            region: fields[0].trim().to_string(),
            region_local: fields[1].trim().to_string(),
            code: fields[2].trim().to_string(),
            township: fields[3].trim().to_string(),
            township_local: fields[5].trim().to_string(),
        })
    }
}

/// Split a line on the field separator. Empty fields are kept, so a leading
/// or trailing separator still counts towards the field total.
pub fn split_fields<'a>(line: &'a str, separator: &Regex) -> Vec<&'a str> {
    separator.split(line).collect()
}

//! Syntax check of generated SQL
//!
//! Input values are emitted without escaping, so a township name with a
//! quote in it produces a statement MySQL will reject. This module parses
//! each region's statement and reports the ones that fail. It never
//! changes the output.

use log::{debug, warn};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser as SqlParser;

use crate::converter::Conversion;

/// A region whose statement did not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFailure {
    pub region: String,
    pub message: String,
}

/// Outcome of checking a conversion
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SqlCheck {
    /// Number of statements parsed
    pub checked: usize,
    pub failures: Vec<StatementFailure>,
}

impl SqlCheck {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse every region block of a conversion with the MySQL dialect.
///
/// Blocks are separated by a blank line; values come from single input
/// lines, so they never contain one.
pub fn check_conversion(conversion: &Conversion) -> SqlCheck {
    let mut check = SqlCheck::default();

    if conversion.is_empty_input() {
        return check;
    }

    let dialect = MySqlDialect {};
    let blocks = conversion.sql.split_terminator("\n\n");

    for (region, block) in conversion.regions.iter().zip(blocks) {
        check.checked += 1;
        match SqlParser::parse_sql(&dialect, block) {
            Ok(statements) if statements.len() == 1 => {
                debug!("Statement for region '{}' parses", region.group.region);
            }
            Ok(statements) => {
                let message = format!("expected 1 statement, found {}", statements.len());
                warn!("Region '{}': {}", region.group.region, message);
                check.failures.push(StatementFailure {
                    region: region.group.region.clone(),
                    message,
                });
            }
            Err(e) => {
                warn!("Region '{}' does not parse: {}", region.group.region, e);
                check.failures.push(StatementFailure {
                    region: region.group.region.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    check
}

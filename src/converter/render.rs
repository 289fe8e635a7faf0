//! SQL templating for region groups

use regex::Regex;
use std::fmt::Write;

use super::group::RegionGroup;
use crate::config::ConverterConfig;
use crate::error::{ConvertError, ConvertResult};

/// Trailing parenthetical annotation on a region name, e.g. " (Special)"
pub const REGION_SUFFIX: &str = r"\s+\([^)]+\)$";

/// Region name with a trailing " (...)" annotation removed
pub fn format_region_name(region: &str, suffix: &Regex) -> String {
    suffix.replace(region, "").into_owned()
}

/// Code name the region's code-table id is looked up by,
/// e.g. `NRC_KACHIN_TOWNSHIP`
pub fn code_name(formatted: &str, config: &ConverterConfig) -> String {
    format!(
        "{}{}{}",
        config.code_name_prefix,
        formatted.to_uppercase(),
        config.code_name_suffix
    )
}

/// Append one region block (comment, INSERT, trailing blank line) to `out`.
///
/// Values are written as-is inside single quotes. A quote in the input
/// yields a statement that does not parse.
pub fn render_group(
    out: &mut String,
    group: &RegionGroup,
    formatted: &str,
    config: &ConverterConfig,
) -> ConvertResult<()> {
    let (first, rest) = group
        .townships
        .split_first()
        .ok_or_else(|| ConvertError::EmptyGroup(group.region.clone()))?;

    writeln!(out, "-- {} State", group.region)?;
    writeln!(
        out,
        "INSERT INTO `{}`.`{}` (code_id, code_value, code_description, code_value_mm)",
        config.schema, config.value_table
    )?;
    writeln!(
        out,
        "SELECT (SELECT id FROM {} WHERE code_name = '{}'), township, CONCAT('{}{}'), township_myanmar",
        config.code_table,
        code_name(formatted, config),
        config.description_prefix,
        formatted
    )?;
    writeln!(
        out,
        "FROM (SELECT '{}' AS township, '{}' AS township_myanmar",
        first.township, first.township_local
    )?;

    for pair in rest {
        writeln!(
            out,
            "UNION SELECT '{}', '{}'",
            pair.township, pair.township_local
        )?;
    }

    out.push_str(") AS townships;\n\n");

    Ok(())
}

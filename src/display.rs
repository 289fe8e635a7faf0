use colored::*;

use nrc_convert::checks::SqlCheck;
use nrc_convert::converter::Conversion;

/// Returns the NRC converter ASCII art logo
pub fn get_logo() -> String {
    let logo = r#"
  ███╗   ██╗██████╗  ██████╗
  ████╗  ██║██╔══██╗██╔════╝
  ██╔██╗ ██║██████╔╝██║
  ██║╚██╗██║██╔══██╗██║
  ██║ ╚████║██║  ██║╚██████╗
  ╚═╝  ╚═══╝╚═╝  ╚═╝ ╚═════╝
    "#;

    logo.to_string()
}

/// Returns a colored version of the logo
pub fn get_colored_logo() -> ColoredString {
    get_logo().bright_cyan()
}

/// Display version information with the ASCII art logo
pub fn display_version() {
    println!("{}", get_colored_logo());
    println!("NRC converter version {}", env!("CARGO_PKG_VERSION"));
    println!("Turns NRC region/township tables into SQL INSERT statements");
}

/// Print region, township and skipped-line counts to stderr
pub fn display_conversion_summary(conversion: &Conversion) {
    if conversion.is_empty_input() {
        eprintln!("{}", "Input was blank, nothing converted".yellow());
        return;
    }

    eprintln!("\n--- {} ---", "Conversion summary".green());
    for region in &conversion.regions {
        eprintln!(
            "  {} ({}): {} townships",
            region.group.region.bold(),
            region.code_name,
            region.group.townships.len()
        );
    }
    eprintln!("  Regions: {}", conversion.regions.len());
    eprintln!("  Townships: {}", conversion.township_count());

    if conversion.skipped.is_empty() {
        eprintln!("  Skipped lines: 0");
    } else {
        eprintln!(
            "  Skipped lines: {}",
            conversion.skipped.len().to_string().yellow()
        );
        for line in &conversion.skipped {
            eprintln!(
                "    • line {} ({} fields)",
                line.line_number, line.field_count
            );
        }
    }
}

/// Print the outcome of the SQL syntax check to stderr
pub fn display_check(check: &SqlCheck) {
    if check.is_ok() {
        eprintln!("✅ {} statements parse as MySQL", check.checked);
        return;
    }

    for failure in &check.failures {
        eprintln!("❌ Statement for region {} does not parse", failure.region.bold());
        eprintln!("   - {}", failure.message);
    }
    eprintln!(
        "{}",
        format!(
            "{} of {} statements failed to parse",
            check.failures.len(),
            check.checked
        )
        .red()
    );
}

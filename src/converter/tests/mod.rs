//! Tests for the conversion pipeline

use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::config::ConverterConfig;
use crate::converter::{
    convert_to_sql, convert_with, failure_notice, Converter, EMPTY_INPUT_NOTICE,
    UNKNOWN_ERROR_NOTICE,
};
use crate::error::ConvertError;

const HEADER: &str = "Region\tRegionMM\tCode\tTownship\tPattern\tTownshipMM";

fn converter() -> Converter {
    Converter::new(ConverterConfig::default()).unwrap()
}

#[test]
fn test_shan_example() {
    let input = format!(
        "{HEADER}\n\
         Shan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး\n\
         Shan\tရှမ်း\t13\tLashio\tLaShaNa\tလားရှိုး\n"
    );

    assert_eq!(
        convert_to_sql(&input),
        "-- Shan State\n\
         INSERT INTO `fineract_default`.`m_code_value` (code_id, code_value, code_description, code_value_mm)\n\
         SELECT (SELECT id FROM m_code WHERE code_name = 'NRC_SHAN_TOWNSHIP'), township, CONCAT('Township of Shan'), township_myanmar\n\
         FROM (SELECT 'Taunggyi' AS township, 'တောင်ကြီး' AS township_myanmar\n\
         UNION SELECT 'Lashio', 'လားရှိုး'\n\
         ) AS townships;\n\n"
    );
}

#[test_case("" ; "empty")]
#[test_case("   " ; "spaces")]
#[test_case("\n\t\n  \r\n" ; "mixed whitespace")]
fn test_blank_input_gives_notice(input: &str) {
    assert_eq!(convert_to_sql(input), EMPTY_INPUT_NOTICE);
    assert!(converter().convert(input).unwrap().is_empty_input());
}

#[test]
fn test_header_only_gives_empty_output() {
    let conversion = converter().convert(HEADER).unwrap();
    assert_eq!(conversion.sql, "");
    assert!(!conversion.is_empty_input());
    assert!(conversion.regions.is_empty());
}

#[test]
fn test_header_is_dropped_even_when_it_looks_like_data() {
    let input = "Kachin\tကချင်\t1\tMyitkyina\tMaKaNa\tမြစ်ကြီးနား\n\
                 Shan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး";
    let conversion = converter().convert(input).unwrap();

    assert_eq!(conversion.regions.len(), 1);
    assert_eq!(conversion.regions[0].group.region, "Shan");
}

#[test]
fn test_blank_lines_before_header_are_ignored() {
    let input = format!("\n   \n{HEADER}\n\nShan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး\n");
    let conversion = converter().convert(&input).unwrap();

    assert_eq!(conversion.regions.len(), 1);
    assert!(conversion.skipped.is_empty());
}

#[test]
fn test_short_lines_are_skipped_and_reported() {
    let input = format!(
        "{HEADER}\n\
         Shan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး\n\
         Shan\tရှမ်း\t13\tLashio\n\
         \n\
         Mon\tမွန်\t11\tMawlamyine\tMaLaMa\tမော်လမြိုင်\n"
    );
    let conversion = converter().convert(&input).unwrap();

    assert_eq!(conversion.regions.len(), 2);
    assert_eq!(conversion.regions[0].group.townships.len(), 1);
    assert_eq!(conversion.skipped.len(), 1);
    assert_eq!(conversion.skipped[0].line_number, 3);
    assert_eq!(conversion.skipped[0].field_count, 4);
    assert!(!conversion.sql.contains("Lashio"));
}

#[test]
fn test_regions_follow_first_appearance() {
    let input = format!(
        "{HEADER}\n\
         Shan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး\n\
         Kachin (Special)\tကချင်\t1\tMyitkyina\tMaKaNa\tမြစ်ကြီးနား\n\
         Shan\tရှမ်း\t13\tLashio\tLaShaNa\tလားရှိုး\n\
         Mon\tမွန်\t11\tMawlamyine\tMaLaMa\tမော်လမြိုင်\n"
    );
    let sql = convert_to_sql(&input);

    let comments: Vec<&str> = sql.lines().filter(|l| l.starts_with("-- ")).collect();
    assert_eq!(
        comments,
        vec!["-- Shan State", "-- Kachin (Special) State", "-- Mon State"]
    );
    assert_eq!(sql.matches("INSERT INTO").count(), 3);
}

#[test]
fn test_parenthetical_region_uses_formatted_name() {
    let input = format!("{HEADER}\nKachin (Special)\tကချင်\t1\tMyitkyina\tMaKaNa\tမြစ်ကြီးနား\n");
    let conversion = converter().convert(&input).unwrap();

    let region = &conversion.regions[0];
    assert_eq!(region.formatted_name, "Kachin");
    assert_eq!(region.code_name, "NRC_KACHIN_TOWNSHIP");
    assert!(conversion.sql.contains("code_name = 'NRC_KACHIN_TOWNSHIP'"));
    assert!(conversion.sql.contains("CONCAT('Township of Kachin')"));
}

#[test]
fn test_union_lines_per_township() {
    let mut input = HEADER.to_string();
    for township in ["Yangon", "Thanlyin", "Hlegu", "Insein", "Kamayut"] {
        input.push_str(&format!("\nYangon\tရန်ကုန်\t12\t{township}\tp\t{township}-mm"));
    }
    let sql = convert_to_sql(&input);

    assert_eq!(sql.matches("FROM (SELECT '").count(), 1);
    assert_eq!(sql.lines().filter(|l| l.starts_with("UNION SELECT")).count(), 4);
}

#[test]
fn test_space_delimited_input() {
    let input = "Region  RegionMM  Code  Township  Pattern  TownshipMM\n\
                 Shan  ရှမ်း  13  Taunggyi  TaKaNa  တောင်ကြီး";
    let conversion = converter().convert(input).unwrap();

    assert_eq!(conversion.regions.len(), 1);
    assert_eq!(conversion.regions[0].group.townships[0].township, "Taunggyi");
}

#[test]
fn test_crlf_input() {
    let input = format!("{HEADER}\r\nShan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး\r\n");
    let sql = convert_to_sql(&input);
    assert!(sql.contains("'Taunggyi' AS township, 'တောင်ကြီး' AS township_myanmar\n"));
}

#[test]
fn test_code_field_is_captured_but_not_emitted() {
    let input = format!("{HEADER}\nShan\tရှမ်း\tCODE13\tTaunggyi\tTaKaNa\tတောင်ကြီး\n");
    let conversion = converter().convert(&input).unwrap();

    assert_eq!(conversion.regions[0].group.code, "CODE13");
    assert!(!conversion.sql.contains("CODE13"));
}

#[test]
fn test_quotes_pass_through_unescaped() {
    let input = format!("{HEADER}\nShan\tရှမ်း\t13\tO'Taung\tp\tx\n");
    assert!(convert_to_sql(&input).contains("SELECT 'O'Taung' AS township"));
}

#[test]
fn test_conversion_is_idempotent() {
    let input = format!(
        "{HEADER}\n\
         Shan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး\n\
         Mon\tမွန်\t11\tMawlamyine\tMaLaMa\tမော်လမြိုင်\n"
    );
    assert_eq!(convert_to_sql(&input), convert_to_sql(&input));
}

#[test]
fn test_custom_config_changes_literals() {
    let config = ConverterConfig {
        schema: "staging".to_string(),
        code_table: "codes".to_string(),
        ..ConverterConfig::default()
    };
    let input = format!("{HEADER}\nShan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး\n");
    let sql = convert_with(&config, &input);

    assert!(sql.contains("INSERT INTO `staging`.`m_code_value`"));
    assert!(sql.contains("SELECT id FROM codes WHERE"));
}

#[test]
fn test_json_output_includes_code() {
    let input = format!("{HEADER}\nShan\tရှမ်း\t13\tTaunggyi\tTaKaNa\tတောင်ကြီး\n");
    let conversion = converter().convert(&input).unwrap();
    let json: serde_json::Value = serde_json::from_str(&conversion.to_json().unwrap()).unwrap();

    let region = &json["regions"][0];
    assert_eq!(region["region"], "Shan");
    assert_eq!(region["code"], "13");
    assert_eq!(region["code_name"], "NRC_SHAN_TOWNSHIP");
    assert_eq!(region["townships"][0]["township_local"], "တောင်ကြီး");
}

#[test]
fn test_failure_notice_text() {
    let err = ConvertError::EmptyGroup("Shan".to_string());
    assert_eq!(
        failure_notice(&err),
        "Error converting data: region 'Shan' has no townships"
    );
}

#[test]
fn test_failure_notice_without_description() {
    #[derive(Debug)]
    struct Silent;

    impl std::fmt::Display for Silent {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Ok(())
        }
    }

    impl std::error::Error for Silent {}

    assert_eq!(failure_notice(&Silent), UNKNOWN_ERROR_NOTICE);
}

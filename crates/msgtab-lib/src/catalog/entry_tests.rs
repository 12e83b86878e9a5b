use crate::catalog::{FIXED_MASK, MessageEntry, Rejection, compute_code, facility_of};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::sql::{FieldValue, parse_values};

fn assemble(body: &str) -> Result<MessageEntry, Rejection> {
    let mut diagnostics = Diagnostics::new();
    let fields: Vec<FieldValue<'_>> = parse_values(body, 0, &mut diagnostics);
    MessageEntry::assemble(&fields)
}

#[test]
fn assembles_symbol_code_and_text() {
    let entry = assemble("'SYM1', NULL, NULL, NULL, 0, 1, 0, 'hello', NULL, NULL").unwrap();

    assert_eq!(
        entry,
        MessageEntry {
            code: 0x1400_0001,
            text: "hello".to_string(),
            number: 1,
            symbol: Some("SYM1".to_string()),
        }
    );
}

#[test]
fn code_formula() {
    for facility in [0_i64, 1, 2, 17, 255] {
        for number in [0_i64, 1, 42, 0xFFFF] {
            let code = compute_code(facility, number);
            assert_eq!(code, FIXED_MASK | ((facility as i32) << 16) | number as i32);
            assert_eq!(i64::from(facility_of(code)), facility);
        }
    }
}

#[test]
fn negative_number_gives_negative_code() {
    assert_eq!(compute_code(0, -1), -1);
    assert_eq!(compute_code(3, -2), -2);
    assert_eq!(facility_of(-1), 0xFF);
}

#[test]
fn facility_comes_from_code() {
    let entry = assemble("NULL, NULL, NULL, NULL, 21, 8, NULL, 'x'").unwrap();
    assert_eq!(entry.code, 0x1415_0008);
    assert_eq!(entry.facility(), 21);
}

#[test]
fn exactly_eight_fields_is_enough() {
    let entry = assemble("'s', NULL, NULL, NULL, 1, 2, NULL, 'eight'").unwrap();
    assert_eq!(entry.text, "eight");
}

#[test]
fn too_few_fields() {
    assert_eq!(
        assemble("'s', NULL, NULL, NULL, 1, 2, NULL"),
        Err(Rejection::TooFewFields(7))
    );
}

#[test]
fn facility_must_be_an_integer() {
    let rejection = assemble("'s', NULL, NULL, NULL, 'JRD', 2, NULL, 'x'").unwrap_err();
    assert_eq!(rejection, Rejection::InvalidFacilityCode("'JRD'".to_string()));
    assert_eq!(rejection.kind(), DiagnosticKind::InvalidFacilityCode);
    assert_eq!(rejection.detail(), "'JRD'");
}

#[test]
fn null_number_is_rejected() {
    assert_eq!(
        assemble("'s', NULL, NULL, NULL, 1, NULL, NULL, 'x'"),
        Err(Rejection::InvalidMessageNumber("NULL".to_string()))
    );
}

#[test]
fn quoted_integers_are_accepted() {
    let entry = assemble("'s', NULL, NULL, NULL, '3', ' 4 ', NULL, 'x'").unwrap();
    assert_eq!(entry.code, compute_code(3, 4));
    assert_eq!(entry.number, 4);
}

#[test]
fn null_text_becomes_empty() {
    let entry = assemble("'s', NULL, NULL, NULL, 1, 2, NULL, NULL").unwrap();
    assert_eq!(entry.text, "");
}

#[test]
fn symbol_normalization() {
    let symbol = |first: &str| {
        assemble(&format!("{first}, NULL, NULL, NULL, 1, 2, NULL, 'x'"))
            .unwrap()
            .symbol
    };

    assert_eq!(symbol("NULL"), None);
    assert_eq!(symbol("'NULL'"), None);
    assert_eq!(symbol("''"), None);
    assert_eq!(symbol("'''quoted'''"), Some("quoted".to_string()));
    assert_eq!(symbol("'''''twice'''''"), Some("'twice'".to_string()));
    assert_eq!(symbol("7"), Some("7".to_string()));
}

#[test]
fn placeholders() {
    let entry = |number: i64, text: &str| MessageEntry {
        code: compute_code(0, number),
        text: text.to_string(),
        number,
        symbol: None,
    };

    assert!(entry(0, "").is_placeholder());
    assert!(entry(-1, "").is_placeholder());
    assert!(!entry(0, "text").is_placeholder());
    assert!(!entry(3, "").is_placeholder());
}

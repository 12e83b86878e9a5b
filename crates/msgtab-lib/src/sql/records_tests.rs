use indoc::indoc;

use crate::sql::records::{RawRecord, extract_records};

fn bodies(source: &str) -> Vec<&str> {
    extract_records(source).map(|r| r.body).collect()
}

#[test]
fn skips_statement_header() {
    let source = indoc! {"
        INSERT INTO MESSAGES (SYMBOL, FAC_CODE) VALUES (?, ?);
        ('arith_except', 0);
        ('bad_dbkey', 1);
    "};

    assert_eq!(bodies(source), ["'arith_except', 0", "'bad_dbkey', 1"]);
}

#[test]
fn record_offsets_point_into_source() {
    let source = "HEADER);\n  ('a', 1);\n('b', 2);";
    let records: Vec<RawRecord<'_>> = extract_records(source).collect();

    assert_eq!(records.len(), 2);
    let first = records[0];
    assert_eq!(first.start, source.find("('a'").unwrap());
    assert_eq!(&source[first.body_offset()..][..first.body.len()], first.body);
    assert_eq!(&source[first.span()], "('a', 1");

    let second = records[1];
    assert_eq!(&source[second.span()], "('b', 2");
}

#[test]
fn fragment_behind_comment_is_not_a_record() {
    let source = indoc! {"
        ('a', 1);
        -- JRD
        ('b', 2);
        ('c', 3);
    "};

    assert_eq!(bodies(source), ["'a', 1", "'c', 3"]);
}

#[test]
fn last_record_without_terminator() {
    assert_eq!(bodies("('a', 1);\n('b', 2)\n"), ["'a', 1", "'b', 2)"]);
}

#[test]
fn terminator_inside_quotes_splits_record() {
    assert_eq!(bodies("('a);b', 1);"), ["'a"]);
}

#[test]
fn empty_source() {
    assert!(bodies("").is_empty());
    assert!(bodies("   \n").is_empty());
}

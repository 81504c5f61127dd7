//! Integration tests for table dump loading and JSON output.

use std::io::Write;

use tempfile::NamedTempFile;
use valvespec::render::{self, JsonFormat};
use valvespec::{parse_file, parse_str, Error, InputFormat, ValveExtractor};

const PAGED_DUMP: &str = r#"{
    "pages": [
        {
            "number": 1,
            "tables": [
                [["Drawing", "Rev", "Date"], ["P-ISO-0401", "B", "2024-03-12"]]
            ]
        },
        {
            "number": 2,
            "tables": [
                [
                    ["Ord", "Item", "DN", "Qty", "Sheet"],
                    [1, "040-BFV-2982", "DN100", 2, null],
                    [2, "040\u200b-BFV-2983", "dn\n80", "1 pcs.", 4],
                    [3, "NOTE: see drawing", "-", "-", ""]
                ]
            ]
        }
    ]
}"#;

fn write_dump(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_file_paged() {
    let file = write_dump(PAGED_DUMP);
    let doc = parse_file(file.path()).unwrap();

    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.table_count(), 2);
    assert_eq!(
        valvespec::detect_format_from_path(file.path()).unwrap(),
        InputFormat::Paged
    );
}

#[test]
fn test_mixed_cell_types_are_normalized() {
    let doc = parse_str(PAGED_DUMP).unwrap();
    let table = &doc.get_page(2).unwrap().tables[0];

    assert_eq!(table.rows[1].cells, vec!["1", "040-BFV-2982", "DN100", "2", ""]);
    assert_eq!(table.rows[2].cell(1), Some("040-BFV-2983"));
    assert_eq!(table.rows[2].cell(2), Some("dn 80"));
}

#[test]
fn test_extract_from_paged_dump() {
    let report = ValveExtractor::new()
        .extract_bytes(PAGED_DUMP.as_bytes())
        .unwrap();

    assert_eq!(report.items.len(), 2);

    assert_eq!(report.items[0].item_id, "040-BFV-2982");
    assert_eq!(report.items[0].sheet, 2);
    assert_eq!(report.items[0].page, 2);

    assert_eq!(report.items[1].item_id, "040-BFV-2983");
    assert_eq!(report.items[1].dn, "DN80");
    assert_eq!(report.items[1].qty, Some(1));
    assert_eq!(report.items[1].sheet, 4);
}

#[test]
fn test_parse_page_groups() {
    let doc = parse_str(r#"[[], [[["Item", "DN", "Qty"], ["040-BFV-2982", "DN50", "1"]]]]"#)
        .unwrap();

    assert_eq!(doc.page_count(), 2);
    assert!(doc.pages[0].is_empty());
    assert_eq!(doc.pages[1].number, 2);
}

#[test]
fn test_parse_file_missing() {
    let result = parse_file("/nonexistent/valves.tables.json");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_parse_invalid_shape() {
    let result = parse_str(r#"{"tables": "nope"}"#);
    assert!(matches!(result, Err(Error::InvalidInput(_))));

    let result = parse_str("\"just a string\"");
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_to_json_file_round() {
    let file = write_dump(PAGED_DUMP);
    let json = valvespec::to_json(file.path(), JsonFormat::Compact).unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"items":["#,
            r#"{"ord_no":1,"item_id":"040-BFV-2982","dn":"DN100","qty":2,"sheet":2,"page":2},"#,
            r#"{"ord_no":2,"item_id":"040-BFV-2983","dn":"DN80","qty":1,"sheet":4,"page":2}"#,
            r#"]}"#
        )
    );
}

#[test]
fn test_empty_output() {
    let file = write_dump(r#"{"pages": []}"#);
    let json = valvespec::to_json(file.path(), JsonFormat::Compact).unwrap();
    assert_eq!(json, r#"{"items":[]}"#);
}

#[test]
fn test_absent_fields_serialize_as_null() {
    let report = ValveExtractor::new()
        .extract_bytes(
            br#"[[[["Item", "DN", "Qty"], ["040-BFV-2982", "DN50", "n/a"]]]]"#,
        )
        .unwrap();
    let json = render::to_json(&report.items, JsonFormat::Compact).unwrap();

    assert_eq!(
        json,
        r#"{"items":[{"ord_no":null,"item_id":"040-BFV-2982","dn":"DN50","qty":null,"sheet":1,"page":1}]}"#
    );
}

#[test]
fn test_report_json_includes_diagnostics() {
    let report = ValveExtractor::new()
        .with_diagnostics()
        .extract_bytes(PAGED_DUMP.as_bytes())
        .unwrap();
    let json = render::report_to_json(&report, JsonFormat::Compact).unwrap();

    assert!(json.contains(r#""item_count":2"#));
    assert!(json.contains(r#""missing_item_id""#));
}

// tests/normalize_json_table.rs
use smallcap_dir::config::options::SourceKind;
use smallcap_dir::error::FetchError;
use smallcap_dir::sources::{self, json_table};

fn wrap(json: &str) -> String {
    format!("/*O_o*/\ngoogle.visualization.Query.setResponse({json});")
}

const TABLE: &str = r#"{"version":"0.6","reqId":"0","status":"ok","sig":"1","table":{
    "cols":[
        {"id":"A","label":"Company Name","type":"string"},
        {"id":"B","label":"  Industry ","type":"string"},
        {"id":"C","label":"","type":"string"},
        {"id":"D","label":"Founding\nYear","type":"number"},
        {"id":"E","label":"Exchange","type":"string"}
    ],
    "rows":[
        {"c":[{"v":"Acme Robotics"},{"v":"Automation"},{"v":"ignored"},{"v":2019.0,"f":"2019"},{"v":"NASDAQ"}]},
        {"c":[{"v":"Beta Bio"},null,{"v":"x"},{"v":null}]},
        {"c":[{"v":"Gamma (Holdings)"},{"v":"Mining"},null,{"v":1.5},{"v":"TSX"}]}
    ],
    "parsedNumHeaders":1}}"#;

#[test]
fn rows_and_columns_follow_the_sheet() {
    let dir = sources::parse(SourceKind::JsonTable, &wrap(TABLE)).unwrap();

    assert_eq!(dir.columns, vec!["Company Name", "Industry", "Founding Year", "Exchange"]);
    assert_eq!(dir.row_count(), 3);
    let names: Vec<&str> = dir.records.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Acme Robotics", "Beta Bio", "Gamma (Holdings)"]);

    // Every record carries every labeled column
    assert!(dir.records.iter().all(|r| r.len() == dir.column_count()));
}

#[test]
fn null_and_missing_cells_read_as_empty() {
    let dir = sources::parse(SourceKind::JsonTable, &wrap(TABLE)).unwrap();
    let beta = &dir.records[1];
    assert_eq!(beta.get("Industry"), Some(""));
    assert_eq!(beta.get("Founding Year"), Some(""));
    assert_eq!(beta.get("Exchange"), Some(""));
    assert_eq!(beta.non_empty("Exchange"), None);
}

#[test]
fn numbers_are_stringified_like_a_browser() {
    let dir = sources::parse(SourceKind::JsonTable, &wrap(TABLE)).unwrap();
    assert_eq!(dir.records[0].get("Founding Year"), Some("2019"));
    assert_eq!(dir.records[2].get("Founding Year"), Some("1.5"));
}

#[test]
fn unlabeled_columns_are_dropped() {
    let dir = sources::parse(SourceKind::JsonTable, &wrap(TABLE)).unwrap();
    assert!(dir.records[0].values().all(|v| v != "ignored"));
}

#[test]
fn duplicate_labels_keep_the_last_cell() {
    let json = r#"{"status":"ok","table":{"cols":[{"label":"Sector"},{"label":"Sector"}],
        "rows":[{"c":[{"v":"first"},{"v":"second"}]}]}}"#;
    let dir = sources::parse(SourceKind::JsonTable, &wrap(json)).unwrap();
    assert_eq!(dir.columns, vec!["Sector"]);
    assert_eq!(dir.records[0].get("Sector"), Some("second"));
}

#[test]
fn empty_table_is_not_an_error() {
    let json = r#"{"status":"ok","table":{"cols":[{"label":"Company Name"}],"rows":[]}}"#;
    let dir = sources::parse(SourceKind::JsonTable, &wrap(json)).unwrap();
    assert!(dir.is_empty());
    assert_eq!(dir.column_count(), 1);
}

#[test]
fn wrapper_falls_back_to_fixed_widths() {
    let json = r#"{"status":"ok","table":{"cols":[{"label":"Company Name"}],"rows":[{"c":[{"v":"Acme"}]}]}}"#;
    let text = format!("{}{json}{}", "#".repeat(47), "#;");
    assert_eq!(json_table::strip_wrapper(&text).unwrap(), json);
}

#[test]
fn wrapper_ignores_trailing_whitespace() {
    let json = r#"{"status":"ok"}"#;
    let text = format!("{}\n\n", wrap(json));
    assert_eq!(json_table::strip_wrapper(&text).unwrap(), json);
}

#[test]
fn short_body_is_a_wrapper_error() {
    let err = sources::parse(SourceKind::JsonTable, "<html></html>").unwrap_err();
    assert!(matches!(err, FetchError::Wrapper(_)), "got {err:?}");
}

#[test]
fn bad_json_is_a_json_error() {
    let err = sources::parse(SourceKind::JsonTable, &wrap("{not json")).unwrap_err();
    assert!(matches!(err, FetchError::Json(_)), "got {err:?}");
}

#[test]
fn upstream_error_status_is_reported() {
    let json = r#"{"version":"0.6","status":"error","errors":[
        {"reason":"access_denied","message":"Access denied","detailed_message":"Sheet is private"}]}"#;
    match sources::parse(SourceKind::JsonTable, &wrap(json)) {
        Err(FetchError::Upstream(msg)) => assert_eq!(msg, "Sheet is private"),
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[test]
fn missing_table_is_a_shape_error() {
    let err = sources::parse(SourceKind::JsonTable, &wrap(r#"{"status":"ok"}"#)).unwrap_err();
    assert!(matches!(err, FetchError::Shape(_)), "got {err:?}");
}

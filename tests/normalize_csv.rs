// tests/normalize_csv.rs
use smallcap_dir::config::options::SourceKind;
use smallcap_dir::error::FetchError;
use smallcap_dir::sources;

const BODY: &str = "Company Name,Industry,Exchange\n\
Acme Robotics,Automation,NASDAQ\n\
Beta Bio,Health\n\
\n\
,,\n\
\"Gamma, Inc\",\"Mining\nand metals\",TSX,overflow\n";

#[test]
fn header_row_keys_every_record() {
    let dir = sources::parse(SourceKind::Csv, BODY).unwrap();
    assert_eq!(dir.columns, vec!["Company Name", "Industry", "Exchange"]);
    let names: Vec<&str> = dir.records.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Acme Robotics", "Beta Bio", "Gamma, Inc"]);
}

#[test]
fn short_rows_pad_and_long_rows_truncate() {
    let dir = sources::parse(SourceKind::Csv, BODY).unwrap();
    assert_eq!(dir.records[1].get("Exchange"), Some(""));
    let gamma = &dir.records[2];
    assert_eq!(gamma.len(), 3);
    assert_eq!(gamma.get("Industry"), Some("Mining\nand metals"));
    assert!(gamma.values().all(|v| v != "overflow"));
}

#[test]
fn byte_order_mark_is_stripped() {
    let dir = sources::parse(SourceKind::Csv, "\u{feff}Company Name\nAcme\n").unwrap();
    assert_eq!(dir.records[0].get("Company Name"), Some("Acme"));
}

#[test]
fn empty_body_has_no_header() {
    let err = sources::parse(SourceKind::Csv, "").unwrap_err();
    assert!(matches!(err, FetchError::Shape(_)), "got {err:?}");
}

#[test]
fn both_exports_agree_on_the_same_sheet() {
    let csv = "Company Name,Exchange\nAcme,NASDAQ\n";
    let json = "/*O_o*/\ngoogle.visualization.Query.setResponse(\
        {\"status\":\"ok\",\"table\":{\"cols\":[{\"label\":\"Company Name\"},{\"label\":\"Exchange\"}],\
        \"rows\":[{\"c\":[{\"v\":\"Acme\"},{\"v\":\"NASDAQ\"}]}]}});";

    let a = sources::parse(SourceKind::Csv, csv).unwrap();
    let b = sources::parse(SourceKind::JsonTable, json).unwrap();
    assert_eq!(a, b);
}

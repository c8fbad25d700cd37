// tests/search.rs
mod common;

use smallcap_dir::config::options::MatchScope;
use smallcap_dir::search::{self, FilterView, Query};

fn names(view: &FilterView<'_>) -> Vec<String> {
    view.records().map(|r| r.name().to_string()).collect()
}

#[test]
fn empty_query_keeps_everything_in_order() {
    let dir = common::sample();
    let view = FilterView::apply(&dir, &Query::new(""));
    assert_eq!(view.row_ix, vec![0, 1, 2, 3, 4]);
}

#[test]
fn text_is_case_insensitive_substring() {
    let dir = common::sample();
    let view = FilterView::apply(&dir, &Query::new("ROBOT"));
    assert_eq!(names(&view), vec!["Acme Robotics", "Delta Robotics"]);

    let view = FilterView::apply(&dir, &Query::new("boston"));
    assert_eq!(names(&view), vec!["Beta Bio"]);
}

#[test]
fn listed_scope_ignores_other_columns() {
    let dir = common::sample();
    let q = Query::new("lithium");
    assert!(FilterView::apply(&dir, &q).is_empty());

    let q = Query::new("lithium").scope(MatchScope::AllFields);
    assert_eq!(names(&FilterView::apply(&dir, &q)), vec!["Gamma Mining"]);
}

#[test]
fn facets_and_text_combine() {
    let dir = common::sample();
    let q = Query::new("automation").facet("Exchange", "NASDAQ").facet("Sector", "Industrials");
    assert_eq!(names(&FilterView::apply(&dir, &q)), vec!["Delta Robotics"]);
}

#[test]
fn empty_facet_is_any() {
    let dir = common::sample();
    let q = Query::new("").facet("Exchange", "").facet("Sector", "");
    assert!(q.is_pass_through());
    assert_eq!(FilterView::apply(&dir, &q).len(), dir.row_count());
}

#[test]
fn facet_is_exact_match() {
    let dir = common::sample();
    let q = Query::new("").facet("Exchange", "nasdaq");
    assert!(FilterView::apply(&dir, &q).is_empty());
}

#[test]
fn no_match_is_empty_not_an_error() {
    let dir = common::sample();
    let view = FilterView::apply(&dir, &Query::new("zzz-nothing"));
    assert!(view.is_empty());
    assert_eq!(view.record(0), None);
}

#[test]
fn filter_matches_view_indices() {
    let dir = common::sample();
    let q = Query::new("a").facet("Exchange", "NASDAQ");
    assert_eq!(search::filter(&dir.records, &q), FilterView::apply(&dir, &q).row_ix);
}

#[test]
fn facet_values_are_distinct_in_sheet_order() {
    let dir = common::sample();
    assert_eq!(search::facet_values(&dir.records, "Exchange"), vec!["NASDAQ", "NYSE", "TSX"]);
    assert!(search::facet_values(&dir.records, "No Such Column").is_empty());
}

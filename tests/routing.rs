// tests/routing.rs
mod common;

use smallcap_dir::error::DirectoryError;
use smallcap_dir::routing::{self, Route};

#[test]
fn fixed_paths() {
    assert_eq!(Route::parse("/"), Route::Landing);
    assert_eq!(Route::parse(""), Route::Landing);
    assert_eq!(Route::parse("/companies"), Route::Directory);
    assert_eq!(Route::parse("/companies/"), Route::Directory);
    assert_eq!(Route::Directory.path(), "/companies");
    assert_eq!(Route::Landing.path(), "/");
}

#[test]
fn names_encode_to_one_segment() {
    assert_eq!(routing::company_path("Acme Robotics"), "/Acme%20Robotics");
    assert_eq!(routing::company_path("Epsilon & Sons, Inc."), "/Epsilon%20%26%20Sons%2C%20Inc.");
    assert_eq!(routing::company_path("A/B"), "/A%2FB");
}

#[test]
fn uri_component_marks_stay_literal() {
    assert_eq!(routing::company_path("A (B)"), "/A%20(B)");
    assert_eq!(routing::company_path("Yahoo!*'"), "/Yahoo!*'");
    assert_eq!(routing::company_path("~tilde_-."), "/~tilde_-.");
    // A literal escape sequence in a name is itself escaped
    assert_eq!(routing::company_path("%28"), "/%2528");
    assert_eq!(Route::parse("/%2528"), Route::Company("%28".into()));
}

#[test]
fn names_round_trip_through_the_path() {
    for name in ["Acme Robotics", "Epsilon & Sons, Inc.", "100% Growth", "Café Ünïcode", "A/B (Holdings)?", "O'Brien * Sons!", "%21%28"] {
        let route = Route::Company(name.to_string());
        assert_eq!(Route::parse(&route.path()), route, "{name}");
    }
}

#[test]
fn resolve_finds_by_exact_name() {
    let dir = common::sample();
    let rec = routing::resolve(&dir, "Epsilon%20%26%20Sons%2C%20Inc.").unwrap();
    assert_eq!(rec.get("Industry"), Some("Retail"));
}

#[test]
fn unknown_name_is_not_found() {
    let dir = common::sample();
    let err = routing::resolve(&dir, "Nope%20Corp").unwrap_err();
    assert!(matches!(&err, DirectoryError::NotFound(n) if n == "Nope Corp"), "got {err:?}");
    assert_eq!(err.user_message(), "Company not found");

    // Lookup is exact, not case-folded
    assert!(routing::find_company(&dir, "acme robotics").is_err());
}

#[test]
fn undecodable_segment_is_not_found() {
    let dir = common::sample();
    assert!(matches!(routing::resolve(&dir, "%FF"), Err(DirectoryError::NotFound(_))));
    assert_eq!(Route::parse("/%FF"), Route::Company("%FF".into()));
}

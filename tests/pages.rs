// tests/pages.rs
//
// Page wiring that does not need a running UI.
use smallcap_dir::gui::router;
use smallcap_dir::routing::Route;

#[test]
fn failed_directory_load_offers_no_way_back_into_itself() {
    // A link here would just refetch the same page.
    assert_eq!(router::page_for(&Route::Directory).back_route(), None);
    assert!(router::page_for(&Route::Directory).needs_data());
}

#[test]
fn company_errors_lead_back_to_the_directory() {
    let page = router::page_for(&Route::Company("Nope Corp".into()));
    assert_eq!(page.back_route(), Some(Route::Directory));
}

#[test]
fn landing_needs_no_data_and_nav_covers_list_pages() {
    let landing = router::page_for(&Route::Landing);
    assert!(!landing.needs_data());

    let nav: Vec<Route> = router::all_pages().iter().filter_map(|p| p.nav_route()).collect();
    assert_eq!(nav, vec![Route::Landing, Route::Directory]);
}

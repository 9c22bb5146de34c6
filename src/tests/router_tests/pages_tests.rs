use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn home_page_loads() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Anand Awards"));
    assert!(body.contains("Honoring Brilliance. Celebrating Legacy."));
}

#[test]
fn informational_pages_load() {
    let state = test_state();

    for path in ["/about", "/projects", "/contact", "/Landinfo"] {
        let resp = handle(get(path), &state)
            .unwrap_or_else(|e| panic!("{path} failed: {e}"));
        assert_eq!(resp.status(), 200, "{path} should load");
    }
}

#[test]
fn categories_page_lists_all_four() {
    let state = test_state();

    let resp = handle(get("/categories"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Award Categories"));
    assert!(body.contains("Business &amp; Entrepreneurship"));
    assert!(body.contains("Pharma &amp; Healthcare"));
    assert!(body.contains("Film &amp; Entertainment"));
    assert!(body.contains("Special Recognitions"));
}

#[test]
fn category_detail_shows_awards_and_criteria() {
    let state = test_state();

    let resp = handle(get("/categories/pharma-healthcare"), &state)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Pharma &amp; Healthcare"));
    assert!(body.contains("Medical Excellence"));
    assert!(body.contains("Judging Criteria"));
    assert!(body.contains("Impact on public health and wellness"));
}

#[test]
fn unknown_category_is_not_found() {
    let state = test_state();

    match handle(get("/categories/no-such-category"), &state) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();

    match handle(get("/definitely-not-a-page"), &state) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}

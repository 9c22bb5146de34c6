use crate::domain::Status;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get_with_session, login, post_form, post_form_with_session, test_state,
};

#[test]
fn approving_a_pending_nomination() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(
        post_form_with_session("/admin/nominations/1/approve", "", &token),
        &state,
    )
    .expect("Failed to handle request");

    assert_eq!(resp.status(), 302, "should redirect after approve");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/admin/dashboard"
    );

    let approved = state.store.list("", None, Some(Status::Approved)).unwrap();
    assert!(approved.iter().any(|r| r.id == 1));
}

#[test]
fn rejecting_a_pending_nomination() {
    let state = test_state();
    let token = login(&state);

    handle(
        post_form_with_session("/admin/nominations/1/reject", "", &token),
        &state,
    )
    .expect("Failed to handle request");

    let rejected = state.store.list("", None, Some(Status::Rejected)).unwrap();
    assert!(rejected.iter().any(|r| r.id == 1));
    assert_eq!(state.store.stats().unwrap().pending, 0);
}

#[test]
fn review_actions_require_login() {
    let state = test_state();

    let resp = handle(post_form("/admin/nominations/1/approve", ""), &state)
        .expect("Failed to handle request");

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/admin"
    );
    // Nothing changed.
    assert_eq!(state.store.stats().unwrap().pending, 1);
}

#[test]
fn deleting_a_nomination_removes_it() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(
        post_form_with_session("/admin/nominations/2/delete", "", &token),
        &state,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 302);

    let stats = state.store.stats().unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.approved, 0);

    // Gone from the dashboard too.
    let resp = handle(get_with_session("/admin/dashboard", &token), &state)
        .expect("Failed to handle request");
    let body = body_string(resp);
    assert!(!body.contains("Rajesh Kumar"));
    assert!(body.contains("Dr. Priya Sharma"));
}

#[test]
fn unknown_nomination_id_is_not_found() {
    let state = test_state();
    let token = login(&state);

    match handle(
        post_form_with_session("/admin/nominations/99/approve", "", &token),
        &state,
    ) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn unknown_action_is_not_found() {
    let state = test_state();
    let token = login(&state);

    match handle(
        post_form_with_session("/admin/nominations/1/escalate", "", &token),
        &state,
    ) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn redirect_after_action_preserves_filters() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(
        post_form_with_session(
            "/admin/nominations/1/approve",
            "q=priya&category=all&status=pending",
            &token,
        ),
        &state,
    )
    .expect("Failed to handle request");

    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/admin/dashboard?q=priya&category=all&status=pending"
    );
}

#[test]
fn dashboard_filters_by_status() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(
        get_with_session("/admin/dashboard?status=approved", &token),
        &state,
    )
    .expect("Failed to handle request");

    let body = body_string(resp);
    assert!(body.contains("Rajesh Kumar"));
    assert!(!body.contains("Dr. Priya Sharma"));
    assert!(!body.contains("Anita Desai"));
}

#[test]
fn dashboard_search_filters_records() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(
        get_with_session("/admin/dashboard?q=priya", &token),
        &state,
    )
    .expect("Failed to handle request");

    let body = body_string(resp);
    assert!(body.contains("Dr. Priya Sharma"));
    assert!(!body.contains("Rajesh Kumar"));
    assert!(!body.contains("Anita Desai"));
}

#[test]
fn dashboard_shows_empty_state_when_nothing_matches() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(
        get_with_session("/admin/dashboard?q=zzz-no-match", &token),
        &state,
    )
    .expect("Failed to handle request");

    assert!(body_string(resp).contains("No nominations found"));
}

#[test]
fn pending_records_show_review_buttons_and_settled_ones_do_not() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(
        get_with_session("/admin/dashboard?status=pending", &token),
        &state,
    )
    .expect("Failed to handle request");
    let body = body_string(resp);
    assert!(body.contains("/admin/nominations/1/approve"));
    assert!(body.contains("/admin/nominations/1/reject"));

    let resp = handle(
        get_with_session("/admin/dashboard?status=approved", &token),
        &state,
    )
    .expect("Failed to handle request");
    let body = body_string(resp);
    assert!(!body.contains("/approve"));
    assert!(body.contains("/admin/nominations/2/delete"));
}

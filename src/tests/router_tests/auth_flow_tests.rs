use crate::router::handle;
use crate::tests::utils::{
    body_string, get, get_with_session, login, post_form, post_form_with_session, test_state,
};

#[test]
fn login_page_loads() {
    let state = test_state();

    let resp = handle(get("/admin"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Admin Login"));
    assert!(body.contains("Demo Mode:"));
    assert!(body.contains("form"));
}

#[test]
fn login_rejects_invalid_email_shape() {
    let state = test_state();

    let resp = handle(post_form("/admin", "email=not-an-email&password=pw"), &state)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Please enter a valid email address"));
    // The entered email survives the re-render.
    assert!(body.contains(r#"value="not-an-email""#));
}

#[test]
fn login_rejects_empty_password() {
    let state = test_state();

    let resp = handle(post_form("/admin", "email=admin%40example.com&password="), &state)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Password is required"));
}

#[test]
fn any_valid_credentials_unlock_the_dashboard() {
    let state = test_state();

    let resp = handle(
        post_form("/admin", "email=whoever%40example.org&password=anything"),
        &state,
    )
    .expect("Failed to handle request");

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/admin/dashboard"
    );
    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn dashboard_requires_login() {
    let state = test_state();

    let resp = handle(get("/admin/dashboard"), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 302, "unauthenticated visits should redirect");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/admin"
    );
}

#[test]
fn dashboard_loads_with_a_session() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(get_with_session("/admin/dashboard", &token), &state)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("Manage nominations and awards"));
    // Seeded records show up.
    assert!(body.contains("Dr. Priya Sharma"));
    assert!(body.contains("Rajesh Kumar"));
    assert!(body.contains("Anita Desai"));
}

#[test]
fn login_page_redirects_when_already_signed_in() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(get_with_session("/admin", &token), &state)
        .expect("Failed to handle request");

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/admin/dashboard"
    );
}

#[test]
fn logout_revokes_the_session() {
    let state = test_state();
    let token = login(&state);

    let resp = handle(post_form_with_session("/admin/logout", "", &token), &state)
        .expect("Failed to handle request");

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/admin"
    );
    // Cookie is cleared.
    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.contains("Max-Age=0"));

    // The old token no longer opens the dashboard.
    let resp = handle(get_with_session("/admin/dashboard", &token), &state)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 302);
}

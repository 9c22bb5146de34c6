use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_state};
use astra::Body;
use http::{Method, Request};

const VALID_FORM: &str = "candidateName=Dr.+Priya+Sharma\
    &email=priya%40example.com\
    &phone=987-654-3210\
    &category=Pharma+%26+Healthcare\
    &organization=City+Hospital\
    &achievements=Led+breakthrough+research+in+cancer+treatment%2C+published+50%2B+papers.";

#[test]
fn nomination_form_loads() {
    let state = test_state();

    let resp = handle(get("/nominate"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Nominate for Anand Awards"));
    assert!(body.contains("form"));
    assert!(body.contains("Select a category"));
}

#[test]
fn category_prefilled_from_detail_page_link() {
    let state = test_state();

    let resp = handle(get("/nominate?category=film-entertainment"), &state)
        .expect("Failed to handle request");
    let body = body_string(resp);

    assert!(body.contains(r#"value="Film &amp; Entertainment" selected"#));
}

#[test]
fn missing_fields_rerender_with_messages() {
    let state = test_state();

    let resp = handle(post_form("/nominate", ""), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Candidate name is required"));
    assert!(body.contains("Email is required"));
    assert!(body.contains("Phone number is required"));
    assert!(body.contains("Please select an award category"));
    assert!(body.contains("Organization/Company name is required"));
    assert!(body.contains("Please describe achievements and credentials"));
}

#[test]
fn short_achievements_rerenders_and_keeps_values() {
    let state = test_state();

    let form_body = "candidateName=Dr.+Priya+Sharma\
        &email=priya%40example.com\
        &phone=9876543210\
        &category=Pharma+%26+Healthcare\
        &organization=City+Hospital\
        &achievements=Too+short";

    let resp = handle(post_form("/nominate", form_body), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Please provide at least 50 characters describing achievements"));
    // Submitted values survive the re-render.
    assert!(body.contains(r#"value="Dr. Priya Sharma""#));
    assert!(body.contains(r#"value="priya@example.com""#));
    // No success confirmation.
    assert!(!body.contains("Nomination Submitted Successfully!"));
}

#[test]
fn valid_submission_shows_success_page() {
    let state = test_state();

    let resp = handle(post_form("/nominate", VALID_FORM), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Nomination Submitted Successfully!"));
    assert!(body.contains("Return to Home"));
}

#[test]
fn submissions_do_not_touch_the_review_store() {
    let state = test_state();

    handle(post_form("/nominate", VALID_FORM), &state).expect("Failed to handle request");

    // The dashboard's store is only seeded at startup and mutated by
    // review actions; public submissions go to the (mocked) backend.
    assert_eq!(state.store.stats().unwrap().total, 3);
}

fn multipart_request(path: &str, boundary: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn multipart_nomination(document: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    let text_fields = [
        ("candidateName", "Anita Desai"),
        ("email", "anita@example.com"),
        ("phone", "9876543212"),
        ("category", "Film & Entertainment"),
        ("organization", "Independent"),
        (
            "achievements",
            "Award-winning director, 10+ critically acclaimed films, international recognition.",
        ),
    ];

    for (name, value) in text_fields {
        body.extend_from_slice(b"--FormBoundary\r\n");
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((filename, content_type, data)) = document {
        body.extend_from_slice(b"--FormBoundary\r\n");
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"documents\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(b"--FormBoundary--\r\n");
    body
}

#[test]
fn multipart_submission_with_document_succeeds() {
    let state = test_state();

    let body = multipart_nomination(Some(("cv.pdf", "application/pdf", b"%PDF-1.4 fake")));
    let resp = handle(multipart_request("/nominate", "FormBoundary", body), &state)
        .expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Nomination Submitted Successfully!"));
}

#[test]
fn multipart_submission_rejects_wrong_document_type() {
    let state = test_state();

    let body = multipart_nomination(Some(("notes.txt", "text/plain", b"plain text")));
    let resp = handle(multipart_request("/nominate", "FormBoundary", body), &state)
        .expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Please upload a PDF or Word document"));
    assert!(!body.contains("Nomination Submitted Successfully!"));
}

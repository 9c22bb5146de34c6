// src/domain/validate.rs
//
// Pure field validation for the nomination and admin login forms.
// Returns a field -> message map; an empty map means the input is valid.

use crate::domain::category::is_valid_category_title;
use crate::domain::nomination::{FileUpload, NominationForm};
use std::collections::BTreeMap;

pub type ValidationErrors = BTreeMap<&'static str, String>;

const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;
const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;
const MIN_ACHIEVEMENTS_CHARS: usize = 50;

const DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

// image/jpg is not a registered type but browsers still send it.
const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg"];

/// Minimal `local@domain.tld` shape check: no whitespace, exactly one `@`,
/// and a dot in the domain with something on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

pub fn validate_nomination(form: &NominationForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.candidate_name.trim().is_empty() {
        errors.insert("candidateName", "Candidate name is required".into());
    }

    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !is_valid_email(&form.email) {
        errors.insert("email", "Please enter a valid email address".into());
    }

    if form.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required".into());
    } else if digit_count(&form.phone) != 10 {
        errors.insert("phone", "Please enter a valid 10-digit phone number".into());
    }

    if !is_valid_category_title(&form.category) {
        errors.insert("category", "Please select an award category".into());
    }

    if form.organization.trim().is_empty() {
        errors.insert("organization", "Organization/Company name is required".into());
    }

    let achievements = form.achievements.trim();
    if achievements.is_empty() {
        errors.insert(
            "achievements",
            "Please describe achievements and credentials".into(),
        );
    } else if achievements.chars().count() < MIN_ACHIEVEMENTS_CHARS {
        errors.insert(
            "achievements",
            "Please provide at least 50 characters describing achievements".into(),
        );
    }

    if let Some(doc) = &form.document {
        if let Some(msg) = validate_document(doc) {
            errors.insert("documents", msg);
        }
    }

    if let Some(img) = &form.image {
        if let Some(msg) = validate_image(img) {
            errors.insert("images", msg);
        }
    }

    errors
}

fn validate_document(file: &FileUpload) -> Option<String> {
    if !DOCUMENT_TYPES.contains(&file.content_type.essence_str()) {
        return Some("Please upload a PDF or Word document".into());
    }
    if file.size > MAX_DOCUMENT_BYTES {
        return Some("File size must be less than 5MB".into());
    }
    None
}

fn validate_image(file: &FileUpload) -> Option<String> {
    if !IMAGE_TYPES.contains(&file.content_type.essence_str()) {
        return Some("Please upload a JPEG or PNG image".into());
    }
    if file.size > MAX_IMAGE_BYTES {
        return Some("Image size must be less than 2MB".into());
    }
    None
}

/// Shape-only check for the admin login form. Any syntactically valid
/// email plus any non-empty password passes; there is no credential check.
pub fn validate_login(email: &str, password: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if email.trim().is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email address".into());
    }

    if password.is_empty() {
        errors.insert("password", "Password is required".into());
    }

    errors
}

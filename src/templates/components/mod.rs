use crate::domain::{Status, ValidationErrors};
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Inline message under an invalid form field, if any.
pub fn field_error(errors: &ValidationErrors, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(field) {
            p class="field-error text-red-500 text-sm" { (msg) }
        }
    }
}

pub fn status_badge(status: Status) -> Markup {
    let class = match status {
        Status::Pending => "badge badge-pending",
        Status::Approved => "badge badge-approved",
        Status::Rejected => "badge badge-rejected",
    };
    html! {
        span class=(class) { (status.label()) }
    }
}

use crate::domain::category::CATEGORIES;
use crate::domain::{NominationForm, ValidationErrors};
use crate::templates::{components::field_error, desktop_layout};
use maud::{html, Markup};

/// The nomination form, re-rendered with the submitted values and any
/// field errors after a failed submit.
pub fn nominate_page(form: &NominationForm, errors: &ValidationErrors) -> Markup {
    desktop_layout(
        "Nominate",
        false,
        html! {
            main class="container narrow" {
                div class="text-center" {
                    h1 { "Nominate for Anand Awards" }
                    p class="lead" { "Submit your nomination for exceptional talent and excellence" }
                }

                form method="post" action="/nominate" enctype="multipart/form-data" class="card" {
                    div class="form-field" {
                        label for="candidateName" { "Full Name *" }
                        input type="text" id="candidateName" name="candidateName"
                            value=(form.candidate_name)
                            placeholder="Enter nominee's full name";
                        (field_error(errors, "candidateName"))
                    }

                    div class="form-field" {
                        label for="email" { "Email Address *" }
                        input type="email" id="email" name="email"
                            value=(form.email)
                            placeholder="nominee@example.com";
                        (field_error(errors, "email"))
                    }

                    div class="form-field" {
                        label for="phone" { "Phone Number *" }
                        input type="tel" id="phone" name="phone"
                            value=(form.phone)
                            placeholder="10-digit phone number";
                        (field_error(errors, "phone"))
                    }

                    div class="form-field" {
                        label for="category" { "Award Category *" }
                        select id="category" name="category" {
                            option value="" selected[form.category.is_empty()] { "Select a category" }
                            @for category in CATEGORIES {
                                option value=(category.title)
                                    selected[form.category == category.title] {
                                    (category.title)
                                }
                            }
                        }
                        (field_error(errors, "category"))
                    }

                    div class="form-field" {
                        label for="organization" { "Organization/Company *" }
                        input type="text" id="organization" name="organization"
                            value=(form.organization)
                            placeholder="Enter organization name";
                        (field_error(errors, "organization"))
                    }

                    div class="form-field" {
                        label for="achievements" { "Achievements & Credentials *" }
                        textarea id="achievements" name="achievements" rows="6"
                            placeholder="Describe the achievements and contributions that make this nominee exceptional (minimum 50 characters)..." {
                            (form.achievements)
                        }
                        (field_error(errors, "achievements"))
                    }

                    div class="form-field" {
                        label for="documents" { "Supporting Documents (Optional)" }
                        input type="file" id="documents" name="documents" accept=".pdf,.doc,.docx";
                        p class="hint" { "Upload PDF or Word document (Max 5MB)" }
                        (field_error(errors, "documents"))
                    }

                    div class="form-field" {
                        label for="images" { "Images (Optional)" }
                        input type="file" id="images" name="images" accept="image/jpeg,image/png,image/jpg";
                        p class="hint" { "Upload JPEG or PNG image (Max 2MB)" }
                        (field_error(errors, "images"))
                    }

                    button type="submit" class="btn primary" { "Submit Nomination" }
                }
            }
        },
    )
}

/// Full-page confirmation shown after a successful submit.
pub fn nomination_success_page() -> Markup {
    desktop_layout(
        "Nomination Submitted",
        false,
        html! {
            main class="container narrow text-center" {
                h1 { "Nomination Submitted Successfully!" }
                p {
                    "Thank you for your nomination. We will review your submission and get back to you soon."
                }
                a href="/" class="btn primary" { "Return to Home" }
            }
        },
    )
}

use crate::domain::ValidationErrors;
use crate::templates::{components::field_error, desktop_layout};
use maud::{html, Markup};

pub fn admin_login_page(email: &str, errors: &ValidationErrors) -> Markup {
    desktop_layout(
        "Admin Login",
        false,
        html! {
            main class="container narrow" {
                div class="text-center" {
                    h1 { "Admin Login" }
                    p class="lead" { "Access the admin dashboard" }
                }

                form method="post" action="/admin" class="card" {
                    div class="form-field" {
                        label for="email" { "Email Address" }
                        input type="email" id="email" name="email"
                            value=(email)
                            placeholder="admin@example.com";
                        (field_error(errors, "email"))
                    }

                    div class="form-field" {
                        label for="password" { "Password" }
                        input type="password" id="password" name="password"
                            placeholder="Enter your password";
                        (field_error(errors, "password"))
                    }

                    button type="submit" class="btn primary" { "Login" }
                }

                div class="card demo-note" {
                    p {
                        strong { "Demo Mode:" }
                        " Any email/password combination will work for testing purposes."
                    }
                }
            }
        },
    )
}

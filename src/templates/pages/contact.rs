use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn contact_page() -> Markup {
    desktop_layout(
        "Contact",
        false,
        html! {
            main class="container narrow" {
                h1 { "Contact Us" }
                p class="lead" { "Questions about nominations, categories, or the ceremony?" }
                ul {
                    li { "Email: " a href="mailto:info@anandawards.example" { "info@anandawards.example" } }
                    li { "Phone: +91 98765 00000" }
                }
                p {
                    "For nomination queries, include the candidate's name and the award category so we can route your message to the right reviewer."
                }
            }
        },
    )
}

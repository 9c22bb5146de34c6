use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn about_page() -> Markup {
    desktop_layout(
        "About",
        false,
        html! {
            main class="container narrow" {
                h1 { "About Anand Awards" }
                p class="lead" {
                    "The Anand Awards identify high achievers and honor exceptional contributions across industries."
                }
                p {
                    "From business and healthcare to film and public service, our award framework follows a transparent and rigorous selection process: nomination, selection, and recognition. Every nomination is reviewed by the awards committee before a decision is made."
                }
                p {
                    "Beyond the ceremony, the awards exist to motivate future innovators and preserve the legacy of achievers."
                }
            }
        },
    )
}

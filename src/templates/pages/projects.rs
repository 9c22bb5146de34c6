use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn projects_page() -> Markup {
    desktop_layout(
        "Projects",
        false,
        html! {
            main class="container" {
                h1 { "Projects" }
                p class="lead" { "Initiatives run alongside the annual awards." }

                (card("Annual Awards Ceremony", html! {
                    p { "The flagship event where winners across all four categories are felicitated." }
                }))
                (card("Mentorship Programme", html! {
                    p { "Past laureates mentor rising talent nominated through the awards." }
                }))
                (card("Community Outreach", html! {
                    p { "Social impact initiatives extending the reach of the Special Recognitions category." }
                }))
            }
        },
    )
}

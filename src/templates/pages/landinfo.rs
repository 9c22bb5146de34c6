use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn landinfo_page() -> Markup {
    desktop_layout(
        "Land Information",
        false,
        html! {
            main class="container narrow" {
                h1 { "Land Information" }
                p class="lead" { "Venue and grounds information for the awards ceremony." }
                p {
                    "The ceremony grounds host the main stage, exhibition pavilions for each award category, and hospitality areas for nominees and their guests. Detailed venue maps are shared with confirmed attendees ahead of the event."
                }
            }
        },
    )
}

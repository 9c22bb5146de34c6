// templates/pages/home.rs

use crate::domain::category::CATEGORIES;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        false,
        html! {
            main class="container" {
                section class="hero text-center" {
                    h1 { "Anand Awards" }
                    p class="lead" { "Honoring Brilliance. Celebrating Legacy." }
                    p {
                        a href="/nominate" class="btn primary" { "Submit Nomination" }
                        " "
                        a href="/categories" class="btn" { "Explore Categories" }
                    }
                }

                section {
                    h2 { "Our Pillars" }
                    (card("Excellence Recognition", html! {
                        p { "Identifying high achievers and honoring exceptional contributions across industries." }
                    }))
                    (card("Inspiration & Legacy", html! {
                        p { "Motivating future innovators and preserving the legacy of achievers." }
                    }))
                }

                section {
                    h2 { "Award Categories" }
                    p { "Celebrating excellence across multiple industries." }
                    ul {
                        @for category in CATEGORIES {
                            li {
                                a href=(format!("/categories/{}", category.id)) { (category.title) }
                            }
                        }
                    }
                }

                section {
                    h2 { "Award Framework" }
                    p { "A transparent and rigorous selection process: nomination, selection, recognition." }
                }
            }
        },
    )
}

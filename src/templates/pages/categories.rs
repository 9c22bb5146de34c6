use crate::domain::category::CATEGORIES;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn categories_page() -> Markup {
    desktop_layout(
        "Award Categories",
        false,
        html! {
            main class="container" {
                div class="text-center" {
                    h1 { "Award Categories" }
                    p class="lead" {
                        "Celebrating excellence across multiple industries. Explore our comprehensive award categories and find the perfect recognition for outstanding achievements."
                    }
                }

                div class="category-grid" {
                    @for category in CATEGORIES {
                        a href=(format!("/categories/{}", category.id)) class="card category-card" {
                            h2 { (category.title) }
                            p { (category.description) }

                            h3 { "Award Types:" }
                            ul {
                                @for award in category.awards {
                                    li { (award.name) }
                                }
                            }

                            span class="view-details" { "View Details" }
                        }
                    }
                }

                section class="cta text-center" {
                    h2 { "Ready to Nominate?" }
                    p { "Submit your nomination for exceptional talent and excellence" }
                    a href="/nominate" class="btn primary" { "Submit Nomination" }
                }
            }
        },
    )
}

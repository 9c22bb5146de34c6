use crate::domain::category::Category;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn category_detail_page(category: &Category) -> Markup {
    desktop_layout(
        category.title,
        false,
        html! {
            main class="container" {
                p { a href="/categories" { "← Back to Categories" } }

                h1 { (category.title) }
                p class="lead" { (category.description) }
                p { (category.long_description) }

                section {
                    h2 { "Awards in this Category" }
                    @for award in category.awards {
                        div class="card" {
                            h3 { (award.name) }
                            p { (award.description) }
                        }
                    }
                }

                section {
                    h2 { "Judging Criteria" }
                    ul {
                        @for criterion in category.criteria {
                            li { (criterion) }
                        }
                    }
                }

                section class="cta text-center" {
                    h2 { "Nominate in " (category.title) }
                    a href=(format!("/nominate?category={}", category.id)) class="btn primary" {
                        "Submit Nomination"
                    }
                }
            }
        },
    )
}

use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, is_admin: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Anand Awards" }
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { a href="/" { "Anand Awards" } }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/about" { "About" } }
                            li { a href="/projects" { "Projects" } }
                            li { a href="/Landinfo" { "Land Info" } }
                            li { a href="/categories" { "Categories" } }
                            li { a href="/nominate" { "Nominate" } }
                            li { a href="/contact" { "Contact" } }
                            @if is_admin {
                                li { a href="/admin/dashboard" { "Dashboard" } }
                            }
                        }
                    }
                    a href="/admin" class="text-base font-medium hover:text-amber-600" { "Admin" }
                }
                (content)
                footer class="px-6 py-8 text-center text-sm" {
                    p { "Anand Awards · Celebrating excellence across industries" }
                }
            }
        }
    }
}

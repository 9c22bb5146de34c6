use crate::domain::category::CATEGORIES;
use crate::domain::{NominationRecord, Status};
use crate::store::StoreStats;
use crate::templates::{components::status_badge, desktop_layout};
use maud::{html, Markup};

pub struct DashboardVm {
    pub records: Vec<NominationRecord>,
    pub stats: StoreStats,
    /// Raw filter values, echoed back into the filter form and the
    /// hidden fields of every action form so redirects keep the view.
    pub search: String,
    pub category: String,
    pub status: String,
}

pub fn admin_dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Admin Dashboard",
        true,
        html! {
            main class="container" {
                div class="flex items-center justify-between" {
                    div {
                        h1 { "Admin Dashboard" }
                        p { "Manage nominations and awards" }
                    }
                    form method="post" action="/admin/logout" {
                        button type="submit" class="btn danger" { "Logout" }
                    }
                }

                div class="stats-grid" {
                    (stat_card("Total Nominations", vm.stats.total))
                    (stat_card("Pending", vm.stats.pending))
                    (stat_card("Approved", vm.stats.approved))
                    (stat_card("Rejected", vm.stats.rejected))
                }

                form method="get" action="/admin/dashboard" class="card filters" {
                    input type="text" name="q" value=(vm.search)
                        placeholder="Search nominations...";

                    select name="category" {
                        option value="all" selected[vm.category == "all" || vm.category.is_empty()] {
                            "All Categories"
                        }
                        @for category in CATEGORIES {
                            option value=(category.title) selected[vm.category == category.title] {
                                (category.title)
                            }
                        }
                    }

                    select name="status" {
                        option value="all" selected[vm.status == "all" || vm.status.is_empty()] { "All Status" }
                        option value="pending" selected[vm.status == "pending"] { "Pending" }
                        option value="approved" selected[vm.status == "approved"] { "Approved" }
                        option value="rejected" selected[vm.status == "rejected"] { "Rejected" }
                    }

                    button type="submit" class="btn" { "Apply" }
                }

                @if vm.records.is_empty() {
                    div class="card text-center" {
                        p { "No nominations found" }
                    }
                } @else {
                    @for record in &vm.records {
                        (nomination_card(record, vm))
                    }
                }
            }
        },
    )
}

fn stat_card(label: &str, value: usize) -> Markup {
    html! {
        div class="card stat-card" {
            p class="stat-label" { (label) }
            p class="stat-value" { (value) }
        }
    }
}

fn filter_fields(vm: &DashboardVm) -> Markup {
    html! {
        input type="hidden" name="q" value=(vm.search);
        input type="hidden" name="category" value=(vm.category);
        input type="hidden" name="status" value=(vm.status);
    }
}

fn nomination_card(record: &NominationRecord, vm: &DashboardVm) -> Markup {
    html! {
        div class="card nomination" {
            div class="flex items-center justify-between" {
                div {
                    h3 { (record.candidate_name) }
                    p { (record.organization) }
                    p class="muted" { (record.email) " • " (record.phone) }
                }
                div class="flex items-center" {
                    (status_badge(record.status))
                    form method="post"
                        action=(format!("/admin/nominations/{}/delete", record.id))
                        onsubmit="return confirm('Are you sure you want to delete this nomination?');" {
                        (filter_fields(vm))
                        button type="submit" class="btn danger" { "Delete" }
                    }
                }
            }

            p { strong { "Category: " } (record.category) }
            p { strong { "Achievements: " } (record.achievements) }

            div class="flex items-center justify-between" {
                p class="muted" { "Submitted: " (record.submitted_date.format("%Y-%m-%d")) }
                @if record.status == Status::Pending {
                    div class="flex" {
                        form method="post"
                            action=(format!("/admin/nominations/{}/approve", record.id)) {
                            (filter_fields(vm))
                            button type="submit" class="btn success" { "Approve" }
                        }
                        form method="post"
                            action=(format!("/admin/nominations/{}/reject", record.id)) {
                            (filter_fields(vm))
                            button type="submit" class="btn danger" { "Reject" }
                        }
                    }
                }
            }
        }
    }
}

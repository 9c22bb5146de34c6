pub mod about;
pub mod admin_dashboard;
pub mod admin_login;
pub mod categories;
pub mod category_detail;
pub mod contact;
pub mod home;
pub mod landinfo;
pub mod nominate;
pub mod projects;

pub use admin_dashboard::{admin_dashboard_page, DashboardVm};
pub use admin_login::admin_login_page;
pub use categories::categories_page;
pub use category_detail::category_detail_page;
pub use home::home_page;
pub use nominate::{nominate_page, nomination_success_page};

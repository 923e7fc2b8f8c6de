pub mod dashboard_tabs;
pub mod subscription_statuses;

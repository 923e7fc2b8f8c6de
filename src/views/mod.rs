pub mod dashboard;
pub mod subscription_list;

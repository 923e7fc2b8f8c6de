pub mod purchased_content;
pub mod subscriptions;

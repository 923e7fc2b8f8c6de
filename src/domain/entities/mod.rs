pub mod content;
pub mod profiles;
pub mod purchased_content;
pub mod subscriptions;

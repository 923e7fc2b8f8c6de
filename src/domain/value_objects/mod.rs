pub mod enums;
pub mod profiles;
pub mod purchased_content;
pub mod subscriptions;

pub mod analytics;
pub mod subscriptions;

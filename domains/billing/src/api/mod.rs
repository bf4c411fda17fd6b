//! API layer for the Billing domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::BillingState;
pub use routes::routes;

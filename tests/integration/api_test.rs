//! API endpoint integration tests
//!
//! Drives the fully composed router in-process against in-memory stores.

#![allow(dead_code)]

mod accounts;
mod billing;
mod catalog;
mod common;

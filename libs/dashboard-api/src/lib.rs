//! Dashboard API models
//!
//! View models served by the dashboard routes and request bodies accepted by
//! the store endpoints.

pub mod models;

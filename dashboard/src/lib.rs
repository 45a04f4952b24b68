//! Device Dashboard Library
//!
//! In-memory device and task stores behind a small HTTP dashboard.

pub mod app;
pub mod errors;
pub mod logs;
pub mod models;
pub mod router;
pub mod server;
pub mod storage;
pub mod stores;
pub mod utils;

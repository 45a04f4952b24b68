//! Domain models

pub mod device;
pub mod log;
pub mod task;

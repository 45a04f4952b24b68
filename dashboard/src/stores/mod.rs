//! In-memory state containers

pub mod device;
pub mod seed;
pub mod task;

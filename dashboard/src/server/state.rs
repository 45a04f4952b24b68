//! Server state

use std::sync::Arc;

use crate::stores::device::DeviceStore;
use crate::stores::task::TaskStore;

/// Server state shared across handlers
pub struct ServerState {
    pub devices: Arc<DeviceStore>,
    pub tasks: Arc<TaskStore>,
}

impl ServerState {
    pub fn new(devices: Arc<DeviceStore>, tasks: Arc<TaskStore>) -> Self {
        Self { devices, tasks }
    }
}

//! Application state management

use std::sync::Arc;

use tracing::info;

use crate::stores::device::DeviceStore;
use crate::stores::task::TaskStore;

/// Main application state.
///
/// Owns the stores and hands out shared handles to whoever needs them; there
/// is no process-wide store instance.
pub struct AppState {
    /// Devices, their tasks and the log sink
    pub devices: Arc<DeviceStore>,

    /// Standalone tasks
    pub tasks: Arc<TaskStore>,
}

impl AppState {
    /// Initialize application state
    pub fn init(seed_demo_data: bool) -> Self {
        info!("Initializing application state...");

        let devices = if seed_demo_data {
            DeviceStore::with_demo_data()
        } else {
            DeviceStore::new()
        };
        info!("Device store ready with {} devices", devices.len());

        Self {
            devices: Arc::new(devices),
            tasks: Arc::new(TaskStore::new()),
        }
    }

    /// Shutdown application state
    pub fn shutdown(&self) {
        info!(
            "Shutting down application state ({} devices, {} tasks, {} log entries)",
            self.devices.len(),
            self.tasks.len(),
            self.devices.logs().len(),
        );
    }
}

//! Device store
//!
//! Ordered registry of devices, their nested tasks and the log sink. Every
//! lookup is a linear scan in registry order; devices are never reordered.

use std::sync::RwLock;

use tracing::{debug, warn};

use crate::models::device::{Device, DeviceId, DeviceTask};
use crate::models::log::LogEntry;

/// What to do when a task targets a device that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissPolicy {
    /// Skip the task without any signal
    Silent,
    /// Skip the task and emit a warning
    Warn,
}

#[derive(Debug, Default)]
struct DeviceState {
    devices: Vec<Device>,
    logs: Vec<LogEntry>,
}

/// In-memory device store
#[derive(Debug, Default)]
pub struct DeviceStore {
    state: RwLock<DeviceState>,
}

impl DeviceStore {
    /// Create an empty device store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given devices, in order
    pub fn from_devices(devices: Vec<Device>) -> Self {
        Self {
            state: RwLock::new(DeviceState {
                devices,
                logs: Vec::new(),
            }),
        }
    }

    /// Append a new online device.
    ///
    /// The ID is the last device's ID plus one, or 1 when the store is empty.
    /// Removing the last device and adding another therefore reuses its ID.
    pub fn add_device(&self, name: impl Into<String>) -> Device {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        let id = state.devices.last().map_or(1, |last| last.id + 1);
        let device = Device::new(id, name);
        state.devices.push(device.clone());

        debug!("Added device {} ({})", device.id, device.name);
        device
    }

    /// Remove a device and its tasks. Returns false if no device has this ID.
    pub fn remove_device(&self, device_id: DeviceId) -> bool {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match state.devices.iter().position(|d| d.id == device_id) {
            Some(index) => {
                state.devices.remove(index);
                debug!("Removed device {}", device_id);
                true
            }
            None => false,
        }
    }

    /// Append a task to a device. Does nothing if the device does not exist.
    pub fn add_task(&self, device_id: DeviceId, task: DeviceTask) {
        self.push_task(device_id, task, MissPolicy::Silent);
    }

    /// Append a task to a device, warning if the device does not exist.
    ///
    /// Same mutation as [`DeviceStore::add_task`]; both entry points are kept
    /// because callers rely on the different miss signaling.
    pub fn assign_task(&self, device_id: DeviceId, task: DeviceTask) {
        self.push_task(device_id, task, MissPolicy::Warn);
    }

    /// Append a task to a device, applying `policy` on a miss.
    /// Returns whether the device was found.
    pub fn push_task(&self, device_id: DeviceId, task: DeviceTask, policy: MissPolicy) -> bool {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match state.devices.iter_mut().find(|d| d.id == device_id) {
            Some(device) => {
                device.tasks.push(task);
                true
            }
            None => {
                if policy == MissPolicy::Warn {
                    warn!("Device with ID {} not found.", device_id);
                }
                false
            }
        }
    }

    /// Remove the task at `task_index` from a device.
    /// Returns false, leaving the store untouched, if either does not exist.
    pub fn remove_task(&self, device_id: DeviceId, task_index: usize) -> bool {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        let Some(device) = state.devices.iter_mut().find(|d| d.id == device_id) else {
            return false;
        };
        if task_index >= device.tasks.len() {
            return false;
        }

        device.tasks.remove(task_index);
        true
    }

    /// Append an entry to the log sink
    pub fn add_log(&self, entry: LogEntry) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.logs.push(entry);
    }

    /// Get a device by ID (first match)
    pub fn get_device(&self, device_id: DeviceId) -> Option<Device> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.devices.iter().find(|d| d.id == device_id).cloned()
    }

    /// Snapshot of all devices in registry order
    pub fn devices(&self) -> Vec<Device> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.devices.clone()
    }

    /// Snapshot of the log sink in append order
    pub fn logs(&self) -> Vec<LogEntry> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.logs.clone()
    }

    /// Number of devices
    pub fn len(&self) -> usize {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.devices.len()
    }

    /// Check if the store has no devices
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

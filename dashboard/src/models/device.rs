//! Device models

use serde::{Deserialize, Serialize};

/// Device identifier
pub type DeviceId = u64;

/// Connection status of a device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[default]
    Online,
    Offline,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task owned by a device.
///
/// Device tasks have no identity of their own; they are addressed by their
/// position in the owning device's task list. Every field is free-form and
/// never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceTask {
    pub name: String,
    pub tasktype: String,
    pub status: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub description: String,
}

impl DeviceTask {
    /// Create a task with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A device registered on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Device ID, assigned by the device store
    pub id: DeviceId,

    /// Display name (not required to be unique)
    pub name: String,

    /// Connection status
    pub status: DeviceStatus,

    /// Tasks in insertion order
    #[serde(default)]
    pub tasks: Vec<DeviceTask>,
}

impl Device {
    /// Create a new online device with no tasks
    pub fn new(id: DeviceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: DeviceStatus::Online,
            tasks: Vec::new(),
        }
    }
}

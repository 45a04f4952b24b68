//! Dashboard API models

use serde::{Deserialize, Serialize};

/// Health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Version response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
}

/// Error body returned by views and endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ================================= VIEWS ======================================= //

/// One row of the home view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub task_count: usize,
}

/// Home view: every device in registry order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub devices: Vec<DeviceSummary>,
    pub total: usize,
}

/// A device task as shown on the details view.
///
/// `index` is the task's position in the device's task list, which is the
/// only handle a client has for removing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceTaskView {
    pub index: usize,
    pub name: String,
    pub tasktype: String,
    pub status: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub description: String,
}

/// Device details view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceDetailsView {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub tasks: Vec<DeviceTaskView>,
}

/// Logs view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsView {
    pub logs: Vec<serde_json::Value>,
    pub total: usize,
}

// ================================ REQUESTS ===================================== //

/// Add device request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDeviceRequest {
    pub name: String,
}

/// Task status update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: String,
}

/// Result of a remove operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveResponse {
    pub removed: bool,
}

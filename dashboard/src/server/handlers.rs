//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use dashboard_api::models::{
    AddDeviceRequest, DeviceDetailsView, DeviceSummary, DeviceTaskView, HealthResponse,
    HomeView, LogsView, RemoveResponse, UpdateTaskStatusRequest, VersionResponse,
};
use tracing::{debug, warn};

use crate::errors::DashboardError;
use crate::models::device::{Device, DeviceId, DeviceTask};
use crate::models::log::{self, LogEntry};
use crate::models::task::StandaloneTask;
use crate::router::{self, View};
use crate::server::state::ServerState;
use crate::utils::version_info;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    let version = version_info();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: version.name,
        version: version.version,
    })
}

/// Version handler
pub async fn version_handler() -> impl IntoResponse {
    let version = version_info();
    Json(VersionResponse {
        name: version.name,
        version: version.version,
    })
}

// ================================= VIEWS ======================================= //

fn device_details_view(device: Device) -> DeviceDetailsView {
    DeviceDetailsView {
        id: device.id,
        name: device.name,
        status: device.status.to_string(),
        tasks: device
            .tasks
            .into_iter()
            .enumerate()
            .map(|(index, task)| DeviceTaskView {
                index,
                name: task.name,
                tasktype: task.tasktype,
                status: task.status,
                start_date: task.start_date,
                end_date: task.end_date,
                description: task.description,
            })
            .collect(),
    }
}

fn home_view(state: &ServerState) -> HomeView {
    let devices: Vec<DeviceSummary> = state
        .devices
        .devices()
        .into_iter()
        .map(|device| DeviceSummary {
            id: device.id,
            name: device.name,
            status: device.status.to_string(),
            task_count: device.tasks.len(),
        })
        .collect();

    let total = devices.len();
    HomeView { devices, total }
}

fn logs_view(state: &ServerState) -> LogsView {
    let logs = state.devices.logs();
    let total = logs.len();
    LogsView { logs, total }
}

/// Dispatch a request through the route table to its view.
///
/// Paths outside the table, and methods other than GET, are not found.
pub async fn view_handler(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
) -> Result<Response, DashboardError> {
    let not_found = || DashboardError::NotFound(format!("no route for {} {}", method, uri.path()));

    let matched = router::resolve(uri.path()).ok_or_else(not_found)?;
    if method != Method::GET {
        return Err(not_found());
    }

    let response = match matched.route.view {
        View::Home => Json(home_view(&state)).into_response(),
        View::Logs => Json(logs_view(&state)).into_response(),
        View::DeviceDetails => {
            // The route hands over the raw segment; a non-numeric ID can't
            // match any device
            let id = matched.param("id").unwrap_or_default();
            let device = parse_device_id(id)
                .and_then(|device_id| state.devices.get_device(device_id))
                .ok_or_else(|| DashboardError::NotFound(format!("device {}", id)))?;
            Json(device_details_view(device)).into_response()
        }
    };
    Ok(response)
}

// ============================== DEVICE STORE ==================================== //

/// Add a device
pub async fn add_device_handler(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<AddDeviceRequest>,
) -> impl IntoResponse {
    let device = state.devices.add_device(request.name);
    state.devices.add_log(log::device_activity(
        "add_device",
        device.id,
        format!("Added device {}", device.name),
    ));

    (StatusCode::CREATED, Json(device))
}

fn parse_device_id(segment: &str) -> Option<DeviceId> {
    segment.parse().ok()
}

/// Remove a device
pub async fn remove_device_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let Some(device_id) = parse_device_id(&id) else {
        return Json(RemoveResponse { removed: false });
    };

    let removed = state.devices.remove_device(device_id);
    if removed {
        state.devices.add_log(log::device_activity(
            "remove_device",
            device_id,
            format!("Removed device {}", device_id),
        ));
    }

    Json(RemoveResponse { removed })
}

/// Add a task to a device. Unknown devices are ignored.
pub async fn add_device_task_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Json(task): Json<DeviceTask>,
) -> impl IntoResponse {
    debug!("Adding task {} to device {}", task.name, id);
    if let Some(device_id) = parse_device_id(&id) {
        state.devices.add_task(device_id, task);
    }
    StatusCode::NO_CONTENT
}

/// Assign a task to a device. Unknown devices are logged and ignored.
pub async fn assign_device_task_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Json(task): Json<DeviceTask>,
) -> impl IntoResponse {
    debug!("Assigning task {} to device {}", task.name, id);
    match parse_device_id(&id) {
        Some(device_id) => state.devices.assign_task(device_id, task),
        None => warn!("Device with ID {} not found.", id),
    }
    StatusCode::NO_CONTENT
}

/// Remove a task from a device by position
pub async fn remove_device_task_handler(
    State(state): State<Arc<ServerState>>,
    Path((id, index)): Path<(String, String)>,
) -> impl IntoResponse {
    let (Some(device_id), Ok(index)) = (parse_device_id(&id), index.parse::<usize>()) else {
        return Json(RemoveResponse { removed: false });
    };

    let removed = state.devices.remove_task(device_id, index);
    if removed {
        state.devices.add_log(log::device_activity(
            "remove_task",
            device_id,
            format!("Removed task {} from device {}", index, device_id),
        ));
    }

    Json(RemoveResponse { removed })
}

/// List the log sink
pub async fn list_logs_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.devices.logs())
}

/// Append an arbitrary entry to the log sink
pub async fn add_log_handler(
    State(state): State<Arc<ServerState>>,
    Json(entry): Json<LogEntry>,
) -> impl IntoResponse {
    state.devices.add_log(entry);
    StatusCode::NO_CONTENT
}

// =============================== TASK STORE ===================================== //

/// List standalone tasks
pub async fn list_tasks_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.tasks.tasks())
}

/// Add a standalone task
pub async fn add_task_handler(
    State(state): State<Arc<ServerState>>,
    Json(task): Json<StandaloneTask>,
) -> impl IntoResponse {
    state.tasks.add_task(task);
    StatusCode::NO_CONTENT
}

/// Update the status of a standalone task. Unknown IDs are ignored.
pub async fn update_task_status_handler(
    State(state): State<Arc<ServerState>>,
    Path(task_id): Path<String>,
    Json(request): Json<UpdateTaskStatusRequest>,
) -> impl IntoResponse {
    if let Some(task_id) = state.tasks.resolve_id(&task_id) {
        state.tasks.update_task_status(task_id, request.status);
    }
    StatusCode::NO_CONTENT
}

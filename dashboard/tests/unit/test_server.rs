//! HTTP server tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use devdash::server::serve::app;
use devdash::server::state::ServerState;
use devdash::stores::device::DeviceStore;
use devdash::stores::task::TaskStore;
use serde_json::{json, Value};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    devices: Arc<DeviceStore>,
    tasks: Arc<TaskStore>,
}

fn test_app(devices: DeviceStore) -> TestApp {
    let devices = Arc::new(devices);
    let tasks = Arc::new(TaskStore::new());
    let state = ServerState::new(devices.clone(), tasks.clone());
    TestApp {
        router: app(Arc::new(state)),
        devices,
        tasks,
    }
}

async fn send(app: &TestApp, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_home_view_lists_demo_devices() {
    let app = test_app(DeviceStore::with_demo_data());

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["devices"][0]["name"], "Factory's Smart Sensor");
    assert_eq!(body["devices"][0]["task_count"], 3);
    assert_eq!(body["devices"][1]["status"], "offline");
}

#[tokio::test]
async fn test_device_details_view() {
    let app = test_app(DeviceStore::with_demo_data());

    let (status, body) = send(&app, Method::GET, "/device/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["tasks"][2]["index"], 2);
    assert_eq!(body["tasks"][2]["name"], "Collect-co2");
    assert_eq!(body["tasks"][0]["startDate"], "2024-11-30T10:27");
}

#[tokio::test]
async fn test_device_details_unknown_or_invalid_id() {
    let app = test_app(DeviceStore::with_demo_data());

    let (status, body) = send(&app, Method::GET, "/device/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("device 99"));

    let (status, _) = send(&app, Method::GET, "/device/camera", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = test_app(DeviceStore::new());
    let (status, body) = send(&app, Method::GET, "/settings", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_add_and_remove_device() {
    let app = test_app(DeviceStore::new());

    let (status, body) = send(&app, Method::POST, "/api/devices", Some(json!({"name": "A"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["status"], "online");

    send(&app, Method::POST, "/api/devices", Some(json!({"name": "B"}))).await;

    let (status, body) = send(&app, Method::DELETE, "/api/devices/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], true);

    let (_, body) = send(&app, Method::DELETE, "/api/devices/1", None).await;
    assert_eq!(body["removed"], false);

    let devices = app.devices.devices();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].name, "B");

    // Two adds and one successful remove were recorded
    let (_, body) = send(&app, Method::GET, "/logs", None).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["logs"][2]["action"], "remove_device");
    assert_eq!(body["logs"][2]["device_id"], 1);
}

#[tokio::test]
async fn test_device_tasks() {
    let app = test_app(DeviceStore::new());
    app.devices.add_device("A");
    app.devices.add_device("B");

    let task = json!({"name": "X", "tasktype": "Collect-data", "startDate": "2024-12-01T08:00"});
    let (status, _) = send(&app, Method::POST, "/api/devices/2/tasks", Some(task)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::POST, "/api/devices/99/tasks", Some(json!({"name": "Y"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::POST, "/api/devices/2/assign", Some(json!({"name": "Z"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let device = app.devices.get_device(2).unwrap();
    let names: Vec<&str> = device.tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["X", "Z"]);
    assert_eq!(device.tasks[0].start_date, "2024-12-01T08:00");
    assert!(app.devices.get_device(1).unwrap().tasks.is_empty());

    let (_, body) = send(&app, Method::DELETE, "/api/devices/2/tasks/0", None).await;
    assert_eq!(body["removed"], true);
    let (_, body) = send(&app, Method::DELETE, "/api/devices/2/tasks/5", None).await;
    assert_eq!(body["removed"], false);

    let (_, body) = send(&app, Method::GET, "/device/2", None).await;
    assert_eq!(body["tasks"][0]["name"], "Z");
    assert_eq!(body["tasks"][0]["index"], 0);
}

#[tokio::test]
async fn test_custom_log_entries() {
    let app = test_app(DeviceStore::new());

    let (status, _) = send(&app, Method::POST, "/api/logs", Some(json!("reboot requested"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    send(&app, Method::POST, "/api/logs", Some(json!({"level": "warn"}))).await;

    let (_, body) = send(&app, Method::GET, "/api/logs", None).await;
    assert_eq!(body, json!(["reboot requested", {"level": "warn"}]));
}

#[tokio::test]
async fn test_task_store_endpoints() {
    let app = test_app(DeviceStore::new());

    let task = json!({"id": "t-1", "status": "pending", "owner": "ops"});
    let (status, _) = send(&app, Method::POST, "/api/tasks", Some(task)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/tasks/t-1/status",
        Some(json!({"status": "in-progress"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    send(&app, Method::PUT, "/api/tasks/missing/status", Some(json!({"status": "done"}))).await;

    let (_, body) = send(&app, Method::GET, "/api/tasks", None).await;
    assert_eq!(body, json!([{"id": "t-1", "status": "in-progress", "owner": "ops"}]));
    assert_eq!(app.tasks.len(), 1);
}

#[tokio::test]
async fn test_task_store_accepts_numeric_ids_and_missing_status() {
    let app = test_app(DeviceStore::new());

    let (status, _) = send(&app, Method::POST, "/api/tasks", Some(json!({"id": 1, "status": "pending"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::POST, "/api/tasks", Some(json!({"id": "x"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::PUT, "/api/tasks/1/status", Some(json!({"status": "done"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/api/tasks", None).await;
    assert_eq!(body, json!([{"id": 1, "status": "done"}, {"id": "x", "status": ""}]));
}

#[tokio::test]
async fn test_views_tolerate_trailing_slash() {
    let app = test_app(DeviceStore::with_demo_data());
    app.devices.add_log(json!("boot"));

    let (status, body) = send(&app, Method::GET, "/logs/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["logs"][0], "boot");

    let (status, body) = send(&app, Method::GET, "/device/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, body) = send(&app, Method::GET, "/?tab=all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);

    // Views are read-only
    let (status, _) = send(&app, Method::POST, "/logs", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_device_ids_on_mutations() {
    let app = test_app(DeviceStore::with_demo_data());
    let before = app.devices.devices();

    let (status, body) = send(&app, Method::DELETE, "/api/devices/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], false);

    let (status, body) = send(&app, Method::DELETE, "/api/devices/1/tasks/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], false);

    let (status, _) = send(&app, Method::POST, "/api/devices/abc/tasks", Some(json!({"name": "Y"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::POST, "/api/devices/abc/assign", Some(json!({"name": "Y"}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(app.devices.devices(), before);
    assert!(app.devices.logs().is_empty());
}

#[tokio::test]
async fn test_health() {
    let app = test_app(DeviceStore::new());
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "devdash");
}

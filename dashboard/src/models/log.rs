//! Log sink entries

use chrono::Utc;
use serde_json::json;

use crate::models::device::DeviceId;

/// An entry of the log sink. No schema is enforced.
pub type LogEntry = serde_json::Value;

/// Build the entry recorded when a device is changed through the API
pub fn device_activity(action: &str, device_id: DeviceId, message: impl Into<String>) -> LogEntry {
    json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "timestamp": Utc::now().to_rfc3339(),
        "action": action,
        "device_id": device_id,
        "message": message.into(),
    })
}

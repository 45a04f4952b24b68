//! Demonstration data loaded at startup

use crate::models::device::{Device, DeviceStatus, DeviceTask};
use crate::stores::device::DeviceStore;

const DEMO_START: &str = "2024-11-30T10:27";
const DEMO_END: &str = "2024-11-30T13:27";

fn collect_task(metric: &str) -> DeviceTask {
    DeviceTask {
        name: format!("Collect-{}", metric),
        tasktype: "Collect-data".to_string(),
        status: "in-progress".to_string(),
        start_date: DEMO_START.to_string(),
        end_date: DEMO_END.to_string(),
        description: format!(
            "Collect {} data from the device at regular intervals",
            metric
        ),
    }
}

/// The three demo devices, the first one with three collection tasks
pub fn demo_devices() -> Vec<Device> {
    let mut sensor = Device::new(1, "Factory's Smart Sensor");
    sensor.tasks = ["temperature", "light", "co2"]
        .into_iter()
        .map(collect_task)
        .collect();

    let mut camera = Device::new(2, "Camera Module");
    camera.status = DeviceStatus::Offline;

    let light = Device::new(3, "Light Controller");

    vec![sensor, camera, light]
}

impl DeviceStore {
    /// Create a store pre-populated with the demo devices
    pub fn with_demo_data() -> Self {
        Self::from_devices(demo_devices())
    }
}

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod response;
pub mod types;

pub use response::{
    InstanceMonitoring, InstanceStateChange, InstanceStateValue, MonitoringResponse,
    MonitoringValue, StartInstancesResponse, StopInstancesResponse,
};
pub use types::*;

//! Typed views over the provider responses the state oracle inspects.
//!
//! Only the fields needed to read a state are modelled; the raw JSON is
//! kept separately for logging.

use serde::{Deserialize, Serialize};

use crate::types::StateToken;

/// `{ "Code": 16, "Name": "running" }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStateValue {
    #[serde(default)]
    pub code: Option<u16>,
    pub name: StateToken,
}

/// One entry of `StartingInstances` / `StoppingInstances`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStateChange {
    pub instance_id: String,
    pub current_state: InstanceStateValue,
    #[serde(default)]
    pub previous_state: Option<InstanceStateValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StartInstancesResponse {
    #[serde(default)]
    pub starting_instances: Vec<InstanceStateChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StopInstancesResponse {
    #[serde(default)]
    pub stopping_instances: Vec<InstanceStateChange>,
}

/// `{ "State": "pending" }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringValue {
    pub state: StateToken,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceMonitoring {
    pub instance_id: String,
    pub monitoring: MonitoringValue,
}

/// Shared shape of `MonitorInstances` and `UnmonitorInstances` responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoringResponse {
    #[serde(default)]
    pub instance_monitorings: Vec<InstanceMonitoring>,
}

impl StartInstancesResponse {
    #[must_use]
    pub fn current_states(&self) -> Vec<StateToken> {
        self.starting_instances
            .iter()
            .map(|i| i.current_state.name)
            .collect()
    }
}

impl StopInstancesResponse {
    #[must_use]
    pub fn current_states(&self) -> Vec<StateToken> {
        self.stopping_instances
            .iter()
            .map(|i| i.current_state.name)
            .collect()
    }
}

impl MonitoringResponse {
    #[must_use]
    pub fn current_states(&self) -> Vec<StateToken> {
        self.instance_monitorings
            .iter()
            .map(|m| m.monitoring.state)
            .collect()
    }
}

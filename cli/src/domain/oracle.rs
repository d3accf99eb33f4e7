//! Success-state oracle: decides whether a returned provider response shows
//! the operation was accepted.

use ec2ops_common::{
    MonitoringResponse, OperationKind, StartInstancesResponse, StateToken, StopInstancesResponse,
};
use serde_json::Value;

use crate::domain::operation::{OperationSpec, SuccessRule};

/// Verdict on a response that came back without a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Judgement {
    Accepted,
    /// The response carried no state from the expected set. The observed
    /// states are kept for diagnostics only; they are never shown.
    Rejected { observed: Vec<StateToken> },
}

/// Read the normalized state tokens out of a response.
///
/// A response that does not have the expected shape yields no tokens.
#[must_use]
pub fn observed_states(kind: OperationKind, response: &Value) -> Vec<StateToken> {
    let parsed = match kind {
        OperationKind::Start => serde_json::from_value::<StartInstancesResponse>(response.clone())
            .map(|r| r.current_states()),
        OperationKind::Stop => serde_json::from_value::<StopInstancesResponse>(response.clone())
            .map(|r| r.current_states()),
        OperationKind::EnableMonitoring | OperationKind::DisableMonitoring => {
            serde_json::from_value::<MonitoringResponse>(response.clone())
                .map(|r| r.current_states())
        }
        OperationKind::Info | OperationKind::Reboot => Ok(Vec::new()),
    };
    parsed.unwrap_or_default()
}

/// Apply the operation's success rule to a response.
#[must_use]
pub fn judge(spec: &OperationSpec, response: &Value) -> Judgement {
    match spec.rule {
        SuccessRule::NoFault => Judgement::Accepted,
        SuccessRule::StateIn(expected) => {
            let observed = observed_states(spec.kind, response);
            if observed.iter().any(|s| expected.contains(s)) {
                Judgement::Accepted
            } else {
                Judgement::Rejected { observed }
            }
        }
    }
}

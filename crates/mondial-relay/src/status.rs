//! Classification of the carrier's embedded status list
//!
//! A 200 answer can still carry a rejection: any Error-level status invalidates the
//! whole shipment. Statuses are walked in order, warnings are logged and kept, and the
//! first error stops the walk.

use log::{error, info, warn};

use crate::types::{ApiStatus, StatusLevel};
use crate::{MondialRelayError, Result};

/// Carrier-level verdict on a request that made it through transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarrierOutcome {
    /// No Error-level status; the non-fatal statuses seen are kept
    Accepted { warnings: Vec<ApiStatus> },
    /// First Error-level status in list order
    Rejected(ApiStatus),
}

impl CarrierOutcome {
    pub fn into_result(self) -> Result<Vec<ApiStatus>> {
        match self {
            Self::Accepted { warnings } => Ok(warnings),
            Self::Rejected(status) => Err(MondialRelayError::CarrierRejected {
                code: status.code,
                message: status.message,
            }),
        }
    }
}

pub fn classify(statuses: &[ApiStatus]) -> CarrierOutcome {
    let mut warnings = Vec::new();
    for status in statuses {
        match &status.level {
            StatusLevel::Error => {
                error!("Status Code: {}, Message: {}", status.code, status.message);
                return CarrierOutcome::Rejected(status.clone());
            }
            StatusLevel::Warning => {
                warn!("Status Code: {}, Message: {}", status.code, status.message);
            }
            StatusLevel::Other(level) => {
                info!(
                    "Status Code: {}, Level: {}, Message: {}",
                    status.code, level, status.message
                );
            }
        }
        warnings.push(status.clone());
    }
    CarrierOutcome::Accepted { warnings }
}

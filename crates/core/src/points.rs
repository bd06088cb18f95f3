//! The two-phase points adjustment flow.
//!
//! The backend separates writes from reads: a transaction POST moves the
//! balance, and only a fresh customer read reports where it landed. The flow
//! therefore runs write-then-confirm, and the response balance always comes
//! from the confirmatory read, never from gateway arithmetic.
//!
//! The two phases fail differently. A write failure means nothing happened.
//! A confirm failure means the points already moved but the caller gets an
//! error anyway; [`AdjustmentError`] keeps the phases apart so the API layer
//! and the logs can tell which one it was.

use std::sync::Arc;

use pointsbridge_types::transactions::{PointsAdjustmentResponse, PointsTransaction};
use tracing::{debug, warn};

use crate::backend::{BackendError, RewardsBackend};

/// Phase-tagged failure of the adjustment flow.
#[derive(thiserror::Error, Debug)]
pub enum AdjustmentError {
    #[error("Failed to record transaction: {0}")]
    Write(BackendError),

    #[error("Failed to confirm balance after write: {0}")]
    Confirm(BackendError),
}

/// A points adjustment ready to execute.
///
/// Construction fails on a zero delta, so an instance always represents a
/// real movement.
#[derive(Debug, Clone)]
pub struct PointsAdjustment {
    transaction: PointsTransaction,
    requested_delta: i64,
}

impl PointsAdjustment {
    /// Build the flow from the caller's signed delta. `None` means the delta
    /// was zero and nothing should reach the backend.
    pub fn new(customer_id: String, points_delta: i64, reason: String) -> Option<Self> {
        let transaction = PointsTransaction::from_delta(customer_id, points_delta, reason)?;
        Some(Self {
            transaction,
            requested_delta: points_delta,
        })
    }

    /// Run write-then-confirm against the backend.
    pub async fn execute(
        self,
        backend: Arc<dyn RewardsBackend>,
    ) -> Result<PointsAdjustmentResponse, AdjustmentError> {
        let customer_id = self.transaction.customer_id.clone();

        backend
            .submit_transaction(&self.transaction)
            .await
            .map_err(AdjustmentError::Write)?;
        debug!(
            "Recorded {} of {} points for customer {}",
            self.transaction.kind.as_str(),
            self.transaction.points_amount,
            customer_id
        );

        let customer = match backend.fetch_customer(&customer_id).await {
            Ok(customer) => customer,
            Err(e) => {
                warn!(
                    "Transaction for customer {} recorded but balance confirmation failed: {}",
                    customer_id, e
                );
                return Err(AdjustmentError::Confirm(e));
            }
        };

        Ok(PointsAdjustmentResponse {
            customer_id: customer.customer_id,
            new_current_available_points: customer.current_available_points,
            points_delta: self.requested_delta,
        })
    }
}

//! The backend's two-sided transaction model.
//!
//! The public API takes a single signed `pointsDelta`; the backend wants an
//! unsigned amount plus a transaction type. [`PointsTransaction::from_delta`]
//! is the one place that conversion happens:
//! - delta > 0 becomes an `ADJUST` (credit) of that magnitude
//! - delta < 0 becomes a `REDEEM` (debit) of the absolute value
//! - delta == 0 is refused outright, before any backend call

use serde::{Deserialize, Serialize};

/// Backend transaction types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Credits points to the customer
    Adjust,
    /// Debits points from the customer
    Redeem,
}

impl TransactionKind {
    /// Wire name as it appears in backend XML documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Adjust => "ADJUST",
            TransactionKind::Redeem => "REDEEM",
        }
    }
}

/// One points movement, built from the public API's signed delta.
///
/// Held only for the duration of a single request; the gateway keeps no
/// transaction history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsTransaction {
    pub customer_id: String,
    pub kind: TransactionKind,
    /// Magnitude of the movement; the sign lives in `kind`.
    pub points_amount: u64,
    pub description: String,
}

impl PointsTransaction {
    /// Split a signed delta into kind and magnitude. Returns `None` for a
    /// zero delta.
    pub fn from_delta(customer_id: String, delta: i64, description: String) -> Option<Self> {
        let kind = match delta {
            0 => return None,
            d if d > 0 => TransactionKind::Adjust,
            _ => TransactionKind::Redeem,
        };
        Some(Self {
            customer_id,
            kind,
            points_amount: delta.unsigned_abs(),
            description,
        })
    }
}

/// Request body for `POST /api/v2/customers/{id}/reward-points`.
///
/// A missing `pointsDelta` binds to zero and is rejected by the zero-delta
/// rule; `reason` is optional free text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsAdjustmentRequest {
    #[serde(default)]
    pub points_delta: i64,
    #[serde(default)]
    pub reason: String,
}

/// Response body for a successful points adjustment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsAdjustmentResponse {
    pub customer_id: String,
    /// Balance reported by the confirmatory read, never computed gateway-side
    pub new_current_available_points: u64,
    /// The delta exactly as requested
    pub points_delta: i64,
}

/// Body of `GET /api/v2/customers/{id}/reward-points`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBalanceResponse {
    pub customer_id: String,
    pub current_available_points: u64,
}

//! The seam between the gateway and the legacy rewards system.
//!
//! Everything the gateway needs from the backend fits in four operations, so
//! they live behind the [`RewardsBackend`] trait: the HTTP implementation in
//! [`http`] is the production path, and tests substitute an in-memory fake.
//! A caching or server-side-filtering implementation can slot in later
//! without touching the API layer.

pub mod http;
pub mod xml;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use pointsbridge_types::customers::{CreateCustomerRequest, Customer};
use pointsbridge_types::transactions::PointsTransaction;

/// Failures at the backend boundary.
///
/// `NotFound` and `Duplicate` are the two backend statuses with dedicated
/// client-facing treatment; everything else surfaces as a generic internal
/// error once it reaches the API layer.
#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("Customer not found on backend")]
    NotFound,

    #[error("Backend reports a customer with this email already exists")]
    Duplicate,

    #[error("Backend returned {status} on {operation}")]
    UnexpectedStatus {
        operation: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to contact backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode backend XML: {0}")]
    DecodeFailed(#[from] quick_xml::DeError),

    #[error("Failed to encode backend XML: {0}")]
    EncodeFailed(#[from] quick_xml::SeError),
}

/// Operations the legacy rewards system exposes.
#[async_trait]
pub trait RewardsBackend: Send + Sync {
    /// Fetch the entire customer collection. The backend offers no
    /// server-side filtering or paging, so this is the only list shape.
    async fn list_customers(&self) -> Result<Vec<Customer>, BackendError>;

    /// Fetch one customer. A backend 404 maps to [`BackendError::NotFound`].
    async fn fetch_customer(&self, customer_id: &str) -> Result<Customer, BackendError>;

    /// Create a customer. A backend 409 maps to [`BackendError::Duplicate`].
    async fn create_customer(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<Customer, BackendError>;

    /// Submit a points transaction. Success is judged on the HTTP status
    /// alone; the receipt body is only logged.
    async fn submit_transaction(&self, transaction: &PointsTransaction)
    -> Result<(), BackendError>;
}

//! Handlers for the customer and reward-point endpoints.
//!
//! Handlers stay thin: payload in, one call into the listing or points
//! module (or straight to the backend), payload out. Inbound payloads are
//! parsed tolerantly: query strings by hand with first-value-wins
//! semantics, POST bodies as JSON regardless of the Content-Type header.
//! Anything that still fails turns into the gateway's own envelope instead
//! of a framework default.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, RawQuery, State, rejection::BytesRejection},
    http::StatusCode,
};
use pointsbridge_types::customers::{CreateCustomerRequest, Customer, CustomersResponse};
use pointsbridge_types::transactions::{
    PointsAdjustmentRequest, PointsAdjustmentResponse, PointsBalanceResponse,
};
use url::form_urlencoded;

use crate::api::{AppState, error::ApiError};
use crate::listing::{self, CustomerFilter, PageWindow};
use crate::points::PointsAdjustment;

/// Query parameters of the list endpoint, pulled by hand from the raw query
/// string.
///
/// A repeated key keeps its first value and unknown keys are ignored.
/// `limit` and `offset` stay raw text on purpose: values that do not parse
/// fall back to defaults instead of rejecting the request.
#[derive(Debug, Default)]
struct ListCustomersQuery {
    first_name: Option<String>,
    last_name: Option<String>,
    email_address: Option<String>,
    phone_number: Option<String>,
    account_status: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

impl ListCustomersQuery {
    fn parse(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "firstName" => &mut params.first_name,
                "lastName" => &mut params.last_name,
                "emailAddress" => &mut params.email_address,
                "phoneNumber" => &mut params.phone_number,
                "accountStatus" => &mut params.account_status,
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

/// A blank parameter (a submitted empty form field, or a bare key) is the
/// same as an absent one: it builds no predicate.
fn nonempty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// GET /api/v2/customers
pub async fn list_customers(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<CustomersResponse>, ApiError> {
    let params = ListCustomersQuery::parse(query.as_deref().unwrap_or(""));
    let filter = CustomerFilter {
        first_name: nonempty(params.first_name),
        last_name: nonempty(params.last_name),
        email_address: nonempty(params.email_address),
        phone_number: nonempty(params.phone_number),
        account_status: nonempty(params.account_status),
    };
    let window = PageWindow::from_params(params.limit.as_deref(), params.offset.as_deref());

    let response = listing::list_customers(state.backend.as_ref(), &filter, window).await?;
    Ok(Json(response))
}

/// POST /api/v2/customers
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let request: CreateCustomerRequest = serde_json::from_slice(&payload?)?;
    let customer = state.backend.create_customer(&request).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/v2/customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.backend.fetch_customer(&customer_id).await?;
    Ok(Json(customer))
}

/// GET /api/v2/customers/{id}/reward-points
pub async fn get_reward_points(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<PointsBalanceResponse>, ApiError> {
    let customer = state.backend.fetch_customer(&customer_id).await?;
    Ok(Json(PointsBalanceResponse {
        customer_id: customer.customer_id,
        current_available_points: customer.current_available_points,
    }))
}

/// POST /api/v2/customers/{id}/reward-points
///
/// The write-then-confirm flow runs on its own task: a caller hanging up
/// must not cancel it between the write and the confirming read.
pub async fn adjust_reward_points(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Json<PointsAdjustmentResponse>, ApiError> {
    let request: PointsAdjustmentRequest = serde_json::from_slice(&payload?)?;
    let adjustment = PointsAdjustment::new(customer_id, request.points_delta, request.reason)
        .ok_or(ApiError::ZeroPointsDelta)?;

    let backend = state.backend.clone();
    let outcome = tokio::spawn(adjustment.execute(backend)).await??;
    Ok(Json(outcome))
}

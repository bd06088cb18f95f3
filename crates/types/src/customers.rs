//! Customer records and the bodies of the customer endpoints.
//!
//! Every field of a [`Customer`] is backend-owned: identifiers, registration
//! dates, loyalty tiers, and both point counters are assigned by the rewards
//! system and relayed verbatim. Dates travel as backend-formatted strings and
//! are never parsed gateway-side.
//!
//! Wire naming is camelCase, matching both the public JSON API and the
//! backend's XML element vocabulary.

use serde::{Deserialize, Serialize};

/// A customer record as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend-assigned identifier, immutable once created
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    /// Backend-formatted date string, relayed opaquely
    pub registration_date: String,
    pub loyalty_tier: String,
    pub total_lifetime_points: u64,
    pub current_available_points: u64,
    /// Free-form status string, e.g. "Active" or "Inactive"
    pub account_status: String,
}

/// Request body for creating a customer.
///
/// Absent fields forward to the backend as empty elements; required-field
/// validation is the backend's business, not the gateway's.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub phone_number: String,
}

/// Window metadata echoed back on list responses.
///
/// `total` counts the records that survived filtering, before the window was
/// applied, so callers can page without a separate count call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
}

/// Body of `GET /api/v2/customers`.
#[derive(Debug, Clone, Serialize)]
pub struct CustomersResponse {
    pub customers: Vec<Customer>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer {
            customer_id: "CUST-1001".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email_address: "ada@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            registration_date: "2024-03-15 10:22:00".to_string(),
            loyalty_tier: "Gold".to_string(),
            total_lifetime_points: 1200,
            current_available_points: 450,
            account_status: "Active".to_string(),
        }
    }

    #[test]
    fn test_customer_serializes_camel_case() {
        let json = serde_json::to_value(sample_customer()).unwrap();
        assert_eq!(json["customerId"], "CUST-1001");
        assert_eq!(json["emailAddress"], "ada@example.com");
        assert_eq!(json["totalLifetimePoints"], 1200);
        assert_eq!(json["currentAvailablePoints"], 450);
        assert_eq!(json["accountStatus"], "Active");
    }

    #[test]
    fn test_create_request_defaults_missing_fields() {
        let req: CreateCustomerRequest =
            serde_json::from_str(r#"{"firstName": "Ada", "emailAddress": "ada@example.com"}"#)
                .unwrap();
        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.last_name, "");
        assert_eq!(req.phone_number, "");
    }

    #[test]
    fn test_list_response_shape() {
        let body = CustomersResponse {
            customers: vec![sample_customer()],
            pagination: Pagination {
                offset: 0,
                limit: 25,
                total: 1,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["customers"][0]["customerId"], "CUST-1001");
        assert_eq!(json["pagination"]["offset"], 0);
        assert_eq!(json["pagination"]["limit"], 25);
        assert_eq!(json["pagination"]["total"], 1);
    }
}

//! Backend XML document shapes and their codecs.
//!
//! The legacy system speaks a fixed element vocabulary: `<customer>` records
//! with ten camelCase children, a `<customers>` list wrapper that also carries
//! a `<count>` child, and `<transaction>` documents in both directions. The
//! structs here mirror those documents one-to-one; conversions to and from the
//! gateway's own types live next to them so no other module touches raw XML.
//!
//! Decoding is strict about structure (malformed XML fails the request) but
//! tolerant of content: unknown elements are skipped and missing ones default,
//! matching how loosely the backend versions its documents. A list with zero
//! `<customer>` children decodes to an empty vector, never an error.

use pointsbridge_types::customers::{CreateCustomerRequest, Customer};
use pointsbridge_types::transactions::PointsTransaction;
use quick_xml::{DeError, SeError};
use serde::{Deserialize, Serialize};

/// Declaration prepended to every document the gateway sends.
const XML_PROLOGUE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// A `<customer>` element as the backend emits it.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "customer", rename_all = "camelCase", default)]
pub struct CustomerDocument {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub registration_date: String,
    pub loyalty_tier: String,
    pub total_lifetime_points: u64,
    pub current_available_points: u64,
    pub account_status: String,
}

impl From<CustomerDocument> for Customer {
    fn from(doc: CustomerDocument) -> Self {
        Customer {
            customer_id: doc.customer_id,
            first_name: doc.first_name,
            last_name: doc.last_name,
            email_address: doc.email_address,
            phone_number: doc.phone_number,
            registration_date: doc.registration_date,
            loyalty_tier: doc.loyalty_tier,
            total_lifetime_points: doc.total_lifetime_points,
            current_available_points: doc.current_available_points,
            account_status: doc.account_status,
        }
    }
}

/// The `<customers>` list wrapper. The backend writes a `<count>` child ahead
/// of the records; only the records are read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CustomerListDocument {
    #[serde(rename = "customer")]
    customer: Vec<CustomerDocument>,
}

/// The four-element `<customer>` document posted on creation. The backend
/// assigns everything else (id, tier, dates, counters) itself.
#[derive(Debug, Serialize)]
#[serde(rename = "customer", rename_all = "camelCase")]
struct NewCustomerDocument {
    first_name: String,
    last_name: String,
    email_address: String,
    phone_number: String,
}

/// The `<transaction>` document posted for a points movement.
#[derive(Debug, Serialize)]
#[serde(rename = "transaction", rename_all = "camelCase")]
struct TransactionDocument {
    customer_id: String,
    transaction_type: String,
    points_amount: u64,
    description: String,
}

/// The `<transaction>` receipt the backend answers a posted transaction with.
///
/// Only the fields worth logging are kept; the HTTP status alone decides
/// whether the write succeeded.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionReceiptDocument {
    pub transaction_id: String,
    pub status: String,
}

/// Decode a single `<customer>` document.
pub fn decode_customer(xml: &str) -> Result<Customer, DeError> {
    let doc: CustomerDocument = quick_xml::de::from_str(xml)?;
    Ok(doc.into())
}

/// Decode a `<customers>` list document. Zero records is a valid, empty list.
pub fn decode_customer_list(xml: &str) -> Result<Vec<Customer>, DeError> {
    let doc: CustomerListDocument = quick_xml::de::from_str(xml)?;
    Ok(doc.customer.into_iter().map(Customer::from).collect())
}

/// Best-effort decode of a transaction receipt, for logging only.
pub fn decode_transaction_receipt(xml: &str) -> Option<TransactionReceiptDocument> {
    quick_xml::de::from_str(xml).ok()
}

/// Encode the creation document, prologue included.
pub fn encode_new_customer(request: &CreateCustomerRequest) -> Result<String, SeError> {
    let doc = NewCustomerDocument {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email_address: request.email_address.clone(),
        phone_number: request.phone_number.clone(),
    };
    let body = quick_xml::se::to_string(&doc)?;
    Ok(format!("{}\n{}", XML_PROLOGUE, body))
}

/// Encode a points transaction document, prologue included.
pub fn encode_transaction(transaction: &PointsTransaction) -> Result<String, SeError> {
    let doc = TransactionDocument {
        customer_id: transaction.customer_id.clone(),
        transaction_type: transaction.kind.as_str().to_string(),
        points_amount: transaction.points_amount,
        description: transaction.description.clone(),
    };
    let body = quick_xml::se::to_string(&doc)?;
    Ok(format!("{}\n{}", XML_PROLOGUE, body))
}

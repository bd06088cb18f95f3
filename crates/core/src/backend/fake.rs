//! In-memory [`RewardsBackend`] used by tests.
//!
//! Seeded with a fixed customer set, it applies submitted transactions to its
//! own records so a confirmatory read reports the post-write balance, the way
//! the real backend does. Individual operations can be armed to fail.

use std::sync::Mutex;

use async_trait::async_trait;
use pointsbridge_types::customers::{CreateCustomerRequest, Customer};
use pointsbridge_types::transactions::{PointsTransaction, TransactionKind};

use super::{BackendError, RewardsBackend};

/// Failure an armed operation produces.
#[derive(Debug, Clone, Copy)]
pub enum ArmedFailure {
    NotFound,
    Duplicate,
    Unavailable,
}

impl ArmedFailure {
    fn into_error(self, operation: &'static str) -> BackendError {
        match self {
            ArmedFailure::NotFound => BackendError::NotFound,
            ArmedFailure::Duplicate => BackendError::Duplicate,
            ArmedFailure::Unavailable => BackendError::UnexpectedStatus {
                operation,
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

#[derive(Default)]
pub struct FakeBackend {
    customers: Mutex<Vec<Customer>>,
    submitted: Mutex<Vec<PointsTransaction>>,
    fail_list: Mutex<Option<ArmedFailure>>,
    fail_fetch: Mutex<Option<ArmedFailure>>,
    fail_create: Mutex<Option<ArmedFailure>>,
    fail_submit: Mutex<Option<ArmedFailure>>,
}

impl FakeBackend {
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: Mutex::new(customers),
            ..Default::default()
        }
    }

    pub fn arm_list_failure(self, failure: ArmedFailure) -> Self {
        *self.fail_list.lock().unwrap() = Some(failure);
        self
    }

    pub fn arm_fetch_failure(self, failure: ArmedFailure) -> Self {
        *self.fail_fetch.lock().unwrap() = Some(failure);
        self
    }

    pub fn arm_create_failure(self, failure: ArmedFailure) -> Self {
        *self.fail_create.lock().unwrap() = Some(failure);
        self
    }

    pub fn arm_submit_failure(self, failure: ArmedFailure) -> Self {
        *self.fail_submit.lock().unwrap() = Some(failure);
        self
    }

    /// Transactions recorded so far, in submission order.
    pub fn submitted(&self) -> Vec<PointsTransaction> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl RewardsBackend for FakeBackend {
    async fn list_customers(&self) -> Result<Vec<Customer>, BackendError> {
        if let Some(failure) = *self.fail_list.lock().unwrap() {
            return Err(failure.into_error("customer list"));
        }
        Ok(self.customers.lock().unwrap().clone())
    }

    async fn fetch_customer(&self, customer_id: &str) -> Result<Customer, BackendError> {
        if let Some(failure) = *self.fail_fetch.lock().unwrap() {
            return Err(failure.into_error("customer fetch"));
        }
        self.customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.customer_id == customer_id)
            .cloned()
            .ok_or(BackendError::NotFound)
    }

    async fn create_customer(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<Customer, BackendError> {
        if let Some(failure) = *self.fail_create.lock().unwrap() {
            return Err(failure.into_error("customer create"));
        }
        let mut customers = self.customers.lock().unwrap();
        if customers
            .iter()
            .any(|c| c.email_address == request.email_address)
        {
            return Err(BackendError::Duplicate);
        }
        // new customers start out the way the real backend creates them
        let customer = Customer {
            customer_id: format!("CUST-{}", 1000 + customers.len() + 1),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email_address: request.email_address.clone(),
            phone_number: request.phone_number.clone(),
            registration_date: "2025-06-01 00:00:00".to_string(),
            loyalty_tier: "Bronze".to_string(),
            total_lifetime_points: 0,
            current_available_points: 0,
            account_status: "Active".to_string(),
        };
        customers.push(customer.clone());
        Ok(customer)
    }

    async fn submit_transaction(
        &self,
        transaction: &PointsTransaction,
    ) -> Result<(), BackendError> {
        if let Some(failure) = *self.fail_submit.lock().unwrap() {
            return Err(failure.into_error("transaction submit"));
        }
        let mut customers = self.customers.lock().unwrap();
        if let Some(customer) = customers
            .iter_mut()
            .find(|c| c.customer_id == transaction.customer_id)
        {
            match transaction.kind {
                TransactionKind::Adjust => {
                    customer.current_available_points += transaction.points_amount;
                    customer.total_lifetime_points += transaction.points_amount;
                }
                TransactionKind::Redeem => {
                    customer.current_available_points = customer
                        .current_available_points
                        .saturating_sub(transaction.points_amount);
                }
            }
        }
        self.submitted.lock().unwrap().push(transaction.clone());
        Ok(())
    }
}

//! reqwest-backed implementation of [`RewardsBackend`].
//!
//! One client is built at startup and pools connections for the life of the
//! process. Every request carries basic auth from the gateway configuration;
//! POST bodies go out as `application/xml`. The timeout bounds each outbound
//! call individually, so the two-call points flow can take up to twice that
//! in the worst case.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use pointsbridge_types::config::GatewayConfig;
use pointsbridge_types::customers::{CreateCustomerRequest, Customer};
use pointsbridge_types::transactions::PointsTransaction;
use tracing::{debug, warn};

use super::{BackendError, RewardsBackend, xml};

/// Per-call timeout on outbound backend requests.
const BACKEND_TIMEOUT: Duration = Duration::from_secs(60);

const XML_CONTENT_TYPE: &str = "application/xml";

/// Talks to the legacy rewards system over HTTP with basic auth.
pub struct HttpRewardsBackend {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpRewardsBackend {
    pub fn new(config: GatewayConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(BACKEND_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    /// Append an endpoint path to the configured base URL. The base is
    /// normalized to end with a slash, so plain concatenation keeps the
    /// backend's service prefix intact.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.backend_base_url, path)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).basic_auth(
            &self.config.backend_username,
            Some(&self.config.backend_password),
        )
    }

    fn post_xml(&self, url: &str, body: String) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .basic_auth(
                &self.config.backend_username,
                Some(&self.config.backend_password),
            )
            .header(reqwest::header::CONTENT_TYPE, XML_CONTENT_TYPE)
            .body(body)
    }
}

#[async_trait]
impl RewardsBackend for HttpRewardsBackend {
    async fn list_customers(&self) -> Result<Vec<Customer>, BackendError> {
        let url = self.endpoint("customers");
        let response = self.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(BackendError::UnexpectedStatus {
                operation: "customer list",
                status: response.status(),
            });
        }

        let body = response.text().await?;
        Ok(xml::decode_customer_list(&body)?)
    }

    async fn fetch_customer(&self, customer_id: &str) -> Result<Customer, BackendError> {
        let url = self.endpoint(&format!("customers/{}", customer_id));
        let started = Instant::now();
        let response = self.get(&url).send().await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound);
        }
        if !status.is_success() {
            return Err(BackendError::UnexpectedStatus {
                operation: "customer fetch",
                status,
            });
        }
        debug!(elapsed_ms, "Fetched customer {} from backend", customer_id);

        let body = response.text().await?;
        Ok(xml::decode_customer(&body)?)
    }

    async fn create_customer(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<Customer, BackendError> {
        let url = self.endpoint("customers");
        let document = xml::encode_new_customer(request)?;
        let response = self.post_xml(&url, document).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::CONFLICT {
            return Err(BackendError::Duplicate);
        }
        // the backend answers creation with 201, older builds with 200
        if status != reqwest::StatusCode::CREATED && status != reqwest::StatusCode::OK {
            return Err(BackendError::UnexpectedStatus {
                operation: "customer create",
                status,
            });
        }

        let body = response.text().await?;
        Ok(xml::decode_customer(&body)?)
    }

    async fn submit_transaction(
        &self,
        transaction: &PointsTransaction,
    ) -> Result<(), BackendError> {
        let url = self.endpoint("transactions");
        let document = xml::encode_transaction(transaction)?;
        let started = Instant::now();
        let response = self.post_xml(&url, document).send().await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED && status != reqwest::StatusCode::OK {
            return Err(BackendError::UnexpectedStatus {
                operation: "transaction submit",
                status,
            });
        }

        // receipt is informational only, a parse failure never fails the write
        match response.text().await {
            Ok(receipt_xml) => match xml::decode_transaction_receipt(&receipt_xml) {
                Some(receipt) => debug!(
                    elapsed_ms,
                    "Backend accepted transaction {} with status {}",
                    receipt.transaction_id,
                    receipt.status
                ),
                None => debug!(elapsed_ms, "Backend accepted transaction, receipt unreadable"),
            },
            Err(e) => warn!("Failed to read transaction receipt body: {}", e),
        }

        Ok(())
    }
}

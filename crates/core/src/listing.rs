//! List emulation over a backend that can only return everything.
//!
//! The legacy system has no server-side filtering or paging, so every list
//! call fetches the full collection, filters it in memory, and windows the
//! survivors. The reported `total` always counts the filtered records before
//! the window is applied, which is what lets callers page.
//!
//! Each call costs a full backend round trip plus an O(N) scan. That is
//! acceptable at current collection sizes; a caching [`RewardsBackend`]
//! implementation is the upgrade path if it stops being acceptable.

use pointsbridge_types::customers::{Customer, CustomersResponse, Pagination};

use crate::backend::{BackendError, RewardsBackend};

/// Window size when `limit` is absent, unparseable, or zero.
pub const DEFAULT_PAGE_LIMIT: usize = 25;

/// Optional predicates applied to the full collection, AND-combined.
///
/// Text fields match on case-insensitive substring; `account_status` matches
/// on case-insensitive equality. An absent predicate matches everything.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub account_status: Option<String>,
}

impl CustomerFilter {
    pub fn matches(&self, customer: &Customer) -> bool {
        contains_fold(&customer.first_name, self.first_name.as_deref())
            && contains_fold(&customer.last_name, self.last_name.as_deref())
            && contains_fold(&customer.email_address, self.email_address.as_deref())
            && contains_fold(&customer.phone_number, self.phone_number.as_deref())
            && equals_fold(&customer.account_status, self.account_status.as_deref())
    }
}

fn contains_fold(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

fn equals_fold(value: &str, expected: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(expected) => value.to_lowercase() == expected.to_lowercase(),
    }
}

/// Offset/limit window resolved from raw query values.
///
/// Parsing is deliberately forgiving: anything that does not parse as a
/// non-negative integer falls back to its default, and a zero `limit` means
/// "use the default". Callers never see a parameter error from this path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageWindow {
    pub fn from_params(limit: Option<&str>, offset: Option<&str>) -> Self {
        let mut window = Self::default();
        if let Some(parsed) = limit.and_then(|v| v.parse::<usize>().ok()) {
            if parsed > 0 {
                window.limit = parsed;
            }
        }
        if let Some(parsed) = offset.and_then(|v| v.parse::<usize>().ok()) {
            window.offset = parsed;
        }
        window
    }
}

/// Window a filtered collection. An offset past the end yields an empty page
/// with `total` still reported.
pub fn paginate(customers: Vec<Customer>, window: PageWindow) -> CustomersResponse {
    let total = customers.len();
    let start = window.offset.min(total);
    let end = window.offset.saturating_add(window.limit).min(total);
    CustomersResponse {
        customers: customers[start..end].to_vec(),
        pagination: Pagination {
            offset: window.offset,
            limit: window.limit,
            total,
        },
    }
}

/// Fetch, filter, window. The one list operation the public API exposes.
pub async fn list_customers(
    backend: &dyn RewardsBackend,
    filter: &CustomerFilter,
    window: PageWindow,
) -> Result<CustomersResponse, BackendError> {
    let all = backend.list_customers().await?;
    let filtered: Vec<Customer> = all.into_iter().filter(|c| filter.matches(c)).collect();
    Ok(paginate(filtered, window))
}

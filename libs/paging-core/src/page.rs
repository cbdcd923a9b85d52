use serde::{Deserialize, Serialize};

use crate::{DEFAULT_LIMIT, DEFAULT_SKIP};

/// Navigation links and page counts for one window of a record set.
///
/// Wire names follow the envelope contract: `previous`/`next` are omitted on
/// the first/last page, `records_on_page` serializes as `limit`.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub first: String,
    pub last: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub total_records: u64,
    /// Records actually present on the current page.
    #[serde(rename = "limit")]
    pub records_on_page: u64,
    pub pages: u64,
    /// 1-based page index; 0 when `skip` points past the record set.
    pub current_page: u64,
}

/// `skip`/`limit` query parameters with their documented defaults.
///
/// Deserializable straight from a query string, e.g. via
/// `axum::extract::Query<PageParams>`.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_skip")]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl PageParams {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_skip() -> u64 {
    DEFAULT_SKIP
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Uniform JSON envelope for every endpoint.
///
/// List endpoints set `count` to the total number of matching rows
/// (ignoring pagination); single-resource endpoints leave it unset.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub count: Option<i64>,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            status: true,
            count: None,
            data,
            message,
            errors: None,
        }
    }

    /// Envelope for paginated list responses.
    pub fn list(count: i64, data: Vec<T>) -> ApiResponse<Vec<T>> {
        ApiResponse {
            status: true,
            count: Some(count),
            data: Some(data),
            message: None,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            status: false,
            count: None,
            data: None,
            message,
            errors,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Standard query parameters for all list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub size: i64,

    /// Optional free-text search term
    pub search: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl ListQuery {
    /// Calculate SQL OFFSET from page number
    pub fn offset(&self) -> i64 {
        // Saturate so an absurdly large page degrades to an empty page
        // instead of wrapping into a negative OFFSET.
        (self.page.max(1) - 1).saturating_mul(self.limit())
    }

    /// Get clamped page size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_for_first_page() {
        let query = ListQuery::default();
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn offset_advances_with_page() {
        let query = ListQuery {
            page: 3,
            size: 20,
            search: None,
        };
        assert_eq!(query.offset(), 40);
        assert_eq!(query.limit(), 20);
    }

    #[test]
    fn page_and_size_below_one_fall_back_to_defaults() {
        let query = ListQuery {
            page: 0,
            size: -5,
            search: None,
        };
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 1);
    }

    #[test]
    fn offset_saturates_for_huge_page_numbers() {
        let query = ListQuery {
            page: i64::MAX,
            size: 100,
            search: None,
        };
        assert_eq!(query.offset(), i64::MAX);
    }

    #[test]
    fn size_is_clamped_to_maximum() {
        let query = ListQuery {
            page: 2,
            size: 10_000,
            search: None,
        };
        assert_eq!(query.limit(), MAX_PAGE_SIZE);
        assert_eq!(query.offset(), MAX_PAGE_SIZE);
    }
}

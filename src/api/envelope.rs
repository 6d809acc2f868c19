//! Response envelope `{success, data, pagination?, message?}`.
//!
//! Parsing turns the loosely-typed body into either a typed payload or an
//! [`ApiError`], so downstream code never sees a partial shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

/// Server-authoritative paging cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPagination")]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
    pub limit: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 0,
            total_items: 0,
            has_next: false,
            has_prev: false,
            limit: None,
        }
    }
}

impl Pagination {
    /// Cursor for an unpaginated response holding `len` items.
    pub fn single_page(len: usize) -> Self {
        Self {
            page: 1,
            total_pages: if len == 0 { 0 } else { 1 },
            total_items: len as u64,
            has_next: false,
            has_prev: false,
            limit: None,
        }
    }
}

// Backends disagree on key names (`pages` vs `totalPages`, `hasNextPage` vs
// `hasNext`); accept all of them and derive the flags when absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPagination {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default, alias = "pages")]
    total_pages: Option<u32>,
    #[serde(default, alias = "total")]
    total_items: Option<u64>,
    #[serde(default, alias = "hasNextPage")]
    has_next: Option<bool>,
    #[serde(default, alias = "hasPrevPage")]
    has_prev: Option<bool>,
    #[serde(default)]
    limit: Option<u32>,
}

impl From<RawPagination> for Pagination {
    fn from(raw: RawPagination) -> Self {
        let page = raw.page.unwrap_or(1).max(1);
        let total_pages = raw.total_pages.unwrap_or(0);
        Self {
            page,
            total_pages,
            total_items: raw.total_items.unwrap_or(0),
            has_next: raw.has_next.unwrap_or(page < total_pages),
            has_prev: raw.has_prev.unwrap_or(page > 1),
            limit: raw.limit,
        }
    }
}

/// One page of a collection together with its cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<E> {
    pub items: Vec<E>,
    pub pagination: Pagination,
}

/// Raw server envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// Interprets a response body given its HTTP status.
    ///
    /// Non-2xx statuses and `success: false` become [`ApiError::Status`]
    /// carrying the server message when one is present. A 2xx body that is
    /// not a JSON object becomes [`ApiError::Malformed`].
    pub fn parse(status: u16, body: &[u8]) -> Result<Self, ApiError> {
        if !(200..300).contains(&status) {
            return Err(ApiError::Status {
                status,
                message: error_message(body),
            });
        }

        // 204 and empty bodies are legitimate for deletes.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Envelope::default());
        }

        let envelope: Envelope =
            serde_json::from_slice(body).map_err(|e| ApiError::Malformed {
                reason: format!("body is not a JSON envelope: {}", e),
            })?;

        if envelope.success == Some(false) {
            return Err(ApiError::Status {
                status,
                message: envelope.message,
            });
        }

        Ok(envelope)
    }

    /// Extracts a collection page. `data` must be an array of `E`.
    ///
    /// A response without `pagination` is treated as a single page.
    pub fn into_list<E: DeserializeOwned>(self) -> Result<ListPage<E>, ApiError> {
        let data = self.data.ok_or_else(|| ApiError::Malformed {
            reason: "missing data".to_string(),
        })?;
        let items: Vec<E> = serde_json::from_value(data).map_err(|e| ApiError::Malformed {
            reason: format!("data is not a list of entities: {}", e),
        })?;
        let pagination = self
            .pagination
            .unwrap_or_else(|| Pagination::single_page(items.len()));
        Ok(ListPage { items, pagination })
    }

    /// Extracts a single entity from `data`.
    pub fn into_entity<E: DeserializeOwned>(self) -> Result<E, ApiError> {
        let data = self.data.ok_or_else(|| ApiError::Malformed {
            reason: "missing data".to_string(),
        })?;
        serde_json::from_value(data).map_err(|e| ApiError::Malformed {
            reason: format!("data is not an entity: {}", e),
        })
    }
}

fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        #[serde(rename = "_id")]
        id: String,
    }

    #[test]
    fn pagination_accepts_short_keys() {
        let p: Pagination = serde_json::from_str(
            r#"{"page":2,"pages":3,"total":45,"hasNext":true,"hasPrev":true}"#,
        )
        .unwrap();
        assert_eq!(p.page, 2);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.total_items, 45);
        assert!(p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn pagination_derives_missing_flags() {
        let p: Pagination =
            serde_json::from_str(r#"{"page":3,"totalPages":3,"totalItems":25}"#).unwrap();
        assert!(!p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn non_2xx_carries_server_message() {
        let err = Envelope::parse(404, br#"{"success":false,"message":"Not found"}"#).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message(), "Not found");
    }

    #[test]
    fn non_2xx_with_html_body_has_no_message() {
        let err = Envelope::parse(502, b"<html>Bad gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 502, message: None }));
    }

    #[test]
    fn success_false_on_200_is_an_error() {
        let err = Envelope::parse(200, br#"{"success":false,"message":"Event is full"}"#)
            .unwrap_err();
        assert_eq!(err.user_message(), "Event is full");
    }

    #[test]
    fn missing_data_is_malformed() {
        let envelope = Envelope::parse(200, br#"{"success":true}"#).unwrap();
        let err = envelope.into_list::<Item>().unwrap_err();
        assert!(matches!(err, ApiError::Malformed { .. }));
    }

    #[test]
    fn list_without_pagination_is_single_page() {
        let envelope =
            Envelope::parse(200, br#"{"success":true,"data":[{"_id":"a"},{"_id":"b"}]}"#)
                .unwrap();
        let page = envelope.into_list::<Item>().unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination, Pagination::single_page(2));
    }

    #[test]
    fn empty_body_parses_to_empty_envelope() {
        let envelope = Envelope::parse(204, b"").unwrap();
        assert!(envelope.data.is_none());
    }
}

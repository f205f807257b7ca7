//! The AWX pagination envelope.
//!
//! Collection endpoints answer with
//! `{"count": N, "next": url|null, "previous": url|null, "results": [...]}`.
//! [`Page<T>`] decodes that envelope and implements `Deref<Target = [T]>`
//! so a page can be used like the slice of results it carries.
//!
//! Pages are never followed automatically. To walk a collection, feed
//! [`Page::next_page_query`] back into the next `list` call:
//!
//! ```rust,ignore
//! let teams = client.teams();
//! let mut query = None;
//! loop {
//!     let page = teams.list(query).await?;
//!     for team in page.iter() {
//!         println!("{:?}", team.name);
//!     }
//!     match page.next_page_query() {
//!         Some(next) => query = Some(next),
//!         None => break,
//!     }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// One page of a collection listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    pub count: u64,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page, in server order.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns `true` if the server reported a next page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if the server reported a previous page.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.previous.is_some()
    }

    /// Query parameters that fetch the next page, taken from `next`.
    ///
    /// A key repeated in the URL keeps only its last value.
    #[must_use]
    pub fn next_page_query(&self) -> Option<HashMap<String, String>> {
        self.next.as_deref().map(query_from_url)
    }

    /// Query parameters that fetch the previous page, taken from `previous`.
    #[must_use]
    pub fn prev_page_query(&self) -> Option<HashMap<String, String>> {
        self.previous.as_deref().map(query_from_url)
    }

    /// Consumes the page and returns its results.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Common parameters for collection listings.
///
/// Any AWX field lookup (`name`, `organization`, `name__icontains`, ...) can
/// be passed through `filters`.
///
/// # Example
///
/// ```rust
/// use awx_api::rest::ListParams;
///
/// let query = ListParams {
///     page_size: Some(50),
///     order_by: Some("-modified".to_string()),
///     ..Default::default()
/// }
/// .filter("organization", 1)
/// .into_query();
///
/// assert_eq!(query.get("page_size"), Some(&"50".to_string()));
/// assert_eq!(query.get("organization"), Some(&"1".to_string()));
/// assert!(!query.contains_key("page"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// Items per page (AWX caps this at 200 by default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    /// Sort field, prefixed with `-` for descending order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Free-text search across the resource's searchable fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Field lookups passed through verbatim.
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl ListParams {
    /// Adds a field lookup.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.insert(key.into(), value.to_string());
        self
    }

    /// Converts the parameters into a query map.
    #[must_use]
    pub fn into_query(self) -> HashMap<String, String> {
        let mut query: HashMap<String, String> = self.filters.into_iter().collect();
        if let Some(page) = self.page {
            query.insert("page".to_string(), page.to_string());
        }
        if let Some(page_size) = self.page_size {
            query.insert("page_size".to_string(), page_size.to_string());
        }
        if let Some(order_by) = self.order_by {
            query.insert("order_by".to_string(), order_by);
        }
        if let Some(search) = self.search {
            query.insert("search".to_string(), search);
        }
        query
    }
}

/// Extracts the decoded query string of a (relative or absolute) URL.
///
/// [`QueryParams`](crate::rest::QueryParams) holds one value per key, so a
/// repeated key (`id__in=1&id__in=2`, `or__name=a&or__name=b`) keeps only its
/// last value.
fn query_from_url(url: &str) -> HashMap<String, String> {
    let Some((_, query)) = url.split_once('?') else {
        return HashMap::new();
    };
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), |decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_decodes_envelope() {
        let page: Page<u64> = serde_json::from_value(json!({
            "count": 5,
            "next": "/api/v2/teams/?page=2",
            "previous": null,
            "results": [1, 2, 3]
        }))
        .unwrap();

        assert_eq!(page.count, 5);
        assert!(page.has_next_page());
        assert!(!page.has_prev_page());
        assert_eq!(page.len(), 3);
        assert_eq!(page[0], 1);
    }

    #[test]
    fn test_page_without_next_or_previous_decodes() {
        let page: Page<u64> = serde_json::from_value(json!({"count": 0, "results": []})).unwrap();
        assert!(page.is_empty());
        assert!(page.next_page_query().is_none());
    }

    #[test]
    fn test_page_requires_count_and_results() {
        assert!(serde_json::from_value::<Page<u64>>(json!({"count": 0})).is_err());
        assert!(serde_json::from_value::<Page<u64>>(json!({"results": []})).is_err());
        assert!(serde_json::from_value::<Page<u64>>(json!({})).is_err());
    }

    #[test]
    fn test_entity_body_is_not_a_page() {
        let result = serde_json::from_value::<Page<serde_json::Value>>(json!({
            "id": 5,
            "name": "ops"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_next_page_query_from_relative_url() {
        let page: Page<u64> = Page {
            count: 40,
            next: Some("/api/v2/teams/?page=2&page_size=20".to_string()),
            previous: None,
            results: vec![],
        };

        let query = page.next_page_query().unwrap();
        assert_eq!(query.get("page"), Some(&"2".to_string()));
        assert_eq!(query.get("page_size"), Some(&"20".to_string()));
    }

    #[test]
    fn test_next_page_query_decodes_values() {
        let page: Page<u64> = Page {
            count: 40,
            next: Some(
                "https://awx.example.com/api/v2/teams/?name__icontains=ops%20team&page=3"
                    .to_string(),
            ),
            previous: Some("https://awx.example.com/api/v2/teams/?page=1".to_string()),
            results: vec![],
        };

        let next = page.next_page_query().unwrap();
        assert_eq!(next.get("name__icontains"), Some(&"ops team".to_string()));
        assert_eq!(next.get("page"), Some(&"3".to_string()));

        let prev = page.prev_page_query().unwrap();
        assert_eq!(prev.get("page"), Some(&"1".to_string()));
    }

    #[test]
    fn test_next_page_query_without_query_string() {
        let page: Page<u64> = Page {
            next: Some("/api/v2/teams/".to_string()),
            ..Page::default()
        };

        assert_eq!(page.next_page_query(), Some(HashMap::new()));
    }

    #[test]
    fn test_repeated_query_key_keeps_last_value() {
        let page: Page<u64> = Page {
            next: Some("/api/v2/teams/?id__in=1&id__in=2&page=2".to_string()),
            ..Page::default()
        };

        let query = page.next_page_query().unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("id__in"), Some(&"2".to_string()));
    }

    #[test]
    fn test_list_params_into_query() {
        let query = ListParams {
            page: Some(2),
            search: Some("deploy".to_string()),
            ..Default::default()
        }
        .filter("name__icontains", "prod")
        .into_query();

        assert_eq!(query.len(), 3);
        assert_eq!(query.get("page"), Some(&"2".to_string()));
        assert_eq!(query.get("search"), Some(&"deploy".to_string()));
        assert_eq!(query.get("name__icontains"), Some(&"prod".to_string()));
    }

    #[test]
    fn test_list_params_serialize_matches_into_query() {
        let params = ListParams {
            page_size: Some(10),
            ..Default::default()
        }
        .filter("organization", 3);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({"page_size": 10, "organization": "3"}));
    }

    #[test]
    fn test_into_results_preserves_order() {
        let page = Page {
            count: 3,
            next: None,
            previous: None,
            results: vec!["c", "a", "b"],
        };

        assert_eq!(page.into_results(), vec!["c", "a", "b"]);
    }
}

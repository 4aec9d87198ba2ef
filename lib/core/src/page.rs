use serde::{Deserialize, Serialize};

/// Pagination envelope returned by every list endpoint.
///
/// Field names follow the backend wire format:
///
/// ```json
/// {"count": 3, "next": null, "previous": null, "results": [...]}
/// ```
///
/// `next`/`previous` carry the full URL of the adjacent page when one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of results across all pages.
    pub count: u64,

    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,

    /// Results on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Number of results on this page (not the total `count`).
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// Query parameters accepted by list endpoints.
///
/// `None` fields are skipped entirely so they never appear in the query
/// string; the struct can be handed straight to the transport's query encoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListQuery {
    /// Sort field; prefix with `-` for descending (e.g. `-created_at`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,

    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Full-text search query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_json_roundtrip() {
        let page = Page {
            count: 2,
            next: Some("http://localhost:8000/api/public_api/posts/?page=2".into()),
            previous: None,
            results: vec!["a".to_string(), "b".to_string()],
        };
        let json = serde_json::to_string(&page).unwrap();
        let back: Page<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(page, back);
    }

    #[test]
    fn page_accepts_null_links() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"count": 0, "next": null, "previous": null, "results": []}"#)
                .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn page_link_helpers() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"count": 30, "next": "http://x/?page=3", "previous": "http://x/?page=1", "results": [1, 2, 3]}"#,
        )
        .unwrap();
        assert_eq!(page.len(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn list_query_skips_none() {
        let query = ListQuery {
            search: Some("widget".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["search"], "widget");
    }

    #[test]
    fn list_query_default_is_empty() {
        let value = serde_json::to_value(ListQuery::default()).unwrap();
        assert!(value.as_object().unwrap().is_empty());
    }
}

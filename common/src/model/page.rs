use serde::{Deserialize, Serialize};

/// One page of a list endpoint: `{"results": [...], "count": n}`.
///
/// `count` is the total number of matches across all pages, not the length of
/// `results`. Extra keys such as `next`/`previous` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub count: u64,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: u64) -> Self {
        Self { results, count }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
}

impl ListQuery {
    pub fn new(page: u32, search: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            search: search.into(),
        }
    }

    /// Pairs ready to be appended to a request URL.
    pub fn params(&self) -> [(&'static str, String); 2] {
        [("page", self.page.to_string()), ("search", self.search.clone())]
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ignores_pagination_links() {
        let json = r#"{"count": 23, "next": "http://x/?page=2", "previous": null, "results": [1, 2, 3]}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 23);
        assert_eq!(page.results, vec![1, 2, 3]);
    }

    #[test]
    fn query_never_requests_page_zero() {
        let query = ListQuery::new(0, "kenya");
        assert_eq!(query.page, 1);
        assert_eq!(
            query.params(),
            [("page", "1".to_string()), ("search", "kenya".to_string())]
        );
    }
}

use serde::Serialize;

/// Parameters for `GET /search/companies`
///
/// # Example
///
/// ```rust
/// use companies_house_sdk::types::CompanySearchRequest;
///
/// let request = CompanySearchRequest::new("liberis")
///     .items_per_page(20)
///     .start_index(40);
/// assert_eq!(request.query, "liberis");
/// assert_eq!(request.items_per_page, Some(20));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanySearchRequest {
    /// Free text search term
    pub query: String,
    /// Page size; the registry default applies when unset
    pub items_per_page: Option<u32>,
    /// Zero-based offset of the first hit
    pub start_index: Option<u32>,
}

impl CompanySearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            items_per_page: None,
            start_index: None,
        }
    }

    pub fn items_per_page(mut self, items_per_page: u32) -> Self {
        self.items_per_page = Some(items_per_page);
        self
    }

    pub fn start_index(mut self, start_index: u32) -> Self {
        self.start_index = Some(start_index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_has_no_paging() {
        let request = CompanySearchRequest::new("acme");
        assert_eq!(request.query, "acme");
        assert!(request.items_per_page.is_none());
        assert!(request.start_index.is_none());
    }

    #[test]
    fn test_paging_setters() {
        let request = CompanySearchRequest::new("acme")
            .items_per_page(50)
            .start_index(100);
        assert_eq!(request.items_per_page, Some(50));
        assert_eq!(request.start_index, Some(100));
    }
}

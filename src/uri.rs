//! Request URI construction
//!
//! [`UriBuilder`] turns a typed request into the absolute URI to fetch.
//! The client facade only sees the trait, so tests can hand it a fixed URI.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;

use crate::error::CompaniesHouseError;
use crate::types::CompanySearchRequest;

/// Characters left unescaped in query values (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) const SEARCH_COMPANIES_PATH: &str = "/search/companies";

/// Builds the resource URI for a request of type `R`.
pub trait UriBuilder<R>: Send + Sync {
    fn build(&self, request: &R) -> Result<Url, CompaniesHouseError>;
}

impl<R, U: UriBuilder<R> + ?Sized> UriBuilder<R> for std::sync::Arc<U> {
    fn build(&self, request: &R) -> Result<Url, CompaniesHouseError> {
        (**self).build(request)
    }
}

/// URI builder for `GET /search/companies`
#[derive(Debug, Clone)]
pub struct SearchUriBuilder {
    base_url: String,
}

impl SearchUriBuilder {
    /// `base_url` is the API root, e.g. `https://api.companieshouse.gov.uk`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl UriBuilder<CompanySearchRequest> for SearchUriBuilder {
    fn build(&self, request: &CompanySearchRequest) -> Result<Url, CompaniesHouseError> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(CompaniesHouseError::Config(
                "search query must not be empty".to_string(),
            ));
        }

        let mut uri = format!(
            "{}{}?q={}",
            self.base_url,
            SEARCH_COMPANIES_PATH,
            utf8_percent_encode(query, QUERY_VALUE)
        );
        if let Some(items_per_page) = request.items_per_page {
            uri.push_str(&format!("&items_per_page={items_per_page}"));
        }
        if let Some(start_index) = request.start_index {
            uri.push_str(&format!("&start_index={start_index}"));
        }

        Url::parse(&uri).map_err(|e| {
            CompaniesHouseError::Config(format!("invalid search URI {uri:?}: {e}"))
        })
    }
}

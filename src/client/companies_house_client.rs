//! Companies House client facade

use log::debug;

use crate::error::CompaniesHouseError;
use crate::mapping::map_company_search;
use crate::transport::{HttpTransport, Transport};
use crate::types::{CompaniesHouseResponse, CompanySearchRequest, SearchResultPage};
use crate::uri::{SearchUriBuilder, UriBuilder};

/// Companies House API client
///
/// Builds the request URI, fetches it and maps the payload into domain
/// types. Both collaborators are injectable; [`CompaniesHouseClient::builder`]
/// wires the default reqwest transport and URI builder.
///
/// # Example
///
/// ```rust,ignore
/// use companies_house_sdk::CompaniesHouseClient;
/// use companies_house_sdk::types::CompanySearchRequest;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CompaniesHouseClient::builder().build()?;
///
///     let response = client
///         .search_companies(&CompanySearchRequest::new("liberis"))
///         .await?;
///     for hit in &response.data.companies {
///         println!("{} {} ({})", hit.company_number, hit.title, hit.company_status);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CompaniesHouseClient<U = SearchUriBuilder, T = HttpTransport> {
    uri_builder: U,
    transport: T,
}

impl CompaniesHouseClient {
    /// Create a new client builder
    pub fn builder() -> super::builder::CompaniesHouseClientBuilder {
        super::builder::CompaniesHouseClientBuilder::default()
    }
}

impl<U, T> CompaniesHouseClient<U, T> {
    pub fn new(uri_builder: U, transport: T) -> Self {
        Self {
            uri_builder,
            transport,
        }
    }

    pub fn uri_builder(&self) -> &U {
        &self.uri_builder
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<U, T> CompaniesHouseClient<U, T>
where
    U: UriBuilder<CompanySearchRequest>,
    T: Transport,
{
    /// Search companies by name or number
    ///
    /// # Errors
    /// - `CompaniesHouseError::Config` when the request cannot be turned into a URI
    /// - `CompaniesHouseError::Http` for network failures and non-2xx statuses
    /// - `CompaniesHouseError::Mapping` when the payload does not map
    pub async fn search_companies(
        &self,
        request: &CompanySearchRequest,
    ) -> Result<CompaniesHouseResponse<SearchResultPage>, CompaniesHouseError> {
        let uri = self.uri_builder.build(request)?;
        debug!("[CompaniesHouse] search companies: {}", uri.path());

        let raw = self.transport.get(&uri).await?;
        let page = map_company_search(&raw.body)?;

        debug!(
            "[CompaniesHouse] mapped {} of {} hits (page {})",
            page.companies.len(),
            page.total_results,
            page.page_number
        );

        let etag = raw.etag().map(str::to_string);
        Ok(CompaniesHouseResponse::new(page, etag, raw.status))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use http::StatusCode;
    use reqwest::Url;

    use super::*;
    use crate::error::{HttpError, MappingError};
    use crate::transport::{RawResponse, TransportFuture};

    struct FixedUriBuilder(Url);

    impl UriBuilder<CompanySearchRequest> for FixedUriBuilder {
        fn build(&self, _request: &CompanySearchRequest) -> Result<Url, CompaniesHouseError> {
            Ok(self.0.clone())
        }
    }

    struct StubTransport {
        response: RawResponse,
        requested: Mutex<Vec<Url>>,
    }

    impl StubTransport {
        fn new(response: RawResponse) -> Self {
            Self {
                response,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for StubTransport {
        fn get<'a>(&'a self, uri: &'a Url) -> TransportFuture<'a> {
            self.requested.lock().unwrap().push(uri.clone());
            let response = self.response.clone();
            Box::pin(async move { Ok(response) })
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn get<'a>(&'a self, _uri: &'a Url) -> TransportFuture<'a> {
            Box::pin(async {
                Err(CompaniesHouseError::from(HttpError::Status {
                    status: StatusCode::TOO_MANY_REQUESTS,
                    body: String::new(),
                }))
            })
        }
    }

    fn body() -> String {
        serde_json::json!({
            "etag": "body-etag",
            "items_per_page": 2,
            "kind": "search#companies",
            "page_number": 1,
            "start_index": 0,
            "total_results": 1,
            "items": [{
                "company_number": "01234567",
                "company_status": "liquidation",
                "company_type": "plc",
                "kind": "searchresults#company",
                "title": "ACME PLC"
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_search_fetches_uri_from_builder() {
        let uri = Url::parse("https://wibble.com/search/companies").unwrap();
        let mut raw = RawResponse::new(StatusCode::OK, body());
        raw.headers.insert(
            http::header::ETAG,
            http::HeaderValue::from_static("header-etag"),
        );

        let client =
            CompaniesHouseClient::new(FixedUriBuilder(uri.clone()), StubTransport::new(raw));
        let response = client
            .search_companies(&CompanySearchRequest::new("acme"))
            .await
            .unwrap();

        assert_eq!(*client.transport().requested.lock().unwrap(), vec![uri]);
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.etag.as_deref(), Some("header-etag"));
        assert_eq!(response.data.etag, "body-etag");
        assert_eq!(response.data.companies.len(), 1);
    }

    #[tokio::test]
    async fn test_uri_builder_error_skips_transport() {
        let transport = StubTransport::new(RawResponse::new(StatusCode::OK, body()));
        let client = CompaniesHouseClient::new(
            SearchUriBuilder::new("https://api.companieshouse.gov.uk"),
            transport,
        );

        let result = client
            .search_companies(&CompanySearchRequest::new(""))
            .await;

        assert!(matches!(result, Err(CompaniesHouseError::Config(_))));
        assert!(client.transport().requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mapping_failure_returns_no_partial_page() {
        let raw = RawResponse::new(StatusCode::OK, r#"{"etag": "x"}"#);
        let client = CompaniesHouseClient::new(
            FixedUriBuilder(Url::parse("https://wibble.com/search/companies").unwrap()),
            StubTransport::new(raw),
        );

        let err = client
            .search_companies(&CompanySearchRequest::new("acme"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CompaniesHouseError::Mapping(MappingError::MissingField { .. })
        ));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = CompaniesHouseClient::new(
            FixedUriBuilder(Url::parse("https://wibble.com/search/companies").unwrap()),
            FailingTransport,
        );

        let err = client
            .search_companies(&CompanySearchRequest::new("acme"))
            .await
            .unwrap_err();

        match err {
            CompaniesHouseError::Http(e) => {
                assert_eq!(e.status(), Some(StatusCode::TOO_MANY_REQUESTS))
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }
}

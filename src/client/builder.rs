use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Request as ReqwestRequest, Response as ReqwestResponse};
use tower::{Layer, Service};

use crate::error::CompaniesHouseError;
use crate::transport::{
    HttpTransport, MiddlewareExecutor, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::uri::SearchUriBuilder;

use super::CompaniesHouseClient;

/// Live Companies House public data API
pub const DEFAULT_BASE_URL: &str = "https://api.companieshouse.gov.uk";

type MiddlewareFuture =
    Pin<Box<dyn Future<Output = Result<ReqwestResponse, reqwest::Error>> + Send>>;

/// Builder for [`CompaniesHouseClient`] with the default transport and
/// URI builder.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use companies_house_sdk::CompaniesHouseClient;
///
/// let client = CompaniesHouseClient::builder()
///     .base_url("https://api.companieshouse.gov.uk")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// assert_eq!(client.uri_builder().base_url(), "https://api.companieshouse.gov.uk");
/// ```
#[must_use]
#[derive(Default)]
pub struct CompaniesHouseClientBuilder<M = ()> {
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    middleware: Option<M>,
}

impl<M> std::fmt::Debug for CompaniesHouseClientBuilder<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompaniesHouseClientBuilder")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("middleware", &self.middleware.as_ref().map(|_| ".."))
            .finish()
    }
}

impl<M> CompaniesHouseClientBuilder<M> {
    /// Set the API root
    ///
    /// Default: `<https://api.companieshouse.gov.uk>`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the total timeout for requests
    ///
    /// Default: 30 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Route every request through a tower layer wrapping [`HttpTransport`].
    pub fn with_middleware<M2>(self, middleware: M2) -> CompaniesHouseClientBuilder<M2>
    where
        M2: Layer<HttpTransport> + Clone + Send + Sync + 'static,
    {
        CompaniesHouseClientBuilder {
            base_url: self.base_url,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            middleware: Some(middleware),
        }
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `CompaniesHouseError::Config` if the base URL is not http(s),
    /// or `CompaniesHouseError::Http` if the HTTP client cannot be created.
    pub fn build(self) -> Result<CompaniesHouseClient, CompaniesHouseError>
    where
        M: Layer<HttpTransport> + Clone + Send + Sync + 'static,
        M::Service: Service<ReqwestRequest, Response = ReqwestResponse, Error = reqwest::Error>
            + Clone
            + Send
            + Sync
            + 'static,
        <M::Service as Service<ReqwestRequest>>::Future: Send + 'static,
    {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CompaniesHouseError::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let mut transport = HttpTransport::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        if let Some(middleware) = self.middleware {
            let service = middleware.layer(transport.clone());
            let executor = make_middleware_executor(service);
            transport = transport.with_middleware_executor(executor);
        }

        Ok(CompaniesHouseClient::new(
            SearchUriBuilder::new(base_url),
            transport,
        ))
    }
}

fn make_middleware_executor<S>(service: S) -> MiddlewareExecutor
where
    S: Service<ReqwestRequest, Response = ReqwestResponse, Error = reqwest::Error>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    let service = Arc::new(service);

    Arc::new(move |request: ReqwestRequest| -> MiddlewareFuture {
        let mut service = (*service).clone();
        Box::pin(async move { service.call(request).await })
    })
}

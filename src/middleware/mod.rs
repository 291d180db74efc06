//! Middleware for the HTTP transport.
//!
//! Layers wrap [`HttpTransport`](crate::transport::HttpTransport) as a tower
//! [`Service`] over `reqwest::Request`. Register one through
//! [`CompaniesHouseClientBuilder::with_middleware`](crate::client::CompaniesHouseClientBuilder::with_middleware).
//! Authentication is left to callers: a layer that sets the
//! `Authorization` header is all the registry needs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use companies_house_sdk::CompaniesHouseClient;
//! use companies_house_sdk::middleware::LoggingMiddleware;
//!
//! let client = CompaniesHouseClient::builder()
//!     .with_middleware(LoggingMiddleware::new().verbose())
//!     .build()?;
//! ```

// Re-export tower types for convenience
pub use tower::{Layer, Service, ServiceBuilder};

mod logging;

pub use logging::{LoggingMiddleware, LoggingMiddlewareService};

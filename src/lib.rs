//! Companies House SDK for Rust
//!
//! An async client for the UK Companies House public data API. The heart
//! of the crate is the mapping from the registry's JSON resources into
//! strongly typed domain values: kebab-case status and type strings become
//! enums, nested address/links/matches objects become value types, and
//! date-times become calendar dates.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use companies_house_sdk::CompaniesHouseClient;
//! use companies_house_sdk::types::CompanySearchRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CompaniesHouseClient::builder().build()?;
//!
//!     let request = CompanySearchRequest::new("liberis").items_per_page(20);
//!     let response = client.search_companies(&request).await?;
//!
//!     println!("{} results", response.data.total_results);
//!     for hit in &response.data.companies {
//!         println!("{} {} {}", hit.company_number, hit.title, hit.company_status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - Client facade and builder
//! - [`error`] - Error types
//! - [`mapping`] - Wire resources and their conversion into domain types
//! - [`middleware`] - Tower middleware for the HTTP transport
//! - [`transport`] - HTTP transport trait and reqwest implementation
//! - [`types`] - Domain types
//! - [`uri`] - Request URI construction
//!
//! ## Testing
//!
//! [`CompaniesHouseClient`] is generic over [`uri::UriBuilder`] and
//! [`transport::Transport`], so tests can substitute deterministic
//! stand-ins for both without touching the network.
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use companies_house_sdk::{CompaniesHouseError, MappingError};
//!
//! match result {
//!     Ok(response) => { /* handle success */ }
//!     Err(CompaniesHouseError::Mapping(MappingError::UnknownValue { field, value })) => {
//!         eprintln!("registry sent {value:?} for {field}");
//!     }
//!     Err(CompaniesHouseError::Http(e)) => {
//!         eprintln!("HTTP error: {}", e);
//!     }
//!     Err(e) => {
//!         eprintln!("Other error: {}", e);
//!     }
//! }
//! ```

pub mod client;
pub mod error;
pub mod mapping;
pub mod middleware;
pub mod transport;
pub mod types;
pub mod uri;

pub use client::{CompaniesHouseClient, CompaniesHouseClientBuilder};
pub use error::{CompaniesHouseError, HttpError, MappingError};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use uri::{SearchUriBuilder, UriBuilder};

//! Domain types for the Companies House API
//!
//! These are the strongly typed shapes callers work with. Wire formats
//! live next to their mappers in [`crate::mapping`].

pub mod address;
pub mod company_status;
pub mod company_type;
pub mod request;
pub mod response;
pub mod search;

pub use address::Address;
pub use company_status::CompanyStatus;
pub use company_type::CompanyType;
pub use request::CompanySearchRequest;
pub use response::CompaniesHouseResponse;
pub use search::{CompanyHit, Links, Matches, SearchResultPage};

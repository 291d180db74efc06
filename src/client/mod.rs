//! Companies House client module
//!
//! This module contains the [`CompaniesHouseClient`] facade and its builder.

mod companies_house_client;
pub use companies_house_client::CompaniesHouseClient;

mod builder;
pub use builder::{CompaniesHouseClientBuilder, DEFAULT_BASE_URL};

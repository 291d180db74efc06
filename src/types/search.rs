use chrono::NaiveDate;
use serde::Serialize;

use super::{Address, CompanyStatus, CompanyType};

/// One page of company search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultPage {
    pub etag: String,
    pub items_per_page: u32,
    pub kind: String,
    pub page_number: u32,
    pub start_index: u32,
    pub total_results: u64,
    /// Hits in the order the registry returned them
    pub companies: Vec<CompanyHit>,
}

/// A single company search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyHit {
    pub company_number: String,
    pub address: Address,
    pub company_status: CompanyStatus,
    pub company_type: CompanyType,
    pub date_of_cessation: Option<NaiveDate>,
    pub date_of_creation: Option<NaiveDate>,
    pub description: Option<String>,
    pub description_identifiers: Vec<String>,
    pub kind: String,
    pub links: Links,
    pub matches: Matches,
    pub snippet: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

/// Character positions of the search term inside the hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Matches {
    pub title: Vec<u32>,
    pub snippet: Vec<u32>,
}

//! Company search example for companies-house-sdk
//!
//! Run with: cargo run --example search_companies -- "liberis labs"

use companies_house_sdk::middleware::LoggingMiddleware;
use companies_house_sdk::types::CompanySearchRequest;
use companies_house_sdk::CompaniesHouseClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "liberis".to_string());

    let client = CompaniesHouseClient::builder()
        .with_middleware(LoggingMiddleware::new())
        .build()?;

    let request = CompanySearchRequest::new(query).items_per_page(10);
    let response = client.search_companies(&request).await?;
    let page = response.data;

    println!(
        "{} results, showing {} from {}",
        page.total_results,
        page.companies.len(),
        page.start_index
    );
    for hit in &page.companies {
        let created = hit
            .date_of_creation
            .map(|d| d.to_string())
            .unwrap_or_default();
        println!(
            "{:<10} {:<24} {:<22} {} {}",
            hit.company_number, hit.company_status, hit.company_type, created, hit.title
        );
    }

    Ok(())
}

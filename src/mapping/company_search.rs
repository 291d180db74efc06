//! Company search resource
//!
//! Wire shape of `GET /search/companies` and its conversion into
//! [`SearchResultPage`].

use log::warn;
use serde::Deserialize;

use super::{optional_date, required, Field};
use crate::error::MappingError;
use crate::types::{
    Address, CompanyHit, CompanyStatus, CompanyType, Links, Matches, SearchResultPage,
};

/// Search envelope as sent by the registry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanySearchResource {
    pub etag: Option<String>,
    pub items_per_page: Option<u32>,
    pub kind: Option<String>,
    pub page_number: Option<u32>,
    pub start_index: Option<u32>,
    pub total_results: Option<u64>,
    pub items: Option<Vec<CompanyResource>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyResource {
    pub company_number: Option<String>,
    pub address: Option<AddressResource>,
    pub company_status: Option<String>,
    pub company_type: Option<String>,
    pub date_of_cessation: Option<String>,
    pub date_of_creation: Option<String>,
    pub description: Option<String>,
    pub description_identifier: Option<Vec<String>>,
    pub kind: Option<String>,
    pub links: Option<LinksResource>,
    pub matches: Option<MatchesResource>,
    pub snippet: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressResource {
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub care_of: Option<String>,
    pub country: Option<String>,
    pub locality: Option<String>,
    pub po_box: Option<String>,
    pub postal_code: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinksResource {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchesResource {
    pub title: Option<Vec<u32>>,
    pub snippet: Option<Vec<u32>>,
}

/// Map a raw search response body.
///
/// # Example
///
/// ```rust
/// use companies_house_sdk::mapping::map_company_search;
/// use companies_house_sdk::types::CompanyStatus;
///
/// let body = r#"{
///     "etag": "abc",
///     "items_per_page": 20,
///     "kind": "search#companies",
///     "page_number": 1,
///     "start_index": 0,
///     "total_results": 1,
///     "items": [{
///         "company_number": "01234567",
///         "company_status": "administration",
///         "company_type": "ltd",
///         "kind": "searchresults#company",
///         "title": "ACME LIMITED"
///     }]
/// }"#;
///
/// let page = map_company_search(body).unwrap();
/// assert_eq!(page.etag, "abc");
/// assert_eq!(page.companies[0].company_status, CompanyStatus::Administration);
/// ```
pub fn map_company_search(body: &str) -> Result<SearchResultPage, MappingError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let resource: CompanySearchResource =
        serde_path_to_error::deserialize(&mut deserializer).map_err(shape_error)?;
    SearchResultPage::try_from(resource)
}

/// Map an already parsed search response.
pub fn map_company_search_value(
    value: serde_json::Value,
) -> Result<SearchResultPage, MappingError> {
    let resource: CompanySearchResource =
        serde_path_to_error::deserialize(value).map_err(shape_error)?;
    SearchResultPage::try_from(resource)
}

// Syntax errors and top-level mismatches have no field to blame.
fn shape_error(err: serde_path_to_error::Error<serde_json::Error>) -> MappingError {
    let field = err.path().to_string();
    let located = err.path().iter().next().is_some();
    let source = err.into_inner();
    if located && source.is_data() {
        MappingError::InvalidType { field, source }
    } else {
        MappingError::Json(source)
    }
}

impl TryFrom<CompanySearchResource> for SearchResultPage {
    type Error = MappingError;

    fn try_from(resource: CompanySearchResource) -> Result<Self, Self::Error> {
        let companies = resource
            .items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, item)| map_company(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            etag: required(resource.etag, Field::top("etag"))?,
            items_per_page: required(resource.items_per_page, Field::top("items_per_page"))?,
            kind: required(resource.kind, Field::top("kind"))?,
            page_number: required(resource.page_number, Field::top("page_number"))?,
            start_index: required(resource.start_index, Field::top("start_index"))?,
            total_results: required(resource.total_results, Field::top("total_results"))?,
            companies,
        })
    }
}

fn map_company(index: usize, item: CompanyResource) -> Result<CompanyHit, MappingError> {
    let field = |name| Field::item(index, name);

    let status = required(item.company_status, field("company_status"))?;
    let company_status =
        CompanyStatus::from_wire(&status).ok_or_else(|| MappingError::UnknownValue {
            field: field("company_status").path(),
            value: status,
        })?;

    let raw_type = required(item.company_type, field("company_type"))?;
    let company_type = CompanyType::from_wire_lossless(&raw_type);
    if company_type.is_unknown() {
        warn!(
            "[CompaniesHouse] unmapped company_type {:?} at {}",
            raw_type,
            field("company_type").path()
        );
    }

    let matches = item.matches.unwrap_or_default();

    Ok(CompanyHit {
        company_number: required(item.company_number, field("company_number"))?,
        address: item.address.map(Address::from).unwrap_or_default(),
        company_status,
        company_type,
        date_of_cessation: optional_date(item.date_of_cessation, field("date_of_cessation"))?,
        date_of_creation: optional_date(item.date_of_creation, field("date_of_creation"))?,
        description: item.description,
        description_identifiers: item.description_identifier.unwrap_or_default(),
        kind: required(item.kind, field("kind"))?,
        links: Links {
            self_link: item.links.and_then(|links| links.self_link),
        },
        matches: Matches {
            title: matches.title.unwrap_or_default(),
            snippet: matches.snippet.unwrap_or_default(),
        },
        snippet: item.snippet,
        title: required(item.title, field("title"))?,
    })
}

impl From<AddressResource> for Address {
    fn from(address: AddressResource) -> Self {
        Self {
            address_line_1: address.address_line_1,
            address_line_2: address.address_line_2,
            care_of: address.care_of,
            country: address.country,
            locality: address.locality,
            po_box: address.po_box,
            postal_code: address.postal_code,
            region: address.region,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn company(number: &str, status: &str, company_type: &str) -> serde_json::Value {
        json!({
            "company_number": number,
            "address": {
                "address_line_1": format!("{number} High Street"),
                "address_line_2": "Floor 2",
                "care_of": "The Secretary",
                "country": "United Kingdom",
                "locality": "Cardiff",
                "po_box": "PO 12",
                "postal_code": "CF14 3UZ",
                "region": "South Glamorgan"
            },
            "company_status": status,
            "company_type": company_type,
            "date_of_cessation": "2019-02-03T10:11:12Z",
            "date_of_creation": "2001-07-08",
            "description": format!("{number} - Incorporated on 8 July 2001"),
            "kind": "searchresults#company",
            "links": { "self": format!("/company/{number}") },
            "matches": { "title": [1, 4] },
            "snippet": "",
            "title": format!("COMPANY {number} LIMITED")
        })
    }

    fn envelope(items: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "etag": "abc",
            "items_per_page": 20,
            "kind": "search#companies",
            "page_number": 1,
            "start_index": 0,
            "total_results": items.len(),
            "items": items
        })
    }

    #[test]
    fn test_envelope_fields_copy_verbatim() {
        let page = map_company_search_value(envelope(Vec::new())).unwrap();
        assert_eq!(page.etag, "abc");
        assert_eq!(page.items_per_page, 20);
        assert_eq!(page.kind, "search#companies");
        assert_eq!(page.page_number, 1);
        assert_eq!(page.start_index, 0);
        assert_eq!(page.total_results, 0);
        assert!(page.companies.is_empty());
    }

    #[test]
    fn test_hit_fields_map() {
        let page = map_company_search_value(envelope(vec![company(
            "01234567",
            "dissolved",
            "private-unlimited",
        )]))
        .unwrap();

        let hit = &page.companies[0];
        assert_eq!(hit.company_number, "01234567");
        assert_eq!(hit.company_status, CompanyStatus::Dissolved);
        assert_eq!(hit.company_type, CompanyType::PrivateUnlimited);
        assert_eq!(hit.address.address_line_1.as_deref(), Some("01234567 High Street"));
        assert_eq!(hit.address.address_line_2.as_deref(), Some("Floor 2"));
        assert_eq!(hit.address.care_of.as_deref(), Some("The Secretary"));
        assert_eq!(hit.address.country.as_deref(), Some("United Kingdom"));
        assert_eq!(hit.address.locality.as_deref(), Some("Cardiff"));
        assert_eq!(hit.address.po_box.as_deref(), Some("PO 12"));
        assert_eq!(hit.address.postal_code.as_deref(), Some("CF14 3UZ"));
        assert_eq!(hit.address.region.as_deref(), Some("South Glamorgan"));
        assert_eq!(hit.date_of_cessation, NaiveDate::from_ymd_opt(2019, 2, 3));
        assert_eq!(hit.date_of_creation, NaiveDate::from_ymd_opt(2001, 7, 8));
        assert_eq!(
            hit.description.as_deref(),
            Some("01234567 - Incorporated on 8 July 2001")
        );
        assert_eq!(hit.kind, "searchresults#company");
        assert_eq!(hit.links.self_link.as_deref(), Some("/company/01234567"));
        assert_eq!(hit.matches.title, vec![1, 4]);
        assert!(hit.matches.snippet.is_empty());
        assert_eq!(hit.snippet.as_deref(), Some(""));
        assert_eq!(hit.title, "COMPANY 01234567 LIMITED");
    }

    #[test]
    fn test_every_status_maps_in_order() {
        let wire = [
            ("active", CompanyStatus::Active),
            ("dissolved", CompanyStatus::Dissolved),
            ("liquidation", CompanyStatus::Liquidation),
            ("receivership", CompanyStatus::Receivership),
            ("administration", CompanyStatus::Administration),
            ("voluntary-arrangement", CompanyStatus::VoluntaryArrangement),
            ("converted-closed", CompanyStatus::ConvertedClosed),
            ("insolvency-proceedings", CompanyStatus::InsolvencyProceedings),
        ];
        let items = wire
            .iter()
            .enumerate()
            .map(|(i, (status, _))| company(&format!("{i:08}"), status, "private-unlimited"))
            .collect();

        let page = map_company_search_value(envelope(items)).unwrap();

        assert_eq!(page.companies.len(), wire.len());
        for (i, (hit, (_, expected))) in page.companies.iter().zip(wire.iter()).enumerate() {
            assert_eq!(hit.company_number, format!("{i:08}"));
            assert_eq!(hit.company_status, *expected);
        }
    }

    #[test]
    fn test_unknown_status_fails_with_field_and_value() {
        let items = vec![
            company("00000001", "active", "ltd"),
            company("00000002", "open", "ltd"),
        ];

        let err = map_company_search_value(envelope(items)).unwrap_err();

        match err {
            MappingError::UnknownValue { field, value } => {
                assert_eq!(field, "items[1].company_status");
                assert_eq!(value, "open");
            }
            other => panic!("Expected UnknownValue, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_is_kept_verbatim() {
        let page = map_company_search_value(envelope(vec![company(
            "SL000001",
            "active",
            "scottish-partnership",
        )]))
        .unwrap();

        assert_eq!(
            page.companies[0].company_type,
            CompanyType::Unknown("scottish-partnership".to_string())
        );
    }

    #[test]
    fn test_missing_envelope_field_is_error() {
        let mut payload = envelope(Vec::new());
        payload.as_object_mut().unwrap().remove("etag");

        let err = map_company_search_value(payload).unwrap_err();
        assert!(matches!(err, MappingError::MissingField { ref field } if field == "etag"));
    }

    #[test]
    fn test_missing_items_is_empty_page() {
        let mut payload = envelope(Vec::new());
        payload.as_object_mut().unwrap().remove("items");

        let page = map_company_search_value(payload).unwrap();
        assert!(page.companies.is_empty());
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let mut payload = envelope(Vec::new());
        payload["items"] = serde_json::Value::Null;
        let page = map_company_search_value(payload).unwrap();
        assert!(page.companies.is_empty());

        let mut item = company("00000001", "active", "ltd");
        item["matches"] = json!({ "title": null, "snippet": null });
        item["description_identifier"] = serde_json::Value::Null;

        let page = map_company_search_value(envelope(vec![item])).unwrap();
        let hit = &page.companies[0];
        assert!(hit.matches.title.is_empty());
        assert!(hit.matches.snippet.is_empty());
        assert!(hit.description_identifiers.is_empty());
    }

    #[test]
    fn test_missing_item_field_names_path() {
        let mut item = company("00000001", "active", "ltd");
        item.as_object_mut().unwrap().remove("company_number");

        let err = map_company_search_value(envelope(vec![item])).unwrap_err();
        assert_eq!(err.field(), Some("items[0].company_number"));
    }

    #[test]
    fn test_absent_address_maps_to_empty() {
        let mut item = company("00000001", "active", "ltd");
        item.as_object_mut().unwrap().remove("address");
        item.as_object_mut().unwrap().remove("links");
        item.as_object_mut().unwrap().remove("matches");
        item.as_object_mut().unwrap().remove("date_of_cessation");

        let page = map_company_search_value(envelope(vec![item])).unwrap();
        let hit = &page.companies[0];
        assert!(hit.address.is_empty());
        assert!(hit.links.self_link.is_none());
        assert!(hit.matches.title.is_empty());
        assert!(hit.date_of_cessation.is_none());
    }

    #[test]
    fn test_partial_address_has_no_defaults() {
        let mut item = company("00000001", "active", "ltd");
        item["address"] = json!({ "postal_code": "SW1A 1AA" });

        let page = map_company_search_value(envelope(vec![item])).unwrap();
        let address = &page.companies[0].address;
        assert_eq!(address.postal_code.as_deref(), Some("SW1A 1AA"));
        assert!(address.address_line_1.is_none());
        assert!(address.country.is_none());
    }

    #[test]
    fn test_invalid_date_is_error() {
        let mut item = company("00000001", "active", "ltd");
        item["date_of_creation"] = json!("8th July");

        let err = map_company_search_value(envelope(vec![item])).unwrap_err();
        assert!(matches!(err, MappingError::InvalidDate { .. }));
        assert_eq!(err.value(), Some("8th July"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = map_company_search("<html>busy</html>").unwrap_err();
        assert!(matches!(err, MappingError::Json(_)));
        assert!(err.field().is_none());
    }

    #[test]
    fn test_wrong_shape_is_error() {
        let err = map_company_search(r#"{"items_per_page": "twenty"}"#).unwrap_err();
        assert!(matches!(err, MappingError::InvalidType { .. }));
        assert_eq!(err.field(), Some("items_per_page"));

        let err = map_company_search("42").unwrap_err();
        assert!(matches!(err, MappingError::Json(_)));
    }

    #[test]
    fn test_wrong_item_type_names_path() {
        let mut item = company("00000001", "active", "ltd");
        item["company_number"] = json!(12345678);

        let err = map_company_search_value(envelope(vec![item])).unwrap_err();
        assert!(matches!(err, MappingError::InvalidType { .. }));
        assert_eq!(err.field(), Some("items[0].company_number"));
        assert!(err.to_string().contains("12345678"));

        let mut item = company("00000001", "active", "ltd");
        item["matches"] = json!({ "title": ["one"] });
        let body = envelope(vec![company("00000000", "active", "ltd"), item]).to_string();

        let err = map_company_search(&body).unwrap_err();
        assert_eq!(err.field(), Some("items[1].matches.title[0]"));
    }

    #[test]
    fn test_description_identifier_passes_through() {
        let mut item = company("00000001", "active", "ltd");
        item["description_identifier"] = json!(["incorporated-on"]);

        let page = map_company_search_value(envelope(vec![item])).unwrap();
        assert_eq!(
            page.companies[0].description_identifiers,
            vec!["incorporated-on".to_string()]
        );
    }
}

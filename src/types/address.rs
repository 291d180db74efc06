use serde::Serialize;

/// Registered office address as returned in search results.
///
/// Every line is optional; the registry omits what it does not hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub care_of: Option<String>,
    pub country: Option<String>,
    pub locality: Option<String>,
    pub po_box: Option<String>,
    pub postal_code: Option<String>,
    pub region: Option<String>,
}

impl Address {
    /// Returns `true` when no line is populated.
    pub fn is_empty(&self) -> bool {
        self.address_line_1.is_none()
            && self.address_line_2.is_none()
            && self.care_of.is_none()
            && self.country.is_none()
            && self.locality.is_none()
            && self.po_box.is_none()
            && self.postal_code.is_none()
            && self.region.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address_is_empty() {
        assert!(Address::default().is_empty());
    }

    #[test]
    fn test_address_with_postcode_is_not_empty() {
        let address = Address {
            postal_code: Some("CF14 3UZ".to_string()),
            ..Address::default()
        };
        assert!(!address.is_empty());
    }
}

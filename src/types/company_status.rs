use std::fmt;

use serde::{Serialize, Serializer};

/// Company status as reported by the registry.
///
/// The vocabulary is closed: a wire value outside [`COMPANY_STATUSES`]
/// is a mapping error, not a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyStatus {
    Active,
    Dissolved,
    Liquidation,
    Receivership,
    Administration,
    VoluntaryArrangement,
    ConvertedClosed,
    InsolvencyProceedings,
}

/// Wire value to [`CompanyStatus`] lookup table.
pub const COMPANY_STATUSES: &[(&str, CompanyStatus)] = &[
    ("active", CompanyStatus::Active),
    ("dissolved", CompanyStatus::Dissolved),
    ("liquidation", CompanyStatus::Liquidation),
    ("receivership", CompanyStatus::Receivership),
    ("administration", CompanyStatus::Administration),
    ("voluntary-arrangement", CompanyStatus::VoluntaryArrangement),
    ("converted-closed", CompanyStatus::ConvertedClosed),
    ("insolvency-proceedings", CompanyStatus::InsolvencyProceedings),
];

impl CompanyStatus {
    /// Resolve a wire value. Matching is exact.
    pub fn from_wire(value: &str) -> Option<Self> {
        COMPANY_STATUSES
            .iter()
            .find(|(wire, _)| *wire == value)
            .map(|(_, status)| *status)
    }

    /// The kebab-case wire value for this status.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Dissolved => "dissolved",
            Self::Liquidation => "liquidation",
            Self::Receivership => "receivership",
            Self::Administration => "administration",
            Self::VoluntaryArrangement => "voluntary-arrangement",
            Self::ConvertedClosed => "converted-closed",
            Self::InsolvencyProceedings => "insolvency-proceedings",
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_wire())
    }
}

impl Serialize for CompanyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_row_resolves() {
        for (wire, status) in COMPANY_STATUSES {
            assert_eq!(CompanyStatus::from_wire(wire), Some(*status));
            assert_eq!(status.as_wire(), *wire);
        }
    }

    #[test]
    fn test_table_has_eight_statuses() {
        assert_eq!(COMPANY_STATUSES.len(), 8);
    }

    #[test]
    fn test_unknown_status_is_none() {
        assert_eq!(CompanyStatus::from_wire("open"), None);
        assert_eq!(CompanyStatus::from_wire("Active"), None);
        assert_eq!(CompanyStatus::from_wire(""), None);
    }

    #[test]
    fn test_display_uses_wire_value() {
        assert_eq!(
            CompanyStatus::VoluntaryArrangement.to_string(),
            "voluntary-arrangement"
        );
    }

    #[test]
    fn test_serializes_as_wire_string() {
        let json = serde_json::to_value(CompanyStatus::ConvertedClosed).unwrap();
        assert_eq!(json, "converted-closed");
    }
}

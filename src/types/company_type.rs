use std::fmt;

use serde::{Serialize, Serializer};

/// Registered company type.
///
/// The registry adds types over time, so unmapped wire values are kept in
/// [`CompanyType::Unknown`] rather than rejected.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompanyType {
    PrivateUnlimited,
    Ltd,
    Plc,
    OldPublicCompany,
    PrivateLimitedGuarantNscLimitedExemption,
    LimitedPartnership,
    PrivateLimitedGuarantNsc,
    ConvertedOrClosed,
    PrivateUnlimitedNsc,
    PrivateLimitedSharesSection30Exemption,
    AssuranceCompany,
    OverseaCompany,
    Eeig,
    IcvcSecurities,
    IcvcWarrant,
    IcvcUmbrella,
    IndustrialAndProvidentSociety,
    NorthernIreland,
    NorthernIrelandOther,
    Llp,
    RoyalCharter,
    InvestmentCompanyWithVariableCapital,
    UnregisteredCompany,
    Other,
    EuropeanPublicLimitedLiabilityCompanySe,
    /// A wire value missing from [`COMPANY_TYPES`], kept verbatim.
    ///
    /// Build values with [`CompanyType::from_wire_lossless`]; a known wire
    /// value wrapped here by hand does not compare equal to its named
    /// variant.
    Unknown(String),
}

/// Wire value to [`CompanyType`] lookup table.
pub const COMPANY_TYPES: &[(&str, CompanyType)] = &[
    ("private-unlimited", CompanyType::PrivateUnlimited),
    ("ltd", CompanyType::Ltd),
    ("plc", CompanyType::Plc),
    ("old-public-company", CompanyType::OldPublicCompany),
    (
        "private-limited-guarant-nsc-limited-exemption",
        CompanyType::PrivateLimitedGuarantNscLimitedExemption,
    ),
    ("limited-partnership", CompanyType::LimitedPartnership),
    (
        "private-limited-guarant-nsc",
        CompanyType::PrivateLimitedGuarantNsc,
    ),
    ("converted-or-closed", CompanyType::ConvertedOrClosed),
    ("private-unlimited-nsc", CompanyType::PrivateUnlimitedNsc),
    (
        "private-limited-shares-section-30-exemption",
        CompanyType::PrivateLimitedSharesSection30Exemption,
    ),
    ("assurance-company", CompanyType::AssuranceCompany),
    ("oversea-company", CompanyType::OverseaCompany),
    ("eeig", CompanyType::Eeig),
    ("icvc-securities", CompanyType::IcvcSecurities),
    ("icvc-warrant", CompanyType::IcvcWarrant),
    ("icvc-umbrella", CompanyType::IcvcUmbrella),
    (
        "industrial-and-provident-society",
        CompanyType::IndustrialAndProvidentSociety,
    ),
    ("northern-ireland", CompanyType::NorthernIreland),
    ("northern-ireland-other", CompanyType::NorthernIrelandOther),
    ("llp", CompanyType::Llp),
    ("royal-charter", CompanyType::RoyalCharter),
    (
        "investment-company-with-variable-capital",
        CompanyType::InvestmentCompanyWithVariableCapital,
    ),
    ("unregistered-company", CompanyType::UnregisteredCompany),
    ("other", CompanyType::Other),
    (
        "european-public-limited-liability-company-se",
        CompanyType::EuropeanPublicLimitedLiabilityCompanySe,
    ),
];

impl CompanyType {
    /// Resolve a wire value against the table.
    ///
    /// Returns `None` for values the table does not know; see
    /// [`CompanyType::from_wire_lossless`] for the variant-preserving form.
    pub fn from_wire(value: &str) -> Option<Self> {
        COMPANY_TYPES
            .iter()
            .find(|(wire, _)| *wire == value)
            .map(|(_, company_type)| company_type.clone())
    }

    /// Resolve a wire value, falling back to [`CompanyType::Unknown`].
    pub fn from_wire_lossless(value: &str) -> Self {
        Self::from_wire(value).unwrap_or_else(|| Self::Unknown(value.to_string()))
    }

    /// The kebab-case wire value for this type.
    pub fn as_wire(&self) -> &str {
        match self {
            Self::PrivateUnlimited => "private-unlimited",
            Self::Ltd => "ltd",
            Self::Plc => "plc",
            Self::OldPublicCompany => "old-public-company",
            Self::PrivateLimitedGuarantNscLimitedExemption => {
                "private-limited-guarant-nsc-limited-exemption"
            }
            Self::LimitedPartnership => "limited-partnership",
            Self::PrivateLimitedGuarantNsc => "private-limited-guarant-nsc",
            Self::ConvertedOrClosed => "converted-or-closed",
            Self::PrivateUnlimitedNsc => "private-unlimited-nsc",
            Self::PrivateLimitedSharesSection30Exemption => {
                "private-limited-shares-section-30-exemption"
            }
            Self::AssuranceCompany => "assurance-company",
            Self::OverseaCompany => "oversea-company",
            Self::Eeig => "eeig",
            Self::IcvcSecurities => "icvc-securities",
            Self::IcvcWarrant => "icvc-warrant",
            Self::IcvcUmbrella => "icvc-umbrella",
            Self::IndustrialAndProvidentSociety => "industrial-and-provident-society",
            Self::NorthernIreland => "northern-ireland",
            Self::NorthernIrelandOther => "northern-ireland-other",
            Self::Llp => "llp",
            Self::RoyalCharter => "royal-charter",
            Self::InvestmentCompanyWithVariableCapital => {
                "investment-company-with-variable-capital"
            }
            Self::UnregisteredCompany => "unregistered-company",
            Self::Other => "other",
            Self::EuropeanPublicLimitedLiabilityCompanySe => {
                "european-public-limited-liability-company-se"
            }
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_wire())
    }
}

impl Serialize for CompanyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

//! Azure Speech Service region identifiers.
//!
//! A region selects which regional deployment serves authentication and
//! speech requests. The client reads the region when building a request
//! URI and never validates it; unknown identifiers are carried through
//! the [`SpeechRegion::Custom`] variant.
//!
//! See: <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/regions>

/// Azure Speech Service deployment regions.
///
/// Choose the region closest to your users for optimal latency, or a
/// specific region for data residency requirements.
///
/// # Example
///
/// ```rust
/// use speech_auth::SpeechRegion;
///
/// let region: SpeechRegion = "westeurope".parse().unwrap();
/// assert_eq!(region, SpeechRegion::WestEurope);
/// assert_eq!(region.as_str(), "westeurope");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpeechRegion {
    /// East US (Virginia)
    #[default]
    EastUS,
    /// East US 2 (Virginia)
    EastUS2,
    /// West US (California)
    WestUS,
    /// West US 2 (Washington)
    WestUS2,
    /// West US 3 (Arizona)
    WestUS3,
    /// Central US (Iowa)
    CentralUS,
    /// North Central US (Illinois)
    NorthCentralUS,
    /// South Central US (Texas)
    SouthCentralUS,
    /// West Europe (Netherlands)
    WestEurope,
    /// North Europe (Ireland)
    NorthEurope,
    /// UK South (London)
    UKSouth,
    /// France Central (Paris)
    FranceCentral,
    /// Germany West Central (Frankfurt)
    GermanyWestCentral,
    /// Switzerland North (Zurich)
    SwitzerlandNorth,
    /// East Asia (Hong Kong)
    EastAsia,
    /// Southeast Asia (Singapore)
    SoutheastAsia,
    /// Japan East (Tokyo)
    JapanEast,
    /// Japan West (Osaka)
    JapanWest,
    /// Korea Central (Seoul)
    KoreaCentral,
    /// Australia East (Sydney)
    AustraliaEast,
    /// Canada Central (Toronto)
    CanadaCentral,
    /// Brazil South (Sao Paulo)
    BrazilSouth,
    /// India Central (Pune)
    IndiaCentral,
    /// Custom region not explicitly listed.
    ///
    /// Use this for new or less common regions without requiring code
    /// changes.
    Custom(String),
}

impl SpeechRegion {
    /// Get the region identifier string used in service URLs.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EastUS => "eastus",
            Self::EastUS2 => "eastus2",
            Self::WestUS => "westus",
            Self::WestUS2 => "westus2",
            Self::WestUS3 => "westus3",
            Self::CentralUS => "centralus",
            Self::NorthCentralUS => "northcentralus",
            Self::SouthCentralUS => "southcentralus",
            Self::WestEurope => "westeurope",
            Self::NorthEurope => "northeurope",
            Self::UKSouth => "uksouth",
            Self::FranceCentral => "francecentral",
            Self::GermanyWestCentral => "germanywestcentral",
            Self::SwitzerlandNorth => "switzerlandnorth",
            Self::EastAsia => "eastasia",
            Self::SoutheastAsia => "southeastasia",
            Self::JapanEast => "japaneast",
            Self::JapanWest => "japanwest",
            Self::KoreaCentral => "koreacentral",
            Self::AustraliaEast => "australiaeast",
            Self::CanadaCentral => "canadacentral",
            Self::BrazilSouth => "brazilsouth",
            Self::IndiaCentral => "centralindia",
            Self::Custom(region) => region.as_str(),
        }
    }
}

impl std::fmt::Display for SpeechRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpeechRegion {
    type Err = std::convert::Infallible;

    /// Parse a region from its string identifier, case insensitively.
    ///
    /// Unknown identifiers are wrapped in [`SpeechRegion::Custom`], so
    /// parsing never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = match s.to_lowercase().as_str() {
            "eastus" => Self::EastUS,
            "eastus2" => Self::EastUS2,
            "westus" => Self::WestUS,
            "westus2" => Self::WestUS2,
            "westus3" => Self::WestUS3,
            "centralus" => Self::CentralUS,
            "northcentralus" => Self::NorthCentralUS,
            "southcentralus" => Self::SouthCentralUS,
            "westeurope" => Self::WestEurope,
            "northeurope" => Self::NorthEurope,
            "uksouth" => Self::UKSouth,
            "francecentral" => Self::FranceCentral,
            "germanywestcentral" => Self::GermanyWestCentral,
            "switzerlandnorth" => Self::SwitzerlandNorth,
            "eastasia" => Self::EastAsia,
            "southeastasia" => Self::SoutheastAsia,
            "japaneast" => Self::JapanEast,
            "japanwest" => Self::JapanWest,
            "koreacentral" => Self::KoreaCentral,
            "australiaeast" => Self::AustraliaEast,
            "canadacentral" => Self::CanadaCentral,
            "brazilsouth" => Self::BrazilSouth,
            "centralindia" => Self::IndiaCentral,
            _ => Self::Custom(s.to_string()),
        };
        Ok(region)
    }
}

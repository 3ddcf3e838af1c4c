//! Azure Cognitive Services region configuration.
//!
//! Each Cognitive Services resource is bound to a region, and most endpoints
//! embed the region identifier in their hostname. Bing Search is the
//! exception: it is served from a single global endpoint (see
//! [`crate::core::search`]).
//!
//! # Example
//!
//! ```rust
//! use oxford::AzureRegion;
//!
//! let region = AzureRegion::WestEurope;
//! assert_eq!(
//!     region.token_endpoint(),
//!     "https://westeurope.api.cognitive.microsoft.com/sts/v1.0/issueToken"
//! );
//! assert!(region.text_analytics_url().contains("text/analytics"));
//! ```

/// Azure regions hosting Cognitive Services resources.
///
/// Choose the region your resource was provisioned in; calls against the
/// wrong region are rejected with an authentication error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AzureRegion {
    /// East US (Virginia)
    #[default]
    EastUS,
    /// East US 2 (Virginia)
    EastUS2,
    /// West US (California)
    WestUS,
    /// West US 2 (Washington)
    WestUS2,
    /// Central US (Iowa)
    CentralUS,
    /// West Europe (Netherlands)
    WestEurope,
    /// North Europe (Ireland)
    NorthEurope,
    /// UK South (London)
    UKSouth,
    /// East Asia (Hong Kong)
    EastAsia,
    /// Southeast Asia (Singapore)
    SoutheastAsia,
    /// Japan East (Tokyo)
    JapanEast,
    /// Australia East (Sydney)
    AustraliaEast,
    /// Brazil South (Sao Paulo)
    BrazilSouth,
    /// Custom region not explicitly listed.
    Custom(String),
}

impl AzureRegion {
    /// The region identifier string used in Azure hostnames.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EastUS => "eastus",
            Self::EastUS2 => "eastus2",
            Self::WestUS => "westus",
            Self::WestUS2 => "westus2",
            Self::CentralUS => "centralus",
            Self::WestEurope => "westeurope",
            Self::NorthEurope => "northeurope",
            Self::UKSouth => "uksouth",
            Self::EastAsia => "eastasia",
            Self::SoutheastAsia => "southeastasia",
            Self::JapanEast => "japaneast",
            Self::AustraliaEast => "australiaeast",
            Self::BrazilSouth => "brazilsouth",
            Self::Custom(region) => region.as_str(),
        }
    }

    /// The regional Cognitive Services API hostname.
    ///
    /// Format: `<region>.api.cognitive.microsoft.com`
    #[inline]
    pub fn api_hostname(&self) -> String {
        format!("{}.api.cognitive.microsoft.com", self.as_str())
    }

    /// The token issuing endpoint for exchanging a subscription key for a
    /// bearer token. Tokens are valid for 10 minutes.
    ///
    /// Format: `https://<region>.api.cognitive.microsoft.com/sts/v1.0/issueToken`
    #[inline]
    pub fn token_endpoint(&self) -> String {
        format!("https://{}/sts/v1.0/issueToken", self.api_hostname())
    }

    /// The Text Analytics base URL for this region.
    ///
    /// Format: `https://<region>.api.cognitive.microsoft.com/text/analytics/v2.0`
    #[inline]
    pub fn text_analytics_url(&self) -> String {
        format!("https://{}/text/analytics/v2.0", self.api_hostname())
    }

    /// The Speaker Recognition base URL for this region.
    ///
    /// Format: `https://<region>.api.cognitive.microsoft.com/spid/v1.0`
    #[inline]
    pub fn speaker_recognition_url(&self) -> String {
        format!("https://{}/spid/v1.0", self.api_hostname())
    }

    /// The speech synthesis endpoint for this region.
    ///
    /// Format: `https://<region>.tts.speech.microsoft.com/cognitiveservices/v1`
    #[inline]
    pub fn speech_synthesis_url(&self) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            self.as_str()
        )
    }
}

impl std::str::FromStr for AzureRegion {
    type Err = std::convert::Infallible;

    /// Parse a region from its identifier string.
    ///
    /// Never fails: unknown identifiers are wrapped in [`AzureRegion::Custom`]
    /// so new regions work without a code change.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = match s.to_lowercase().as_str() {
            "eastus" => Self::EastUS,
            "eastus2" => Self::EastUS2,
            "westus" => Self::WestUS,
            "westus2" => Self::WestUS2,
            "centralus" => Self::CentralUS,
            "westeurope" => Self::WestEurope,
            "northeurope" => Self::NorthEurope,
            "uksouth" => Self::UKSouth,
            "eastasia" => Self::EastAsia,
            "southeastasia" => Self::SoutheastAsia,
            "japaneast" => Self::JapanEast,
            "australiaeast" => Self::AustraliaEast,
            "brazilsouth" => Self::BrazilSouth,
            _ => Self::Custom(s.to_string()),
        };
        Ok(region)
    }
}

impl std::fmt::Display for AzureRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region() {
        let region = AzureRegion::default();
        assert_eq!(region, AzureRegion::EastUS);
        assert_eq!(region.as_str(), "eastus");
    }

    #[test]
    fn test_api_hostname() {
        assert_eq!(
            AzureRegion::WestEurope.api_hostname(),
            "westeurope.api.cognitive.microsoft.com"
        );
    }

    #[test]
    fn test_token_endpoint() {
        assert_eq!(
            AzureRegion::EastUS.token_endpoint(),
            "https://eastus.api.cognitive.microsoft.com/sts/v1.0/issueToken"
        );
    }

    #[test]
    fn test_text_analytics_url() {
        assert_eq!(
            AzureRegion::JapanEast.text_analytics_url(),
            "https://japaneast.api.cognitive.microsoft.com/text/analytics/v2.0"
        );
    }

    #[test]
    fn test_speaker_recognition_url() {
        assert_eq!(
            AzureRegion::WestUS.speaker_recognition_url(),
            "https://westus.api.cognitive.microsoft.com/spid/v1.0"
        );
    }

    #[test]
    fn test_speech_synthesis_url() {
        assert_eq!(
            AzureRegion::SoutheastAsia.speech_synthesis_url(),
            "https://southeastasia.tts.speech.microsoft.com/cognitiveservices/v1"
        );
    }

    #[test]
    fn test_custom_region() {
        let region = AzureRegion::Custom("newregion".to_string());
        assert_eq!(region.as_str(), "newregion");
        assert_eq!(
            region.api_hostname(),
            "newregion.api.cognitive.microsoft.com"
        );
    }

    #[test]
    fn test_from_str_known_regions() {
        let cases = vec![
            ("eastus", AzureRegion::EastUS),
            ("WESTEUROPE", AzureRegion::WestEurope),
            ("JapanEast", AzureRegion::JapanEast),
            ("brazilsouth", AzureRegion::BrazilSouth),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<AzureRegion>().unwrap(), expected);
        }
    }

    #[test]
    fn test_from_str_unknown_becomes_custom() {
        let region: AzureRegion = "norwayeast".parse().unwrap();
        assert_eq!(region, AzureRegion::Custom("norwayeast".to_string()));
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(AzureRegion::UKSouth.to_string(), "uksouth");
    }
}

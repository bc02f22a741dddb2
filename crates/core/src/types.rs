use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AdCraftError, AdCraftResult};

/// Phrase substituted when the caller leaves the audience blank.
pub const DEFAULT_AUDIENCE: &str =
    "your ideal customers who are actively looking for what you offer";

/// Campaign parameters collected from the caller for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    pub product: String,
    #[serde(default)]
    pub audience: String,
    pub platform: Platform,
    pub goal: Goal,
    pub tone: Tone,
    pub length: Length,
    #[serde(default)]
    pub include_emojis: bool,
    #[serde(default)]
    pub include_hashtags: bool,
    #[serde(default)]
    pub include_video_script: bool,
}

impl CampaignInput {
    /// Trimmed audience, or [`DEFAULT_AUDIENCE`] when blank.
    pub fn normalized_audience(&self) -> &str {
        match self.audience.trim() {
            "" => DEFAULT_AUDIENCE,
            audience => audience,
        }
    }

    /// Check the input at the caller boundary.
    ///
    /// An empty product is always rejected. With `strict` set, any
    /// enumerated field holding an unrecognized label is rejected too;
    /// otherwise those fall back to generic copy during generation.
    pub fn validate(&self, strict: bool) -> AdCraftResult<()> {
        if self.product.trim().is_empty() {
            return Err(AdCraftError::Validation(
                "product description is required".to_string(),
            ));
        }
        if !strict {
            return Ok(());
        }

        let unsupported = [
            ("platform", self.platform.is_other(), self.platform.as_str()),
            ("goal", self.goal.is_other(), self.goal.as_str()),
            ("tone", self.tone.is_other(), self.tone.as_str()),
            ("length", self.length.is_other(), self.length.as_str()),
        ];
        match unsupported.iter().find(|(_, other, _)| *other) {
            Some((field, _, value)) => Err(AdCraftError::UnsupportedValue {
                field: (*field).to_string(),
                value: (*value).to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for CampaignInput {
    fn default() -> Self {
        Self {
            product: String::new(),
            audience: String::new(),
            platform: Platform::FacebookInstagram,
            goal: Goal::Sales,
            tone: Tone::Default,
            length: Length::Balanced,
            include_emojis: false,
            include_hashtags: false,
            include_video_script: false,
        }
    }
}

// ─── Platform ───────────────────────────────────────────────────────────

/// Ad platform the copy is written for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    FacebookInstagram,
    TikTok,
    XTwitter,
    YouTube,
    GoogleAds,
    LinkedIn,
    Other(String),
}

impl Platform {
    pub const KNOWN: [Platform; 6] = [
        Platform::FacebookInstagram,
        Platform::TikTok,
        Platform::XTwitter,
        Platform::YouTube,
        Platform::GoogleAds,
        Platform::LinkedIn,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Platform::FacebookInstagram => "Facebook / Instagram",
            Platform::TikTok => "TikTok",
            Platform::XTwitter => "X (Twitter)",
            Platform::YouTube => "YouTube",
            Platform::GoogleAds => "Google Ads",
            Platform::LinkedIn => "LinkedIn",
            Platform::Other(label) => label,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Platform::Other(_))
    }
}

impl From<&str> for Platform {
    fn from(raw: &str) -> Self {
        Platform::KNOWN
            .into_iter()
            .find(|platform| platform.as_str() == raw)
            .unwrap_or_else(|| Platform::Other(raw.to_string()))
    }
}

impl From<String> for Platform {
    fn from(raw: String) -> Self {
        Platform::from(raw.as_str())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Goal ───────────────────────────────────────────────────────────────

/// Campaign objective; drives the CTA for two of the three angles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    Sales,
    Leads,
    Bookings,
    AppInstalls,
    Other(String),
}

impl Goal {
    pub const KNOWN: [Goal; 4] = [Goal::Sales, Goal::Leads, Goal::Bookings, Goal::AppInstalls];

    pub fn as_str(&self) -> &str {
        match self {
            Goal::Sales => "Sales",
            Goal::Leads => "Leads",
            Goal::Bookings => "Bookings",
            Goal::AppInstalls => "App installs",
            Goal::Other(label) => label,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Goal::Other(_))
    }
}

impl From<&str> for Goal {
    fn from(raw: &str) -> Self {
        Goal::KNOWN
            .into_iter()
            .find(|goal| goal.as_str() == raw)
            .unwrap_or_else(|| Goal::Other(raw.to_string()))
    }
}

impl From<String> for Goal {
    fn from(raw: String) -> Self {
        Goal::from(raw.as_str())
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Tone ───────────────────────────────────────────────────────────────

/// Voice of the copy. `Default` and unrecognized tones share the neutral,
/// benefit-driven clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    Edgy,
    Luxury,
    UgcStyle,
    StoryBased,
    Default,
    Other(String),
}

impl Tone {
    pub const KNOWN: [Tone; 5] = [
        Tone::Edgy,
        Tone::Luxury,
        Tone::UgcStyle,
        Tone::StoryBased,
        Tone::Default,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Tone::Edgy => "Edgy",
            Tone::Luxury => "Luxury",
            Tone::UgcStyle => "UGC-style",
            Tone::StoryBased => "Story-based",
            Tone::Default => "Default",
            Tone::Other(label) => label,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Tone::Other(_))
    }
}

impl From<&str> for Tone {
    fn from(raw: &str) -> Self {
        Tone::KNOWN
            .into_iter()
            .find(|tone| tone.as_str() == raw)
            .unwrap_or_else(|| Tone::Other(raw.to_string()))
    }
}

impl From<String> for Tone {
    fn from(raw: String) -> Self {
        Tone::from(raw.as_str())
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Length ─────────────────────────────────────────────────────────────

/// Target copy length. `Balanced` and unrecognized labels share the default clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Length {
    Short,
    Long,
    Balanced,
    Other(String),
}

impl Length {
    pub const KNOWN: [Length; 3] = [Length::Short, Length::Long, Length::Balanced];

    pub fn as_str(&self) -> &str {
        match self {
            Length::Short => "Short",
            Length::Long => "Long",
            Length::Balanced => "Balanced",
            Length::Other(label) => label,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Length::Other(_))
    }
}

impl From<&str> for Length {
    fn from(raw: &str) -> Self {
        Length::KNOWN
            .into_iter()
            .find(|length| length.as_str() == raw)
            .unwrap_or_else(|| Length::Other(raw.to_string()))
    }
}

impl From<String> for Length {
    fn from(raw: String) -> Self {
        Length::from(raw.as_str())
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        match length {
            Length::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Output ─────────────────────────────────────────────────────────────

/// Rhetorical framing of a variant. Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Angle {
    #[serde(rename = "Pain → Solution")]
    PainSolution,
    #[serde(rename = "Before / After")]
    BeforeAfter,
    #[serde(rename = "Proof & Authority")]
    ProofAuthority,
}

impl Angle {
    pub const ALL: [Angle; 3] = [Angle::PainSolution, Angle::BeforeAfter, Angle::ProofAuthority];

    pub fn label(&self) -> &'static str {
        match self {
            Angle::PainSolution => "Pain → Solution",
            Angle::BeforeAfter => "Before / After",
            Angle::ProofAuthority => "Proof & Authority",
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One generated ad-copy record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdVariant {
    /// 1-based position in the generated set.
    pub variation_index: usize,
    pub angle: Angle,
    pub platform: Platform,
    pub goal: Goal,
    pub tone: Tone,
    pub length: Length,
    pub primary: String,
    pub headline: String,
    pub description: String,
    pub cta: String,
    /// Present only when a video script was requested.
    pub script_outline: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_exactly() {
        assert_eq!(Platform::from("X (Twitter)"), Platform::XTwitter);
        assert_eq!(Goal::from("App installs"), Goal::AppInstalls);
        assert_eq!(Tone::from("UGC-style"), Tone::UgcStyle);
        assert_eq!(Tone::from("Default"), Tone::Default);
        assert_eq!(Length::from("Short"), Length::Short);

        assert_eq!(Platform::from("x"), Platform::Other("x".to_string()));
        assert_eq!(Goal::from("sales"), Goal::Other("sales".to_string()));
        assert_eq!(Tone::from("edgy"), Tone::Other("edgy".to_string()));
        assert_eq!(Length::from(" Short "), Length::Other(" Short ".to_string()));
    }

    #[test]
    fn test_lowercase_labels_echo_unchanged_in_json() {
        let json = serde_json::json!({
            "product": "Desk",
            "platform": "x",
            "goal": "sales",
            "tone": "Edgy",
            "length": "Short"
        });
        let input: CampaignInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.goal, Goal::Other("sales".to_string()));

        let back = serde_json::to_value(&input).unwrap();
        assert_eq!(back["platform"], "x");
        assert_eq!(back["goal"], "sales");
    }

    #[test]
    fn test_default_input_passes_strict_validation() {
        let input = CampaignInput {
            product: "Desk".to_string(),
            ..Default::default()
        };
        assert_eq!(input.tone, Tone::Default);
        assert!(input.validate(true).is_ok());
    }

    #[test]
    fn test_unknown_labels_are_preserved() {
        let platform = Platform::from("Pinterest");
        assert!(platform.is_other());
        assert_eq!(platform.as_str(), "Pinterest");
        assert_eq!(String::from(Goal::from("Awareness")), "Awareness");
    }

    #[test]
    fn test_normalized_audience() {
        let mut input = CampaignInput {
            audience: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(input.normalized_audience(), DEFAULT_AUDIENCE);

        input.audience = "  busy parents ".to_string();
        assert_eq!(input.normalized_audience(), "busy parents");
    }

    #[test]
    fn test_validate_rejects_blank_product() {
        let input = CampaignInput {
            product: " \t ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            input.validate(false),
            Err(AdCraftError::Validation(_))
        ));
    }

    #[test]
    fn test_strict_validation_rejects_unknown_values() {
        let input = CampaignInput {
            product: "Standing desk".to_string(),
            tone: Tone::Edgy,
            goal: Goal::from("Awareness"),
            ..Default::default()
        };
        assert!(input.validate(false).is_ok());

        match input.validate(true) {
            Err(AdCraftError::UnsupportedValue { field, value }) => {
                assert_eq!(field, "goal");
                assert_eq!(value, "Awareness");
            }
            other => panic!("expected unsupported value, got {other:?}"),
        }
    }

    #[test]
    fn test_input_json_shape() {
        let json = serde_json::json!({
            "product": "Eco water bottle",
            "audience": "",
            "platform": "TikTok",
            "goal": "Sales",
            "tone": "Edgy",
            "length": "Short",
            "includeEmojis": true,
            "includeHashtags": true,
            "includeVideoScript": false
        });
        let input: CampaignInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.platform, Platform::TikTok);
        assert!(input.include_emojis);

        let back = serde_json::to_value(&input).unwrap();
        assert_eq!(back["platform"], "TikTok");
        assert_eq!(back["includeVideoScript"], false);
    }

    #[test]
    fn test_angle_serializes_as_label() {
        let json = serde_json::to_string(&Angle::BeforeAfter).unwrap();
        assert_eq!(json, "\"Before / After\"");
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAdCopyRequest {
    pub product_name: String,
    pub target_audience: String,
    #[serde(default)]
    pub keywords: String,
    pub tone: ToneOfVoice,
    pub language: Language,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    ToSchema,
)]
pub enum ToneOfVoice {
    #[default]
    Friendly,
    Urgent,
    Professional,
    Luxury,
}

impl ToneOfVoice {
    pub const ALL: [ToneOfVoice; 4] = [
        ToneOfVoice::Friendly,
        ToneOfVoice::Urgent,
        ToneOfVoice::Professional,
        ToneOfVoice::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToneOfVoice::Friendly => "Friendly",
            ToneOfVoice::Urgent => "Urgent",
            ToneOfVoice::Professional => "Professional",
            ToneOfVoice::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for ToneOfVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    ToSchema,
)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Japanese,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    #[serde(rename = "Chinese (Simplified)")]
    Chinese,
    Arabic,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Japanese,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
        Language::Russian,
        Language::Chinese,
        Language::Arabic,
        Language::Hindi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Dutch => "Dutch",
            Language::Russian => "Russian",
            Language::Chinese => "Chinese (Simplified)",
            Language::Arabic => "Arabic",
            Language::Hindi => "Hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_request() {
        let request = serde_json::from_str::<GenerateAdCopyRequest>(
            r#"{
                "productName": "Artisan Coffee",
                "targetAudience": "Coffee lovers",
                "keywords": "specialty coffee",
                "tone": "Friendly",
                "language": "Chinese (Simplified)"
            }"#,
        )
        .unwrap();

        assert_eq!(request.product_name, "Artisan Coffee");
        assert_eq!(request.tone, ToneOfVoice::Friendly);
        assert_eq!(request.language, Language::Chinese);
    }

    #[test]
    fn test_keywords_default_to_empty() {
        let request = serde_json::from_str::<GenerateAdCopyRequest>(
            r#"{
                "productName": "P",
                "targetAudience": "T",
                "tone": "Urgent",
                "language": "English"
            }"#,
        )
        .unwrap();

        assert_eq!(request.keywords, "");
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        let result = serde_json::from_str::<GenerateAdCopyRequest>(
            r#"{
                "productName": "P",
                "targetAudience": "T",
                "tone": "Sarcastic",
                "language": "English"
            }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_closed_option_sets() {
        assert_eq!(ToneOfVoice::ALL.len(), 4);
        assert_eq!(Language::ALL.len(), 12);
    }
}

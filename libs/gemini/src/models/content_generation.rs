pub mod implementation;

use std::collections::BTreeMap;

use reqwest::Body;
use serde::{Deserialize, Serialize};

static GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";

pub trait ContentGeneration {
    fn gemini_2_5_flash(
        &self,
        request: ContentGenerationRequest,
    ) -> impl std::future::Future<
        Output = anyhow::Result<ContentGenerationResponse>,
    > + Send;
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGenerationRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

impl ContentGenerationRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
}

/// Subset of the provider's OpenAPI-style schema, enough to constrain
/// replies to a fixed JSON object shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub r#type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    pub fn object(
        properties: BTreeMap<String, Schema>,
        required: Vec<String>,
    ) -> Self {
        Self {
            r#type: SchemaType::Object,
            description: None,
            properties: Some(properties),
            items: None,
            required: Some(required),
        }
    }

    pub fn array(items: Schema) -> Self {
        Self {
            r#type: SchemaType::Array,
            description: None,
            properties: None,
            items: Some(Box::new(items)),
            required: None,
        }
    }

    pub fn string(description: &str) -> Self {
        Self {
            r#type: SchemaType::String,
            description: Some(description.to_string()),
            properties: None,
            items: None,
            required: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

#[derive(Debug, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Deserialize)]
pub struct ContentGenerationResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
    pub role: Option<String>,
}

impl ContentGenerationResponse {
    /// Concatenated text of the first candidate, `None` when the provider
    /// returned no candidates (e.g. a content-safety refusal).
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        Some(
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

impl Into<Body> for ContentGenerationRequest {
    fn into(self) -> Body {
        let body = serde_json::to_string(&self).unwrap();
        Body::from(body)
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use util::workspace_dir;

    use super::*;

    #[test]
    fn test_serialize_request_with_schema() {
        // Arrange
        let mut properties = BTreeMap::new();
        properties.insert(
            "headlines".to_string(),
            Schema::array(Schema::string("Ad headline.")),
        );
        let request = ContentGenerationRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "prompt".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(Schema::object(
                    properties,
                    vec!["headlines".to_string()],
                )),
            }),
            tools: None,
        };

        // Act
        let json = serde_json::to_string(&request).unwrap();

        // Assert
        assert!(json.contains(r#""responseMimeType":"application/json""#));
        assert!(json.contains(r#""responseSchema""#));
        assert!(json.contains(r#""type":"OBJECT""#));
        assert!(json.contains(r#""type":"ARRAY""#));
        assert!(json.contains(r#""required":["headlines"]"#));
        assert!(!json.contains("tools"));
    }

    #[test]
    fn test_serialize_request_with_search_tool() {
        // Arrange
        let mut request = ContentGenerationRequest::from_prompt("prompt");
        request.tools = Some(vec![Tool {
            google_search: GoogleSearch {},
        }]);

        // Act
        let json = serde_json::to_string(&request).unwrap();

        // Assert
        assert!(json.contains(r#""tools":[{"google_search":{}}]"#));
        assert!(!json.contains("generationConfig"));
    }

    #[test]
    fn test_deserialize_response() {
        // Arrange
        let text = fs::read_to_string(
            workspace_dir()
                .join("libs/gemini/src/models/content_generation/test.json"),
        );

        // Act
        let response = serde_json::from_str::<ContentGenerationResponse>(
            &text.unwrap(),
        );

        // Assert
        let response = response.unwrap();
        assert_eq!(
            response.text().unwrap(),
            r#"{"headlines":["Fresh Roasted Daily","Taste the Craft","Your Morning Upgrade"],"descriptions":["Small-batch specialty coffee shipped to your door.","Single-origin beans roasted to order. Try it today."]}"#
        );
    }

    #[test]
    fn test_text_is_none_without_candidates() {
        let response =
            serde_json::from_str::<ContentGenerationResponse>("{}").unwrap();

        assert!(response.text().is_none());
    }
}

use std::collections::BTreeMap;

use anyhow::Context;
use gemini::models::{
    content_generation::{
        ContentGeneration, ContentGenerationRequest, GenerationConfig, Schema,
    },
    Models,
};

use crate::copy::{
    request::GenerateAdCopyRequest, DESCRIPTION_COUNT, DESCRIPTION_MAX_LENGTH,
    HEADLINE_COUNT, HEADLINE_MAX_LENGTH,
};
use crate::parse::{parse_ad_copy, AdCopy};

use super::Agent;

pub struct CopywriterAgent {
    client: Models,
}

impl CopywriterAgent {
    pub fn new(client: Models) -> Self {
        Self { client }
    }
}

pub fn ad_copy_prompt(request: &GenerateAdCopyRequest) -> String {
    format!(
        r#"Generate high-performing Google Ads copy in {language}.

Product or Service: {product_name}
Target Audience: {target_audience}
Keywords to include: {keywords}
Tone of Voice: {tone}
Language: {language}

Strictly follow these rules:
1. Generate exactly {headline_count} unique headlines.
2. Each headline MUST be {headline_max} characters or less.
3. Generate exactly {description_count} unique descriptions.
4. Each description MUST be {description_max} characters or less.
5. Ensure the copy is compliant, conversion-focused, and tailored to the specified tone and audience. Try to naturally include the provided keywords. If no keywords are provided, use your judgment.
6. Return the result in the specified JSON format."#,
        language = request.language,
        product_name = request.product_name,
        target_audience = request.target_audience,
        keywords = request.keywords,
        tone = request.tone,
        headline_count = HEADLINE_COUNT,
        headline_max = HEADLINE_MAX_LENGTH,
        description_count = DESCRIPTION_COUNT,
        description_max = DESCRIPTION_MAX_LENGTH,
    )
}

fn response_schema() -> Schema {
    let mut properties = BTreeMap::new();
    properties.insert(
        "headlines".to_string(),
        Schema::array(Schema::string(&format!(
            "Ad headline, maximum {} characters.",
            HEADLINE_MAX_LENGTH
        ))),
    );
    properties.insert(
        "descriptions".to_string(),
        Schema::array(Schema::string(&format!(
            "Ad description, maximum {} characters.",
            DESCRIPTION_MAX_LENGTH
        ))),
    );

    Schema::object(
        properties,
        vec!["headlines".to_string(), "descriptions".to_string()],
    )
}

impl Agent for CopywriterAgent {
    type Input = GenerateAdCopyRequest;
    type Item = anyhow::Result<AdCopy>;

    async fn prompt(self, input: Self::Input) -> Self::Item {
        let mut request =
            ContentGenerationRequest::from_prompt(&ad_copy_prompt(&input));
        request.generation_config = Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: Some(response_schema()),
        });

        let response = self.client.gemini_2_5_flash(request).await?;
        let text = response.text().context("no candidates in response")?;

        parse_ad_copy(&text)
    }
}

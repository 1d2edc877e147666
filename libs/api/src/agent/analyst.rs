use anyhow::Context;
use gemini::models::{
    content_generation::{
        ContentGeneration, ContentGenerationRequest, GoogleSearch, Tool,
    },
    Models,
};

use crate::parse::{parse_analysis, WebsiteAnalysis};

use super::Agent;

pub struct AnalystAgent {
    client: Models,
}

impl AnalystAgent {
    pub fn new(client: Models) -> Self {
        Self { client }
    }
}

pub fn analysis_prompt(url: &str) -> String {
    format!(
        r#"Analyze the main content of the website at the URL "{url}" to understand its core business, offerings, and intended audience.

Based on this analysis, extract the following three pieces of information:
1. **Product or Service Name:** A concise name for the primary product or service offered (e.g., "Handcrafted Leather Wallets", "AI-Powered SEO Tool").
2. **Target Audience:** A brief description of the ideal customer (e.g., "Eco-conscious millennials", "Small business owners, digital marketers").
3. **Keywords:** The top 5-7 most relevant SEO and marketing keywords for a Google Ads campaign, returned as a single comma-separated string (e.g., "sustainable wallets, minimalist leather goods, eco-friendly gifts").

Return ONLY a single, minified JSON object with the exact keys "productName", "targetAudience", and "keywords".
Do not add any other text, explanation, or formatting like markdown backticks.
Example valid response:
{{"productName":"Artisan Coffee Beans","targetAudience":"Coffee connoisseurs, home baristas","keywords":"specialty coffee, single-origin beans, fresh roasted coffee, gourmet coffee"}}"#
    )
}

impl Agent for AnalystAgent {
    type Input = String;
    type Item = anyhow::Result<WebsiteAnalysis>;

    async fn prompt(self, input: Self::Input) -> Self::Item {
        // The model has to fetch the page itself, so the search tool is
        // enabled. Structured output cannot be combined with tools on the
        // provider side; the prompt is the only contract on shape.
        let mut request =
            ContentGenerationRequest::from_prompt(&analysis_prompt(&input));
        request.tools = Some(vec![Tool {
            google_search: GoogleSearch {},
        }]);

        let response = self.client.gemini_2_5_flash(request).await?;
        let text = response.text().context("no candidates in response")?;

        parse_analysis(&text)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_prompt_embeds_url() {
        let prompt = analysis_prompt("https://example.com");

        assert!(prompt.contains(r#"the URL "https://example.com""#));
        assert!(prompt.contains(r#"the exact keys "productName", "targetAudience", and "keywords""#));
        assert!(prompt.contains("Do not add any other text"));
    }
}

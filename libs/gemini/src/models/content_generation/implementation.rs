use anyhow::Context;

use crate::models::{content_generation::GEMINI_2_5_FLASH, Models};

use super::ContentGeneration;

impl ContentGeneration for Models {
    async fn gemini_2_5_flash(
        &self,
        request: super::ContentGenerationRequest,
    ) -> anyhow::Result<super::ContentGenerationResponse> {
        let text = self.string_response(request, GEMINI_2_5_FLASH).await?;

        let response =
            serde_json::from_str(&text).context("failed to parse response")?;

        Ok(response)
    }
}

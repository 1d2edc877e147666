use anyhow::ensure;
use axum::{extract::State, Json};

pub mod request;
pub mod response;

use crate::agent::{copywriter::CopywriterAgent, Agent};
use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiState;

use self::request::GenerateAdCopyRequest;
use self::response::GenerateAdCopyResponse;

// Length budgets are advisory: the prompt instructs the model to respect
// them, and the session view flags items that exceed them. Nothing is
// truncated.
pub const HEADLINE_COUNT: usize = 3;
pub const HEADLINE_MAX_LENGTH: usize = 30;
pub const DESCRIPTION_COUNT: usize = 2;
pub const DESCRIPTION_MAX_LENGTH: usize = 90;

/// Generate ad copy
#[utoipa::path(
    post,
    path = "/copy",
    request_body = GenerateAdCopyRequest,
    responses(
        (status = 200, description = "Generate ad copy successfully", body = GenerateAdCopyResponse)
    )
)]
pub async fn generate_ad_copy(
    State(state): State<ApiState>,
    Json(body): Json<GenerateAdCopyRequest>,
) -> ApiResponse<Json<GenerateAdCopyResponse>> {
    validate(&body).into_response("400-001")?;

    let agent = CopywriterAgent::new(state.gemini.clone());
    let copy = agent.prompt(body).await.into_response("502-001")?;

    Ok(Json(copy.into()))
}

fn validate(body: &GenerateAdCopyRequest) -> anyhow::Result<()> {
    ensure!(
        !body.product_name.trim().is_empty()
            && !body.target_audience.trim().is_empty(),
        "product name or target audience is empty"
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn request(product_name: &str, target_audience: &str) -> GenerateAdCopyRequest {
        GenerateAdCopyRequest {
            product_name: product_name.to_string(),
            target_audience: target_audience.to_string(),
            keywords: String::new(),
            tone: Default::default(),
            language: Default::default(),
        }
    }

    #[test]
    fn test_validate_requires_product_name_and_audience() {
        assert!(validate(&request("", "Coffee lovers")).is_err());
        assert!(validate(&request("Artisan Coffee", "")).is_err());
        assert!(validate(&request("  ", "  ")).is_err());
        assert!(validate(&request("Artisan Coffee", "Coffee lovers")).is_ok());
    }
}

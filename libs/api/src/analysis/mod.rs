use anyhow::ensure;
use axum::{extract::State, Json};

pub mod request;
pub mod response;

use crate::agent::{analyst::AnalystAgent, Agent};
use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiState;

use self::request::AnalyzeWebsiteRequest;
use self::response::AnalyzeWebsiteResponse;

/// Analyze a competitor website
#[utoipa::path(
    post,
    path = "/analysis",
    request_body = AnalyzeWebsiteRequest,
    responses(
        (status = 200, description = "Analyze a competitor website successfully", body = AnalyzeWebsiteResponse)
    )
)]
pub async fn analyze_website(
    State(state): State<ApiState>,
    Json(body): Json<AnalyzeWebsiteRequest>,
) -> ApiResponse<Json<AnalyzeWebsiteResponse>> {
    validate(&body).into_response("400-002")?;

    let url = normalize_url(body.url.trim());
    let agent = AnalystAgent::new(state.gemini.clone());
    let analysis = agent.prompt(url).await.into_response("502-002")?;

    Ok(Json(analysis.into()))
}

fn validate(body: &AnalyzeWebsiteRequest) -> anyhow::Result<()> {
    ensure!(!body.url.trim().is_empty(), "url is empty");

    Ok(())
}

pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize_url_prefixes_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(
            normalize_url("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn test_validate_requires_url() {
        assert!(validate(&AnalyzeWebsiteRequest {
            url: "  ".to_string()
        })
        .is_err());
        assert!(validate(&AnalyzeWebsiteRequest {
            url: "example.com".to_string()
        })
        .is_ok());
    }
}

use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeWebsiteRequest {
    pub url: String,
}

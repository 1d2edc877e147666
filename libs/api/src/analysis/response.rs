use serde::Serialize;
use utoipa::ToSchema;

use crate::parse::WebsiteAnalysis;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeWebsiteResponse {
    pub product_name: String,
    pub target_audience: String,
    pub keywords: String,
}

impl From<WebsiteAnalysis> for AnalyzeWebsiteResponse {
    fn from(analysis: WebsiteAnalysis) -> Self {
        Self {
            product_name: analysis.product_name,
            target_audience: analysis.target_audience,
            keywords: analysis.keywords,
        }
    }
}

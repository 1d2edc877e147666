use serde::Serialize;
use utoipa::ToSchema;

use crate::parse::AdCopy;

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateAdCopyResponse {
    pub headlines: Vec<String>,
    pub descriptions: Vec<String>,
}

impl From<AdCopy> for GenerateAdCopyResponse {
    fn from(copy: AdCopy) -> Self {
        Self {
            headlines: copy.headlines,
            descriptions: copy.descriptions,
        }
    }
}

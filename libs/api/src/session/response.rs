use serde::Serialize;

use crate::copy::request::{Language, ToneOfVoice};
use crate::copy::{DESCRIPTION_MAX_LENGTH, HEADLINE_MAX_LENGTH};
use crate::parse::{AdCopy, WebsiteAnalysis};

use super::state::{FormState, Phase};

/// Full view of the session, sent after every applied action and every
/// operation outcome.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub product_name: String,
    pub target_audience: String,
    pub keywords: String,
    pub tone: ToneOfVoice,
    pub language: Language,
    pub competitor_url: String,
    pub can_generate: bool,
    pub can_analyze: bool,
    pub generation: PhaseView<AdCopyView>,
    pub analysis: PhaseView<AnalysisView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum PhaseView<T> {
    Idle,
    Pending,
    Success { result: T },
    Error { message: String },
}

#[derive(Debug, Serialize)]
pub struct AdCopyView {
    pub headlines: Vec<CopyItem>,
    pub descriptions: Vec<CopyItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyItem {
    pub text: String,
    pub over_budget: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    pub product_name: String,
    pub target_audience: String,
    pub keywords: String,
}

impl From<&FormState> for Snapshot {
    fn from(form: &FormState) -> Self {
        Self {
            product_name: form.product_name.clone(),
            target_audience: form.target_audience.clone(),
            keywords: form.keywords.clone(),
            tone: form.tone,
            language: form.language,
            competitor_url: form.competitor_url.clone(),
            can_generate: form.can_generate(),
            can_analyze: form.can_analyze(),
            generation: phase_view(&form.generation, ad_copy_view),
            analysis: phase_view(&form.analysis, analysis_view),
        }
    }
}

fn phase_view<T, V>(phase: &Phase<T>, view: fn(&T) -> V) -> PhaseView<V> {
    match phase {
        Phase::Idle => PhaseView::Idle,
        Phase::Pending => PhaseView::Pending,
        Phase::Success(result) => PhaseView::Success {
            result: view(result),
        },
        Phase::Error(message) => PhaseView::Error {
            message: message.clone(),
        },
    }
}

fn ad_copy_view(copy: &AdCopy) -> AdCopyView {
    AdCopyView {
        headlines: copy
            .headlines
            .iter()
            .map(|text| copy_item(text, HEADLINE_MAX_LENGTH))
            .collect(),
        descriptions: copy
            .descriptions
            .iter()
            .map(|text| copy_item(text, DESCRIPTION_MAX_LENGTH))
            .collect(),
    }
}

fn copy_item(text: &str, budget: usize) -> CopyItem {
    CopyItem {
        text: text.to_string(),
        over_budget: text.chars().count() > budget,
    }
}

fn analysis_view(analysis: &WebsiteAnalysis) -> AnalysisView {
    AnalysisView {
        product_name: analysis.product_name.clone(),
        target_audience: analysis.target_audience.clone(),
        keywords: analysis.keywords.clone(),
    }
}

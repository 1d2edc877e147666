use crate::copy::request::{Language, ToneOfVoice};
use crate::parse::{AdCopy, WebsiteAnalysis};

/// Lifecycle of one operation. There is no transition back to `Idle`;
/// a new begin replaces whatever phase was there.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Idle,
    Pending,
    Success(T),
    Error(String),
}

impl<T> Default for Phase<T> {
    fn default() -> Self {
        Phase::Idle
    }
}

impl<T> Phase<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }
}

/// Form fields plus the two operation lifecycles of a session. Generation
/// and analysis are independent; the only coupling is the one-way handoff
/// of analysis results into the generation fields.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub product_name: String,
    pub target_audience: String,
    pub keywords: String,
    pub tone: ToneOfVoice,
    pub language: Language,
    pub competitor_url: String,
    pub generation: Phase<AdCopy>,
    pub analysis: Phase<WebsiteAnalysis>,
}

impl FormState {
    pub fn can_generate(&self) -> bool {
        !self.product_name.trim().is_empty()
            && !self.target_audience.trim().is_empty()
            && !self.generation.is_pending()
    }

    pub fn can_analyze(&self) -> bool {
        !self.competitor_url.trim().is_empty()
            && !self.analysis.is_pending()
    }

    /// Returns false when the gate rejects the action. On success the
    /// prior result or error for this operation is cleared.
    pub fn begin_generation(&mut self) -> bool {
        if !self.can_generate() {
            return false;
        }
        self.generation = Phase::Pending;
        true
    }

    pub fn begin_analysis(&mut self) -> bool {
        if !self.can_analyze() {
            return false;
        }
        self.analysis = Phase::Pending;
        true
    }

    // Resolutions are applied last-response-wins, even if the phase is no
    // longer Pending by the time the outcome arrives.
    pub fn resolve_generation(&mut self, outcome: Result<AdCopy, String>) {
        self.generation = match outcome {
            Ok(copy) => Phase::Success(copy),
            Err(message) => Phase::Error(message),
        };
    }

    /// A successful analysis overwrites the generation form fields; prior
    /// values are not merged or preserved.
    pub fn resolve_analysis(
        &mut self,
        outcome: Result<WebsiteAnalysis, String>,
    ) {
        match outcome {
            Ok(analysis) => {
                self.product_name = analysis.product_name.clone();
                self.target_audience = analysis.target_audience.clone();
                self.keywords = analysis.keywords.clone();
                self.analysis = Phase::Success(analysis);
            }
            Err(message) => self.analysis = Phase::Error(message),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            product_name: "Artisan Coffee".to_string(),
            target_audience: "Coffee lovers".to_string(),
            ..Default::default()
        }
    }

    fn ad_copy() -> AdCopy {
        AdCopy {
            headlines: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
            ],
            descriptions: vec!["x".to_string(), "y".to_string()],
        }
    }

    #[test]
    fn test_generate_gate_requires_both_fields() {
        let mut form = FormState::default();
        assert!(!form.can_generate());

        form.product_name = "Artisan Coffee".to_string();
        assert!(!form.can_generate());

        form.target_audience = "Coffee lovers".to_string();
        assert!(form.can_generate());
    }

    #[test]
    fn test_generate_gate_closed_while_pending() {
        let mut form = filled_form();

        assert!(form.begin_generation());
        assert!(!form.can_generate());
        assert!(!form.begin_generation());
    }

    #[test]
    fn test_analyze_gate_requires_url() {
        let mut form = FormState::default();
        assert!(!form.can_analyze());

        form.competitor_url = "example.com".to_string();
        assert!(form.can_analyze());

        assert!(form.begin_analysis());
        assert!(!form.can_analyze());
    }

    #[test]
    fn test_begin_clears_prior_error() {
        let mut form = filled_form();
        form.generation = Phase::Error("boom".to_string());

        assert!(form.begin_generation());
        assert_eq!(form.generation, Phase::Pending);
    }

    #[test]
    fn test_generation_success_replaces_copy_wholesale() {
        let mut form = filled_form();
        form.begin_generation();
        form.resolve_generation(Ok(ad_copy()));
        assert_eq!(form.generation, Phase::Success(ad_copy()));

        let replacement = AdCopy {
            headlines: vec!["new".to_string()],
            descriptions: vec!["copy".to_string()],
        };
        form.begin_generation();
        form.resolve_generation(Ok(replacement.clone()));
        assert_eq!(form.generation, Phase::Success(replacement));
    }

    #[test]
    fn test_analysis_success_overwrites_form_fields() {
        let mut form = filled_form();
        form.keywords = "old keywords".to_string();
        form.competitor_url = "example.com".to_string();

        form.begin_analysis();
        form.resolve_analysis(Ok(WebsiteAnalysis {
            product_name: "P".to_string(),
            target_audience: "T".to_string(),
            keywords: "k1, k2".to_string(),
        }));

        assert_eq!(form.product_name, "P");
        assert_eq!(form.target_audience, "T");
        assert_eq!(form.keywords, "k1, k2");
    }

    #[test]
    fn test_analysis_error_keeps_form_fields() {
        let mut form = filled_form();
        form.competitor_url = "example.com".to_string();

        form.begin_analysis();
        form.resolve_analysis(Err("failed".to_string()));

        assert_eq!(form.product_name, "Artisan Coffee");
        assert_eq!(form.analysis, Phase::Error("failed".to_string()));
    }

    #[test]
    fn test_stale_resolution_is_last_response_wins() {
        let mut form = filled_form();
        form.begin_generation();
        form.resolve_generation(Err("first".to_string()));

        // A second outcome lands without a new begin.
        form.resolve_generation(Ok(ad_copy()));
        assert_eq!(form.generation, Phase::Success(ad_copy()));
    }

    #[test]
    fn test_generation_scenario() {
        let mut form = filled_form();
        form.generation = Phase::Error("previous failure".to_string());

        assert!(form.begin_generation());
        assert_eq!(form.generation, Phase::Pending);

        form.resolve_generation(Ok(ad_copy()));
        let Phase::Success(copy) = &form.generation else {
            panic!("expected success");
        };
        assert_eq!(copy.headlines.len(), 3);
        assert_eq!(copy.descriptions.len(), 2);
        assert!(form.can_generate());
    }
}

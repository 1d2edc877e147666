use serde::{Deserialize, Serialize};

use crate::copy::request::{Language, ToneOfVoice};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum Action {
    SetField { field: Field, value: String },
    SetTone { tone: ToneOfVoice },
    SetLanguage { language: Language },
    Generate,
    Analyze,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ProductName,
    TargetAudience,
    Keywords,
    CompetitorUrl,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_actions() {
        let action = serde_json::from_str::<Action>(
            r#"{"action":"set_field","field":"product_name","value":"Artisan Coffee"}"#,
        )
        .unwrap();
        assert!(matches!(
            action,
            Action::SetField {
                field: Field::ProductName,
                ..
            }
        ));

        let action =
            serde_json::from_str::<Action>(r#"{"action":"generate"}"#)
                .unwrap();
        assert!(matches!(action, Action::Generate));
    }
}

use anyhow::Context;
use serde_json::Value;

/// Validated ad copy. Only constructed after every required field passed
/// the structural checks below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdCopy {
    pub headlines: Vec<String>,
    pub descriptions: Vec<String>,
}

/// Validated competitor website analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteAnalysis {
    pub product_name: String,
    pub target_audience: String,
    pub keywords: String,
}

pub fn parse_ad_copy(raw: &str) -> anyhow::Result<AdCopy> {
    let value = serde_json::from_str::<Value>(raw.trim())
        .context("response is not valid JSON")?;

    Ok(AdCopy {
        headlines: string_array(&value, "headlines")?,
        descriptions: string_array(&value, "descriptions")?,
    })
}

pub fn parse_analysis(raw: &str) -> anyhow::Result<WebsiteAnalysis> {
    let cleaned = strip_code_fence(raw.trim());
    let value = serde_json::from_str::<Value>(cleaned)
        .context("response is not valid JSON")?;

    Ok(WebsiteAnalysis {
        product_name: string_field(&value, "productName")?,
        target_audience: string_field(&value, "targetAudience")?,
        keywords: string_field(&value, "keywords")?,
    })
}

// The model sometimes wraps the JSON in markdown fences despite being told
// not to. Leading and trailing fences are stripped independently.
fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw;
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

fn string_array(value: &Value, key: &str) -> anyhow::Result<Vec<String>> {
    let items = value
        .get(key)
        .with_context(|| format!("`{}` is missing", key))?
        .as_array()
        .with_context(|| format!("`{}` is not an array", key))?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).with_context(|| {
                format!("`{}` contains a non-string element", key)
            })
        })
        .collect()
}

fn string_field(value: &Value, key: &str) -> anyhow::Result<String> {
    value
        .get(key)
        .with_context(|| format!("`{}` is missing", key))?
        .as_str()
        .map(str::to_string)
        .with_context(|| format!("`{}` is not a string", key))
}

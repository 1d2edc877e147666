use anyhow::ensure;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Body, Client,
};

pub mod content_generation;

static BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone)]
pub struct Models {
    base_url: String,
    client: Client,
}

impl Models {
    pub fn new(api_key: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Content-Type",
            HeaderValue::from_str("application/json").unwrap(),
        );
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).unwrap(),
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            base_url: BASE_URL.to_string(),
            client,
        }
    }

    async fn string_response<R: Into<Body>>(
        &self,
        request: R,
        model: &str,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/{}:generateContent", self.base_url, model))
            .body(request)
            .send()
            .await?;

        let status_code = response.status();
        let text = response.text().await;

        ensure!(
            status_code.is_success(),
            "status code: {}, response: {:?}",
            status_code,
            text
        );

        Ok(text?)
    }
}

use shuttle_runtime::{Error, SecretStore, Secrets};

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
) -> shuttle_axum::ShuttleAxum {
    if let Some(env) = secret_store.get("ENV") {
        if env == "prod" {
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::INFO)
                .init();
        }
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let Some(gemini_api_key) = secret_store.get("GEMINI_API_KEY") else {
        return Err(Error::BuildPanic(
            "GEMINI_API_KEY was not found".to_string(),
        ));
    };

    let config = secret_store.get("CONFIG").unwrap_or_default();
    let config_name = format!("Config{}.toml", config);

    let router = api::serve(gemini_api_key, &config_name)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(router.into())
}

use anyhow::Context;
use gemini::models::{
    self,
    content_generation::{ContentGeneration, ContentGenerationRequest},
};
use toml::{map::Map, Value};
use util::workspace_dir;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let secrets = load_env()?;

    let api_key = util::secret(&secrets, "GEMINI_API_KEY")?;

    let models = models::Models::new(&api_key);

    let result = models
        .gemini_2_5_flash(ContentGenerationRequest::from_prompt(
            "Write one short slogan for a coffee roastery.",
        ))
        .await?;

    println!("{:?}", result.text());

    Ok(())
}

fn load_env() -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir();
    let secrets =
        std::fs::read_to_string(workspace_dir.join("Secrets.dev.toml"))
            .context("failed to read Secrets.dev.toml")?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .context("failed to parse Secrets.dev.toml")
}

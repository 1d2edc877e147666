use std::net::{Ipv4Addr, SocketAddr};

use api::serve;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let secrets = util::load_env()?;

    let gemini_api_key = util::secret(&secrets, "GEMINI_API_KEY")?;

    let config = secrets
        .get("CONFIG")
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    let config_name = format!("Config{}.toml", config);

    let router = serve(gemini_api_key, &config_name).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?)
}

use axum::{routing::get, routing::post, Router};

use axum::http::HeaderValue;
use gemini::models::Models;
use tower_http::cors::CorsLayer;
use tracing::info;
use util::load_config;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;
use utoipauto::utoipauto;

pub mod agent;
pub mod analysis;
pub mod copy;
pub mod healthz;
pub mod not_found;
pub mod parse;
mod response;
pub mod session;

pub enum ApiError {
    ClientError(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    gemini: Models,
}

#[derive(Clone, Debug)]
pub struct Server {
    pub allowed_origin: String,
}

pub async fn serve(
    gemini_api_key: String,
    config_name: &str,
) -> anyhow::Result<Router> {
    #[utoipauto(paths = "./libs/api/src")]
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "adsmith", description = "Ad copy generation API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let config = load_config(config_name)?;
    let server = Server {
        allowed_origin: config["server"]["allowed_origin"]
            .as_str()
            .unwrap()
            .to_string(),
    };

    let gemini_client = Models::new(&gemini_api_key);

    let state = ApiState {
        gemini: gemini_client,
    };

    let origins: [HeaderValue; 1] = [server.allowed_origin.parse()?];

    // ad copy generation
    let copy_router = Router::new()
        .route("/", post(copy::generate_ad_copy))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // competitor website analysis
    let analysis_router = Router::new()
        .route("/", post(analysis::analyze_website))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // interactive form session
    let session_router = Router::new()
        .route("/", get(session::ws))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/copy", copy_router)
        .nest("/analysis", analysis_router)
        .nest("/ws", session_router)
        .layer(CorsLayer::new().allow_origin(origins))
        .fallback(not_found::get_404);

    Ok(router)
}

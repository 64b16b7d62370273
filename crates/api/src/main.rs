use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gear_advisor_core::advisor::{
    AnalyzeOptions, BuildAdvisor, CachedRecommendation, InMemoryStore, MetaBuildReference,
    ParseError, PromptOptions,
};
use gear_advisor_core::domain::recommendation::Recommendation;
use gear_advisor_core::domain::snapshot::{CharacterId, CharacterSnapshot};
use gear_advisor_core::llm::anthropic::AnthropicClient;
use gear_advisor_core::llm::error::TransportError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = gear_advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let advisor = match AnthropicClient::from_settings(&settings) {
        Ok(client) => Some(Arc::new(BuildAdvisor::new(
            Arc::new(client),
            Arc::new(InMemoryStore::new()),
        ))),
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "producer unavailable; starting API in degraded mode");
            None
        }
    };

    let state = AppState { advisor };

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let port = settings.port.unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/heroes/:id/analysis",
            get(get_cached_analysis).post(post_analysis),
        )
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Clone)]
struct AppState {
    advisor: Option<Arc<BuildAdvisor>>,
}

impl AppState {
    fn advisor(&self) -> Result<&BuildAdvisor, ApiError> {
        self.advisor
            .as_deref()
            .ok_or_else(|| api_error(StatusCode::SERVICE_UNAVAILABLE, "advisor is not configured"))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisRequest {
    snapshot: CharacterSnapshot,
    #[serde(default)]
    enhanced: bool,
    #[serde(default)]
    force_refresh: bool,
    #[serde(default)]
    use_meta_builds: bool,
    #[serde(default)]
    focus_on_survivability: bool,
    #[serde(default)]
    meta_reference: Option<MetaBuildReference>,
}

impl AnalysisRequest {
    fn into_parts(self) -> (CharacterSnapshot, AnalyzeOptions) {
        let options = AnalyzeOptions {
            force_refresh: self.force_refresh,
            enhanced: self.enhanced,
            prompt: PromptOptions {
                enhanced: self.enhanced,
                use_meta_builds: self.use_meta_builds,
                focus_on_survivability: self.focus_on_survivability,
            },
            meta_reference: self.meta_reference,
        };
        (self.snapshot, options)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

async fn post_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let advisor = state.advisor()?;

    let id = CharacterId::from(id.as_str());
    if req.snapshot.id != id {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            format!("path id {id} does not match snapshot id {}", req.snapshot.id),
        ));
    }

    let (snapshot, options) = req.into_parts();
    let recommendation = advisor
        .analyze(&snapshot, options)
        .await
        .map_err(|e| analysis_error(&id, e))?;

    Ok(Json(recommendation))
}

async fn get_cached_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CachedRecommendation>, ApiError> {
    let advisor = state.advisor()?;
    let id = CharacterId::from(id.as_str());

    let entry = advisor
        .cached(&id)
        .await
        .map_err(|e| {
            sentry_anyhow::capture_anyhow(&e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}"))
        })?
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("no analysis cached for {id}")))?;

    Ok(Json(entry))
}

fn analysis_error(id: &CharacterId, err: anyhow::Error) -> ApiError {
    let status = status_for(&err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        sentry_anyhow::capture_anyhow(&err);
    }
    tracing::error!(character_id = %id, %status, error = %err, "analysis failed");
    api_error(status, format!("{err:#}"))
}

fn status_for(err: &anyhow::Error) -> StatusCode {
    if err.downcast_ref::<ParseError>().is_some() {
        StatusCode::BAD_GATEWAY
    } else if err.downcast_ref::<TransportError>().is_some() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &gear_advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gear_advisor_core::llm::Provider;
    use serde_json::json;

    #[test]
    fn request_defaults_flags_and_keeps_meta_reference() {
        let req: AnalysisRequest = serde_json::from_value(json!({
            "snapshot": {"id": 99, "class": "monk"},
            "enhanced": true,
            "useMetaBuilds": true,
            "metaReference": {"name": "Inna Mystic Ally", "sets": ["Inna's Mantra"]}
        }))
        .unwrap();

        let (snapshot, options) = req.into_parts();
        assert_eq!(snapshot.id, CharacterId::from("99"));
        assert!(options.enhanced);
        assert!(options.prompt.enhanced);
        assert!(options.prompt.use_meta_builds);
        assert!(!options.prompt.focus_on_survivability);
        assert!(!options.force_refresh);
        assert_eq!(options.meta_reference.unwrap().sets, vec!["Inna's Mantra".to_string()]);
    }

    #[test]
    fn typed_failures_map_to_distinct_statuses() {
        let parse = anyhow::Error::new(ParseError {
            detail: "expected value".to_string(),
            raw_output: "nope".to_string(),
        });
        let transport = anyhow::Error::new(TransportError {
            provider: Provider::Anthropic,
            stage: "request",
            detail: "connection refused".to_string(),
            raw_output: None,
            raw_response_json: None,
        });

        assert_eq!(status_for(&parse), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(&transport), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            status_for(&anyhow::anyhow!("store offline")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn degraded_state_reports_unavailable() {
        let state = AppState { advisor: None };
        let (status, _) = state.advisor().err().unwrap();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}

//! HTTP transport for the scoring engine.
//!
//! Exposes a single `POST /analyze` endpoint. Errors inside the analysis
//! (unknown test type, probe failures) are returned with status 200 and an
//! `error` field; only a missing URL is an HTTP-level 400.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::Settings;
use crate::core::assessor::Assessor;
use crate::core::probe::{HttpProber, Prober};
use crate::error::{AssessError, ServeError};

/// Body of `POST /analyze`. Both fields are optional on the wire.
///
/// The fields are kept as raw JSON so that a value of the wrong type is answered
/// with a report-level error instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub test_type: Option<Value>,
}

impl AnalyzeRequest {
    /// The target to assess, or `None` when the URL is absent or falsy
    /// (`null`, `""`, `false`, `0`, `[]`, `{}`).
    ///
    /// Any other non-string value is passed on as its JSON text; it then fails
    /// at the probe like any other malformed URL.
    pub fn target(&self) -> Option<String> {
        match self.url.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Array(items) if items.is_empty() => None,
            Value::Object(fields) if fields.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The selector's wire string. Missing or non-string selectors are empty and
    /// therefore unknown.
    pub fn selector(&self) -> &str {
        self.test_type.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}

/// Payload for requests rejected at the HTTP level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

async fn analyze_handler<P: Prober + 'static>(
    State(assessor): State<Arc<Assessor<P>>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let Some(url) = request.target() else {
        warn!("Analyze request without a URL.");
        let body = ErrorBody {
            error: AssessError::MissingUrl.to_string(),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    let test_type = request.selector();
    info!(url = %url, test_type, "Analyze request received.");

    let report = assessor.assess_raw(&url, test_type).await;
    (StatusCode::OK, Json(report)).into_response()
}

/// Creates the router; any origin may call it.
pub fn create_router<P: Prober + 'static>(assessor: Arc<Assessor<P>>) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler::<P>))
        .layer(CorsLayer::permissive())
        .with_state(assessor)
}

/// Serves `router` on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), ServeError> {
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Binds the configured address and runs the service with the production prober.
pub async fn run(settings: &Settings) -> Result<(), ServeError> {
    let prober = HttpProber::new(settings)?;
    let router = create_router(Arc::new(Assessor::new(prober)));

    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: settings.bind_addr,
            source,
        })?;
    info!(addr = %settings.bind_addr, "CIA scanner listening.");

    serve(listener, router).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received."),
        Err(e) => {
            warn!(error = %e, "Could not listen for Ctrl-C, serving until killed.");
            std::future::pending::<()>().await;
        }
    }
}

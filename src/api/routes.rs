use crate::AppState;
use crate::api::handlers::{health, proxy};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{any, get},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Routes mounted under `/api`
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/openapi.json", get(health::openapi))
        // Every method reaches the handler so non-POST requests get its 405 body.
        .route("/call-gemini", any(proxy::call_gemini))
}

/// Full application: API routes, optional UI bundle and HTTP layers
pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    let app = Router::new()
        .nest("/api", create_router())
        .with_state(state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", crate::api::ApiDoc::openapi()),
        )
    };

    let static_dir = &config.ui.static_dir;
    let index_path = static_dir.join("index.html");
    let app = if index_path.exists() {
        info!("Serving UI from {:?}", static_dir);
        // The UI keeps page identity in memory, so unknown paths get index.html.
        let spa_service = ServeDir::new(static_dir)
            .append_index_html_on_directories(true)
            .fallback(ServeFile::new(&index_path));
        app.fallback_service(spa_service)
    } else {
        warn!(
            "UI bundle not found at {:?}; serving API routes only",
            static_dir
        );
        app
    };

    app.layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server.cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

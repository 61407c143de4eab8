// API Server Implementation

use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use tracing::info;

use crate::api::{config::ApiConfig, middleware, routes, state::AppState};

/// API Server
pub struct ApiServer {
    config: ApiConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create new API server
    pub fn new(config: ApiConfig) -> Result<Self> {
        let state = Arc::new(AppState::new(config.clone()));

        Ok(Self { config, state })
    }

    /// Build the router
    pub fn build_router(&self) -> Router {
        let mut router: Router<Arc<AppState>> = Router::new()
            .route("/", get(routes::certificates::list_certificates))
            .route("/count", get(routes::certificates::count_certificates))
            .route("/health", get(routes::health::health_check))
            .merge(self.swagger_routes());

        if self.config.enable_cors {
            router = router.layer(middleware::cors_layer());
        }

        router
            .layer(middleware::logging_layer())
            .with_state(self.state.clone())
    }

    /// Build Swagger UI routes
    fn swagger_routes(&self) -> Router<Arc<AppState>> {
        if self.config.enable_swagger {
            use utoipa::OpenApi;
            use utoipa_swagger_ui::SwaggerUi;

            let openapi = crate::api::openapi::ApiDoc::openapi();

            Router::new().merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        } else {
            Router::new()
        }
    }

    /// Run the server
    pub async fn run(self) -> Result<()> {
        let app = self.build_router();

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("certpulse API server listening on {}", addr);
        info!(
            "serving certificate status for root {}",
            self.config.certs_dir.display()
        );
        if self.config.enable_swagger {
            info!("OpenAPI documentation available at: http://{}/api/docs", addr);
        }

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get the application state
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }
}

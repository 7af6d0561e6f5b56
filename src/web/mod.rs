//! HTTP layer: axum router, shared state and server-rendered pages.

pub mod error;
pub mod handlers;
pub mod links;
pub mod view_models;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::{ServerConfig, SiteConfig};
use crate::content::ContentStore;

pub use error::AppError;
use handlers::{blog, companies, contact, encyclopedia, pages, services};
use view_models::SiteChrome;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub site: Arc<SiteConfig>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        tracing::info!("Opening content store...");
        let store = ContentStore::open(&config.content_dir);
        Self::from_store(store, config.site.clone(), config.static_dir.clone())
    }

    pub fn from_store(store: ContentStore, site: SiteConfig, static_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(store),
            site: Arc::new(site),
            static_dir,
        }
    }

    pub fn chrome(&self) -> SiteChrome {
        SiteChrome::from_config(&self.site)
    }

    pub fn not_found(&self, message: impl Into<String>) -> AppError {
        AppError::NotFound {
            message: message.into(),
            site: self.chrome(),
        }
    }

    /// Absolute URL for a site path (used by share links).
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site.base_url, path)
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Pages
        .route("/", get(pages::home_page))
        .route("/about", get(pages::about_page))
        .route("/contact", get(contact::contact_page).post(contact::submit_contact))

        .route("/services", get(services::services_page))
        .route("/services/:service_id", get(services::service_page))

        .route("/companies", get(companies::companies_page))
        .route("/companies/:company_id", get(companies::company_page))

        .route("/blog", get(blog::blog_page))
        .route("/blog/:topic", get(blog::topic_page))
        .route("/blog/:topic/:article_id", get(blog::article_page))

        .route("/encyclopedia", get(encyclopedia::encyclopedia_page))
        .route("/encyclopedia/:category", get(encyclopedia::category_page))
        .route("/encyclopedia/:category/:entry_id", get(encyclopedia::entry_page))

        // Images, stylesheet
        .nest_service("/static", static_files)
        .fallback(pages::not_found_page)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(axum::extract::State(state): axum::extract::State<AppState>) -> impl IntoResponse {
    let store = &state.store;
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "content": {
            "services": store.list_services().len(),
            "blog_topics": store.list_blog_topics().len(),
            "encyclopedia_categories": store.list_encyclopedia_categories().len(),
            "companies": store.list_companies().len(),
        }
    }))
}

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::handlers::pages::NotFoundTemplate;
use super::view_models::SiteChrome;

#[derive(Debug)]
pub enum AppError {
    /// Primary entity of the page does not exist.
    NotFound { message: String, site: SiteChrome },
    Template(askama::Error),
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { message, site } => {
                tracing::debug!("Not found: {}", message);
                let page = NotFoundTemplate { site, message };
                match page.render() {
                    Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
                    Err(e) => {
                        tracing::error!("Failed to render not-found page: {}", e);
                        (StatusCode::NOT_FOUND, "الصفحة غير موجودة").into_response()
                    }
                }
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

// Page handlers for HTML rendering with Askama: home, about, not-found

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::web::error::{render, AppError};
use crate::web::view_models::{CompanyCard, ContentCard, ServiceCard, SiteChrome};
use crate::web::AppState;

/// Items per section on the home page.
const FEATURED_COUNT: usize = 3;

fn featured<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(FEATURED_COUNT)]
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub site: SiteChrome,
    pub services: Vec<ServiceCard>,
    pub topics: Vec<ContentCard>,
    pub categories: Vec<ContentCard>,
    pub companies: Vec<CompanyCard>,
}

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = &state.store;

    let template = HomeTemplate {
        site: state.chrome(),
        services: ServiceCard::featured_row(featured(store.list_services())),
        topics: featured(store.list_blog_topics())
            .iter()
            .map(ContentCard::from_topic)
            .collect(),
        categories: featured(store.list_encyclopedia_categories())
            .iter()
            .map(ContentCard::from_category)
            .collect(),
        companies: featured(store.list_companies())
            .iter()
            .map(|c| CompanyCard::new(c, store))
            .collect(),
    };

    render(&template)
}

// ============================================================================
// About Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub site: SiteChrome,
    pub service_count: usize,
    pub company_count: usize,
    pub topic_count: usize,
}

pub async fn about_page(State(state): State<AppState>) -> AboutTemplate {
    AboutTemplate {
        site: state.chrome(),
        service_count: state.store.list_services().len(),
        company_count: state.store.list_companies().len(),
        topic_count: state.store.list_blog_topics().len(),
    }
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub site: SiteChrome,
    pub message: String,
}

pub async fn not_found_page(State(state): State<AppState>) -> AppError {
    state.not_found("unknown route")
}

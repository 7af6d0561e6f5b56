// Services directory and service detail pages

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::web::error::{render, AppError};
use crate::web::view_models::{CardVariant, CompanyCard, Crumb, ServiceCard, SiteChrome};
use crate::web::AppState;

#[derive(Template)]
#[template(path = "pages/services.html")]
pub struct ServicesTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub services: Vec<ServiceCard>,
}

pub async fn services_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = ServicesTemplate {
        site: state.chrome(),
        crumbs: vec![Crumb::current("الخدمات")],
        services: state
            .store
            .list_services()
            .iter()
            .map(|s| ServiceCard::new(s, CardVariant::Default))
            .collect(),
    };

    render(&template)
}

#[derive(Template)]
#[template(path = "pages/service.html")]
pub struct ServiceTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub card: ServiceCard,
    pub full_description: String,
    /// Companies listing this service among their offerings.
    pub companies: Vec<CompanyCard>,
}

pub async fn service_page(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let store = &state.store;
    let Some(service) = store.get_service(&service_id) else {
        return Err(state.not_found(format!("service {}", service_id)));
    };

    let companies = store
        .get_companies_by_service(&service.id)
        .into_iter()
        .map(|c| CompanyCard::new(c, store))
        .collect();

    let template = ServiceTemplate {
        site: state.chrome(),
        crumbs: vec![
            Crumb::link("الخدمات", "/services"),
            Crumb::current(service.title.clone()),
        ],
        card: ServiceCard::new(service, CardVariant::Featured),
        full_description: if service.full_description.is_empty() {
            service.description.clone()
        } else {
            service.full_description.clone()
        },
        companies,
    };

    render(&template)
}

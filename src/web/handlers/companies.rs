// Company directory and company profile pages

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::content::CompanyContact;
use crate::web::error::{render, AppError};
use crate::web::links;
use crate::web::view_models::{CompanyCard, Crumb, SiteChrome};
use crate::web::AppState;

#[derive(Template)]
#[template(path = "pages/companies.html")]
pub struct CompaniesTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub companies: Vec<CompanyCard>,
}

pub async fn companies_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = &state.store;
    let template = CompaniesTemplate {
        site: state.chrome(),
        crumbs: vec![Crumb::current("الشركات")],
        companies: store
            .list_companies()
            .iter()
            .map(|c| CompanyCard::new(c, store))
            .collect(),
    };

    render(&template)
}

/// Contact block of a company profile, with ready-made hrefs.
pub struct ContactBlock {
    pub phone: String,
    pub phone_href: String,
    pub email: String,
    pub email_href: String,
    pub website: String,
}

impl ContactBlock {
    fn new(contact: &CompanyContact) -> Self {
        Self {
            phone: contact.phone.clone(),
            phone_href: links::tel_href(&contact.phone),
            email: contact.email.clone(),
            email_href: links::mailto_href(&contact.email),
            website: contact.website.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/company.html")]
pub struct CompanyTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub card: CompanyCard,
    pub full_description: String,
    pub features: Vec<String>,
    pub contact: ContactBlock,
}

pub async fn company_page(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let store = &state.store;
    let Some(company) = store.get_company(&company_id) else {
        return Err(state.not_found(format!("company {}", company_id)));
    };

    let template = CompanyTemplate {
        site: state.chrome(),
        crumbs: vec![
            Crumb::link("الشركات", "/companies"),
            Crumb::current(company.name.clone()),
        ],
        card: CompanyCard::new(company, store),
        full_description: company.full_description.clone(),
        features: company.features.clone(),
        contact: ContactBlock::new(&company.contact),
    };

    render(&template)
}

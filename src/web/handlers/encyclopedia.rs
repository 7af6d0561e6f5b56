// Encyclopedia pages: categories, category entries, single entry

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::utils::paragraphs;
use crate::web::error::{render, AppError};
use crate::web::view_models::{entry_facts, ContentCard, Crumb, EntryCard, SiteChrome};
use crate::web::AppState;

#[derive(Template)]
#[template(path = "pages/encyclopedia.html")]
pub struct EncyclopediaTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub categories: Vec<ContentCard>,
}

pub async fn encyclopedia_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = EncyclopediaTemplate {
        site: state.chrome(),
        crumbs: vec![Crumb::current("الموسوعة")],
        categories: state
            .store
            .list_encyclopedia_categories()
            .iter()
            .map(ContentCard::from_category)
            .collect(),
    };

    render(&template)
}

#[derive(Template)]
#[template(path = "pages/category.html")]
pub struct CategoryTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub title: String,
    pub description: String,
    pub entries: Vec<EntryCard>,
}

pub async fn category_page(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let store = &state.store;
    let Some(category) = store.get_encyclopedia_category(&category_id) else {
        return Err(state.not_found(format!("encyclopedia category {}", category_id)));
    };

    let entries = store
        .list_category_entries(&category.id)
        .iter()
        .map(|entry| EntryCard::new(&category.id, entry))
        .collect();

    let template = CategoryTemplate {
        site: state.chrome(),
        crumbs: vec![
            Crumb::link("الموسوعة", "/encyclopedia"),
            Crumb::current(category.title.clone()),
        ],
        title: category.title.clone(),
        description: category.description.clone(),
        entries,
    };

    render(&template)
}

#[derive(Template)]
#[template(path = "pages/entry.html")]
pub struct EntryTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub title: String,
    pub description: String,
    pub paragraphs: Vec<String>,
    pub paradigms: Vec<String>,
    pub facts: Vec<(&'static str, String)>,
}

pub async fn entry_page(
    State(state): State<AppState>,
    Path((category_id, entry_id)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let store = &state.store;
    let Some(entry) = store.get_category_entry(&category_id, &entry_id) else {
        return Err(state.not_found(format!("encyclopedia entry {}/{}", category_id, entry_id)));
    };

    let category_title = store
        .get_encyclopedia_category(&category_id)
        .map(|c| c.title.clone())
        .unwrap_or_default();

    let template = EntryTemplate {
        site: state.chrome(),
        crumbs: vec![
            Crumb::link("الموسوعة", "/encyclopedia"),
            Crumb::link(category_title, format!("/encyclopedia/{}", category_id)),
            Crumb::current(entry.title.clone()),
        ],
        paragraphs: paragraphs(&entry.content).into_iter().map(str::to_string).collect(),
        paradigms: entry.paradigms.clone(),
        facts: entry_facts(&entry),
        title: entry.title,
        description: entry.description,
    };

    render(&template)
}

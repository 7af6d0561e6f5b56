// Blog pages: topic list, topic articles, single article

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::web::error::{render, AppError};
use crate::web::links::{share_links, ShareLinks};
use crate::web::view_models::{article_path, ArticleCard, ContentCard, Crumb, SiteChrome};
use crate::web::AppState;

const RELATED_LIMIT: usize = 3;

#[derive(Template)]
#[template(path = "pages/blog.html")]
pub struct BlogTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub topics: Vec<ContentCard>,
}

pub async fn blog_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = BlogTemplate {
        site: state.chrome(),
        crumbs: vec![Crumb::current("المدونة")],
        topics: state
            .store
            .list_blog_topics()
            .iter()
            .map(ContentCard::from_topic)
            .collect(),
    };

    render(&template)
}

#[derive(Template)]
#[template(path = "pages/topic.html")]
pub struct TopicTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub title: String,
    pub description: String,
    pub articles: Vec<ArticleCard>,
}

pub async fn topic_page(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let store = &state.store;
    let Some(topic) = store.get_blog_topic(&topic_id) else {
        return Err(state.not_found(format!("blog topic {}", topic_id)));
    };

    let articles = store
        .list_topic_articles(&topic.id)
        .iter()
        .map(|article| ArticleCard::from_article(&topic.id, article))
        .collect();

    let template = TopicTemplate {
        site: state.chrome(),
        crumbs: vec![
            Crumb::link("المدونة", "/blog"),
            Crumb::current(topic.title.clone()),
        ],
        title: topic.title.clone(),
        description: topic.description.clone(),
        articles,
    };

    render(&template)
}

#[derive(Template)]
#[template(path = "pages/article.html")]
pub struct ArticleTemplate {
    pub site: SiteChrome,
    pub crumbs: Vec<Crumb>,
    pub card: ArticleCard,
    pub paragraphs: Vec<String>,
    pub word_count: usize,
    pub share: ShareLinks,
    pub related: Vec<ArticleCard>,
}

pub async fn article_page(
    State(state): State<AppState>,
    Path((topic_id, article_id)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let store = &state.store;
    let Some(article) = store.get_article(&topic_id, &article_id) else {
        return Err(state.not_found(format!("article {}/{}", topic_id, article_id)));
    };

    // A missing topic only blanks the breadcrumb label
    let topic_title = store
        .get_blog_topic(&topic_id)
        .map(|t| t.title.clone())
        .unwrap_or_default();

    let card = ArticleCard::from_article(&topic_id, &article);
    let page_url = state.absolute_url(&article_path(&topic_id, &article_id));
    let share = share_links(&page_url, &article.title);

    let template = ArticleTemplate {
        site: state.chrome(),
        crumbs: vec![
            Crumb::link("المدونة", "/blog"),
            Crumb::link(topic_title, format!("/blog/{}", topic_id)),
            Crumb::current(article.title.clone()),
        ],
        paragraphs: article.paragraphs().into_iter().map(str::to_string).collect(),
        word_count: article.word_count(),
        share,
        related: article
            .related_articles
            .iter()
            .take(RELATED_LIMIT)
            .map(ArticleCard::from_ref)
            .collect(),
        card,
    };

    render(&template)
}

//! Content Store
//!
//! Read-only access to services, blog topics/articles, encyclopedia
//! categories/entries and companies.
//!
//! Top-level collections are read once when the store is opened. Topic and
//! category partitions are read on first use and memoised. Every failure to
//! read or parse a document degrades to "no content" (empty list / `None`)
//! after being logged; callers never see an error.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use moka::sync::Cache;
use serde::de::DeserializeOwned;

use super::collection::Collection;
use super::error::ContentError;
use super::loader::{self, read_json};
use super::types::{
    Article, BlogTopic, Company, EncyclopediaCategory, EncyclopediaEntry, Record, Service,
};

/// Shared, immutable partition (all articles of a topic / entries of a category).
pub type Partition<T> = Arc<Collection<T>>;

const PARTITION_CACHE_CAPACITY: u64 = 1_000;

pub struct ContentStore {
    root: PathBuf,
    services: Collection<Service>,
    topics: Collection<BlogTopic>,
    categories: Collection<EncyclopediaCategory>,
    companies: Collection<Company>,
    articles: Cache<String, Partition<Article>>,
    entries: Cache<String, Partition<EncyclopediaEntry>>,
    /// Top-level documents that could not be loaded at open time, with the reason.
    load_errors: Vec<(&'static str, String)>,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("root", &self.root)
            .field("services", &self.services.len())
            .field("topics", &self.topics.len())
            .field("categories", &self.categories.len())
            .field("companies", &self.companies.len())
            .finish()
    }
}

impl ContentStore {
    /// Open the store rooted at `root` and load the top-level collections.
    ///
    /// Never fails: an unreadable collection is logged and left empty.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        tracing::info!("Loading content collections from {}", root.display());

        let mut load_errors = Vec::new();
        let services = load_collection(&root, loader::SERVICES_FILE, &mut load_errors);
        let topics = load_collection(&root, loader::BLOG_TOPICS_FILE, &mut load_errors);
        let categories = load_collection(&root, loader::ENCYCLOPEDIA_FILE, &mut load_errors);
        let companies = load_collection(&root, loader::COMPANIES_FILE, &mut load_errors);

        tracing::info!(
            "Loaded {} services, {} blog topics, {} encyclopedia categories, {} companies",
            services.len(),
            topics.len(),
            categories.len(),
            companies.len()
        );

        Self {
            root,
            services,
            topics,
            categories,
            companies,
            articles: Cache::new(PARTITION_CACHE_CAPACITY),
            entries: Cache::new(PARTITION_CACHE_CAPACITY),
            load_errors,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn load_errors(&self) -> &[(&'static str, String)] {
        &self.load_errors
    }

    // ------------------------------------------------------------------------
    // Services
    // ------------------------------------------------------------------------

    pub fn list_services(&self) -> &[Service] {
        &self.services
    }

    pub fn get_service(&self, id: &str) -> Option<&Service> {
        self.services.get(id)
    }

    // ------------------------------------------------------------------------
    // Blog
    // ------------------------------------------------------------------------

    pub fn list_blog_topics(&self) -> &[BlogTopic] {
        &self.topics
    }

    pub fn get_blog_topic(&self, id: &str) -> Option<&BlogTopic> {
        self.topics.get(id)
    }

    /// All articles of a topic; empty when the topic has no partition.
    pub fn list_topic_articles(&self, topic_id: &str) -> Partition<Article> {
        self.partition(&self.articles, loader::TOPICS_DIR, topic_id)
    }

    pub fn get_article(&self, topic_id: &str, article_id: &str) -> Option<Article> {
        self.list_topic_articles(topic_id).get(article_id).cloned()
    }

    // ------------------------------------------------------------------------
    // Encyclopedia
    // ------------------------------------------------------------------------

    pub fn list_encyclopedia_categories(&self) -> &[EncyclopediaCategory] {
        &self.categories
    }

    pub fn get_encyclopedia_category(&self, id: &str) -> Option<&EncyclopediaCategory> {
        self.categories.get(id)
    }

    /// All entries of a category; empty when the category has no partition.
    pub fn list_category_entries(&self, category_id: &str) -> Partition<EncyclopediaEntry> {
        self.partition(&self.entries, loader::ENTRIES_DIR, category_id)
    }

    pub fn get_category_entry(&self, category_id: &str, entry_id: &str) -> Option<EncyclopediaEntry> {
        self.list_category_entries(category_id).get(entry_id).cloned()
    }

    // ------------------------------------------------------------------------
    // Companies
    // ------------------------------------------------------------------------

    pub fn list_companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn get_company(&self, id: &str) -> Option<&Company> {
        self.companies.get(id)
    }

    /// Companies whose `services` list contains `service_id`, in listing order.
    pub fn get_companies_by_service(&self, service_id: &str) -> Vec<&Company> {
        self.companies
            .iter()
            .filter(|company| company.offers(service_id))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    pub(crate) fn services(&self) -> &Collection<Service> {
        &self.services
    }

    pub(crate) fn topics(&self) -> &Collection<BlogTopic> {
        &self.topics
    }

    pub(crate) fn categories(&self) -> &Collection<EncyclopediaCategory> {
        &self.categories
    }

    pub(crate) fn companies(&self) -> &Collection<Company> {
        &self.companies
    }

    fn partition<T>(&self, cache: &Cache<String, Partition<T>>, dir: &str, id: &str) -> Partition<T>
    where
        T: Record + DeserializeOwned + Send + Sync + 'static,
    {
        let path = match loader::partition_path(&self.root, dir, id) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Rejected partition lookup: {}", e);
                return Arc::new(Collection::default());
            }
        };

        let key = format!("{}/{}", dir, id);
        cache.get_with(key, || {
            tracing::debug!("Loading partition {}", path.display());
            Arc::new(read_partition(&path).unwrap_or_else(|e| {
                log_partition_error(&e);
                Collection::default()
            }))
        })
    }
}

/// Strict partition read used by the store and by the integrity check.
pub(crate) fn read_partition<T>(path: &Path) -> Result<Collection<T>, ContentError>
where
    T: Record + DeserializeOwned,
{
    read_json::<Vec<T>>(path).map(Collection::from_records)
}

fn load_collection<T>(
    root: &Path,
    document: &'static str,
    load_errors: &mut Vec<(&'static str, String)>,
) -> Collection<T>
where
    T: Record + DeserializeOwned,
{
    match read_json::<Vec<T>>(&root.join(document)) {
        Ok(items) => Collection::from_records(items),
        Err(e) => {
            tracing::warn!("Failed to load collection: {}", e);
            load_errors.push((document, e.to_string()));
            Collection::default()
        }
    }
}

fn log_partition_error(e: &ContentError) {
    if e.is_not_found() {
        tracing::debug!("No partition: {}", e);
    } else {
        tracing::warn!("Failed to load partition: {}", e);
    }
}

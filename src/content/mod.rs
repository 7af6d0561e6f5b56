//! Content Access Layer
//!
//! Typed, read-only lookups over the static JSON content store.
//!
//! ## Layout
//! - `types`: records (services, topics, articles, categories, entries, companies)
//! - `collection`: ordered records with an id index
//! - `loader`: document paths and JSON reading
//! - `store`: the `ContentStore` lookup API
//! - `integrity`: invariant checks over the whole store

pub mod types;
pub mod collection;
pub mod error;
pub mod loader;
pub mod store;
pub mod integrity;

pub use collection::Collection;
pub use error::ContentError;
pub use integrity::{ContentIssue, ContentReport};
pub use store::{ContentStore, Partition};
pub use types::{
    Article, ArticleRef, BlogTopic, Company, CompanyContact, EncyclopediaCategory,
    EncyclopediaEntry, Record, Service,
};

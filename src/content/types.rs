//! Content Records
//!
//! Typed records deserialised from the static JSON store. Field names on disk
//! are camelCase; everything here is immutable once loaded.

use serde::{Deserialize, Serialize};

use crate::utils::text;

/// Anything stored in a collection keyed by `id`.
pub trait Record {
    fn id(&self) -> &str;
}

// ============================================================================
// Services
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub image: String,
    /// Ordered as authored; the first entries are the ones shown on cards.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub support: Option<String>,
    #[serde(default)]
    pub emergency: Option<String>,
}

impl Service {
    /// Descriptive badges in display order (duration first, then the optional ones).
    pub fn badges(&self) -> Vec<&str> {
        let mut badges = Vec::new();
        if !self.duration.trim().is_empty() {
            badges.push(self.duration.as_str());
        }
        for extra in [&self.availability, &self.support, &self.emergency] {
            if let Some(value) = extra.as_deref().filter(|v| !v.trim().is_empty()) {
                badges.push(value);
            }
        }
        badges
    }
}

// ============================================================================
// Blog
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub article_count: u32,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    /// Parent topic id; must match the partition the article is stored in.
    pub topic: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Plain text, paragraphs separated by a blank line.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_articles: Vec<ArticleRef>,
    #[serde(default)]
    pub word_count: Option<usize>,
}

impl Article {
    pub fn paragraphs(&self) -> Vec<&str> {
        text::paragraphs(&self.content)
    }

    /// Authored word count, or one derived from the content.
    pub fn word_count(&self) -> usize {
        self.word_count
            .unwrap_or_else(|| text::word_count(&self.content))
    }

    /// Tags with duplicates removed, first occurrence kept.
    pub fn unique_tags(&self) -> Vec<&str> {
        let mut seen = rustc_hash::FxHashSet::default();
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|tag| seen.insert(*tag))
            .collect()
    }
}

/// Lightweight pointer to another article, embedded in `relatedArticles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRef {
    pub id: String,
    pub topic: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// ============================================================================
// Encyclopedia
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncyclopediaCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub entry_count: u32,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncyclopediaEntry {
    pub id: String,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub paradigms: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub popularity: Option<String>,
    #[serde(default)]
    pub first_appeared: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

// ============================================================================
// Companies
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub established: String,
    #[serde(default)]
    pub employees: String,
    /// Service ids offered by this company.
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub contact: CompanyContact,
}

impl Company {
    pub fn offers(&self, service_id: &str) -> bool {
        self.services.iter().any(|s| s == service_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyContact {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_record!(
    Service,
    BlogTopic,
    Article,
    ArticleRef,
    EncyclopediaCategory,
    EncyclopediaEntry,
    Company,
);

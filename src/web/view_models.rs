//! View Models for page templates
//!
//! Flat, template-ready structs built from content records. Templates only
//! read fields; all formatting and fallbacks happen here.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{
    Article, ArticleRef, BlogTopic, Company, ContentStore, EncyclopediaCategory,
    EncyclopediaEntry, Service,
};
use crate::utils::{arabic_long_date, excerpt};

use super::links;

pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";
const ENTRY_EXCERPT_CHARS: usize = 180;

fn image_or_placeholder(image: &str) -> String {
    if image.trim().is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        image.to_string()
    }
}

// ============================================================================
// Site chrome (navbar, footer, floating contact)
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const NAV_LINKS: [NavLink; 7] = [
    NavLink { href: "/", label: "الرئيسية" },
    NavLink { href: "/services", label: "الخدمات" },
    NavLink { href: "/companies", label: "الشركات" },
    NavLink { href: "/blog", label: "المدونة" },
    NavLink { href: "/encyclopedia", label: "الموسوعة" },
    NavLink { href: "/about", label: "من نحن" },
    NavLink { href: "/contact", label: "اتصل بنا" },
];

#[derive(Debug, Clone, Serialize)]
pub struct SiteChrome {
    pub name: String,
    pub phone: String,
    pub phone_href: String,
    pub email: String,
    pub email_href: String,
    pub whatsapp_href: String,
    pub year: i32,
    pub nav: Vec<NavLink>,
}

impl SiteChrome {
    pub fn from_config(site: &SiteConfig) -> Self {
        use chrono::Datelike;

        Self {
            name: site.name.clone(),
            phone: site.phone.clone(),
            phone_href: links::tel_href(&site.phone),
            email: site.email.clone(),
            email_href: links::mailto_href(&site.email),
            whatsapp_href: links::whatsapp_href(&site.whatsapp),
            year: chrono::Utc::now().year(),
            nav: NAV_LINKS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Crumb {
    pub label: String,
    /// Empty for the current page.
    pub href: String,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: String::new(),
        }
    }
}

// ============================================================================
// Cards
// ============================================================================

/// Card layout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CardVariant {
    #[default]
    Default,
    Featured,
    Horizontal,
}

impl CardVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            CardVariant::Default => "card",
            CardVariant::Featured => "card card--featured",
            CardVariant::Horizontal => "card card--horizontal",
        }
    }

    /// How many service features the card lists.
    pub fn feature_limit(&self) -> usize {
        match self {
            CardVariant::Featured => usize::MAX,
            CardVariant::Default | CardVariant::Horizontal => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
    pub href: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub features: Vec<String>,
    pub badges: Vec<String>,
    pub css_class: &'static str,
}

impl ServiceCard {
    pub fn new(service: &Service, variant: CardVariant) -> Self {
        Self {
            href: format!("/services/{}", service.id),
            title: service.title.clone(),
            description: service.description.clone(),
            image: image_or_placeholder(&service.image),
            features: service
                .features
                .iter()
                .take(variant.feature_limit())
                .cloned()
                .collect(),
            badges: service.badges().into_iter().map(str::to_string).collect(),
            css_class: variant.css_class(),
        }
    }

    /// Home-page layout: the first service featured, the rest horizontal.
    pub fn featured_row(services: &[Service]) -> Vec<Self> {
        services
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let variant = if i == 0 { CardVariant::Featured } else { CardVariant::Horizontal };
                Self::new(s, variant)
            })
            .collect()
    }
}

/// Site path of an article page.
pub fn article_path(topic_id: &str, article_id: &str) -> String {
    format!("/blog/{}/{}", topic_id, article_id)
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleCard {
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub author: String,
    pub published: String,
    pub read_time: String,
    pub tags: Vec<String>,
}

impl ArticleCard {
    /// Card for an article listed under `topic_id`. The link follows the
    /// partition the article was read from, not its declared `topic`.
    pub fn from_article(topic_id: &str, article: &Article) -> Self {
        Self {
            href: article_path(topic_id, &article.id),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            image: image_or_placeholder(article.image.as_deref().unwrap_or_default()),
            author: article.author.clone(),
            published: arabic_long_date(&article.published_at),
            read_time: article.read_time.clone(),
            tags: article.unique_tags().into_iter().map(str::to_string).collect(),
        }
    }

    pub fn from_ref(related: &ArticleRef) -> Self {
        Self {
            href: article_path(&related.topic, &related.id),
            title: related.title.clone(),
            excerpt: related.description.clone(),
            image: image_or_placeholder(&related.image),
            author: related.author.clone(),
            published: arabic_long_date(&related.published_at),
            read_time: related.read_time.clone(),
            tags: related.tags.clone(),
        }
    }
}

/// Topic / category card.
#[derive(Debug, Clone, Serialize)]
pub struct ContentCard {
    pub href: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub meta: String,
    pub updated: String,
}

impl ContentCard {
    pub fn from_topic(topic: &BlogTopic) -> Self {
        Self {
            href: format!("/blog/{}", topic.id),
            title: topic.title.clone(),
            description: topic.description.clone(),
            image: image_or_placeholder(&topic.image),
            meta: format!("{} مقالة", topic.article_count),
            updated: arabic_long_date(&topic.last_updated),
        }
    }

    pub fn from_category(category: &EncyclopediaCategory) -> Self {
        Self {
            href: format!("/encyclopedia/{}", category.id),
            title: category.title.clone(),
            description: category.description.clone(),
            image: image_or_placeholder(&category.image),
            meta: format!("{} مدخل", category.entry_count),
            updated: arabic_long_date(&category.last_updated),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceLink {
    pub href: String,
    pub title: String,
}

impl ServiceLink {
    /// Resolve service ids to links, dropping ids with no matching service.
    pub fn resolve(store: &ContentStore, service_ids: &[String]) -> Vec<Self> {
        service_ids
            .iter()
            .filter_map(|id| store.get_service(id))
            .map(|service| Self {
                href: format!("/services/{}", service.id),
                title: service.title.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyCard {
    pub href: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rating: String,
    pub reviews: u32,
    pub established: String,
    pub employees: String,
    pub services: Vec<ServiceLink>,
    pub locations: Vec<String>,
    pub phone_href: String,
}

impl CompanyCard {
    pub fn new(company: &Company, store: &ContentStore) -> Self {
        Self {
            href: format!("/companies/{}", company.id),
            name: company.name.clone(),
            description: company.description.clone(),
            image: image_or_placeholder(&company.image),
            rating: format!("{:.1}", company.rating),
            reviews: company.reviews,
            established: company.established.clone(),
            employees: company.employees.clone(),
            services: ServiceLink::resolve(store, &company.services),
            locations: company.locations.clone(),
            phone_href: if company.contact.phone.is_empty() {
                String::new()
            } else {
                links::tel_href(&company.contact.phone)
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryCard {
    pub href: String,
    pub title: String,
    pub description: String,
    pub excerpt: String,
    pub paradigms: Vec<String>,
    /// Optional metadata as (label, value) pairs, absent values skipped.
    pub facts: Vec<(&'static str, String)>,
}

impl EntryCard {
    /// Card for an entry listed under `category_id`.
    pub fn new(category_id: &str, entry: &EncyclopediaEntry) -> Self {
        Self {
            href: format!("/encyclopedia/{}/{}", category_id, entry.id),
            title: entry.title.clone(),
            description: entry.description.clone(),
            excerpt: excerpt(&entry.content, ENTRY_EXCERPT_CHARS),
            paradigms: entry.paradigms.iter().take(3).cloned().collect(),
            facts: entry_facts(entry),
        }
    }
}

pub fn entry_facts(entry: &EncyclopediaEntry) -> Vec<(&'static str, String)> {
    [
        ("النوع", &entry.kind),
        ("الصعوبة", &entry.difficulty),
        ("الانتشار", &entry.popularity),
        ("أول ظهور", &entry.first_appeared),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| (label, v.to_string()))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(features: &[&str]) -> Service {
        Service {
            id: "ac-services".to_string(),
            title: "المكيفات".to_string(),
            description: "تركيب وصيانة".to_string(),
            full_description: String::new(),
            image: String::new(),
            features: features.iter().map(|f| f.to_string()).collect(),
            duration: "ساعتان".to_string(),
            availability: None,
            support: Some("دعم فني".to_string()),
            emergency: None,
        }
    }

    #[test]
    fn test_service_card_variants() {
        let s = service(&["a", "b", "c", "d"]);

        let featured = ServiceCard::new(&s, CardVariant::Featured);
        assert_eq!(featured.features.len(), 4);
        assert_eq!(featured.css_class, "card card--featured");
        assert_eq!(featured.image, PLACEHOLDER_IMAGE);
        assert_eq!(featured.badges, vec!["ساعتان", "دعم فني"]);

        let horizontal = ServiceCard::new(&s, CardVariant::Horizontal);
        assert_eq!(horizontal.features, vec!["a", "b", "c"]);

        assert_eq!(ServiceCard::new(&s, CardVariant::Default).css_class, "card");
    }

    #[test]
    fn test_featured_row() {
        let cards = ServiceCard::featured_row(&[service(&[]), service(&[]), service(&[])]);
        assert_eq!(cards[0].css_class, CardVariant::Featured.css_class());
        assert!(cards[1..]
            .iter()
            .all(|c| c.css_class == CardVariant::Horizontal.css_class()));
    }

    #[test]
    fn test_article_card_links_to_listing_topic() {
        let article: Article = serde_json::from_str(
            r#"{"id": "first", "topic": "other", "title": "First", "publishedAt": "2024-03-15"}"#,
        )
        .unwrap();

        let card = ArticleCard::from_article("tips", &article);
        assert_eq!(card.href, "/blog/tips/first");
        assert_eq!(card.published, "15 مارس 2024");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_entry_facts_skip_blank_values() {
        let entry = EncyclopediaEntry {
            id: "split-ac".to_string(),
            category: "air-conditioning".to_string(),
            title: "المكيف السبليت".to_string(),
            description: String::new(),
            content: String::new(),
            paradigms: vec![],
            difficulty: Some("متوسط".to_string()),
            popularity: Some("  ".to_string()),
            first_appeared: None,
            kind: Some("جهاز".to_string()),
        };

        assert_eq!(
            entry_facts(&entry),
            vec![("النوع", "جهاز".to_string()), ("الصعوبة", "متوسط".to_string())]
        );
        assert_eq!(
            EntryCard::new("air-conditioning", &entry).href,
            "/encyclopedia/air-conditioning/split-ac"
        );
        // Listed under another category, the link stays in that category
        assert_eq!(EntryCard::new("cooling", &entry).href, "/encyclopedia/cooling/split-ac");
    }
}

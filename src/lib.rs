//! Services Portal
//!
//! Server-rendered content site for a Saudi-market services aggregator:
//! services directory, company listings, blog and encyclopedia, all backed by
//! static JSON documents.
//!
//! - `content/`: read-only content access layer over the JSON store
//! - `utils/`: paragraph, word-count and date helpers
//! - `config`: environment configuration
//! - `web/`: axum router, askama pages (feature `server`)

pub mod config;
pub mod content;
pub mod utils;

#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig, SiteConfig};
pub use content::{ContentReport, ContentStore};

#[cfg(feature = "server")]
pub use web::{create_router, AppState};

use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading a JSON document from the content store.
///
/// Public lookups never surface this; it is logged and turned into an empty
/// result. The integrity report keeps it.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid content id '{0}'")]
    InvalidId(String),
}

impl ContentError {
    /// True when the document simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ContentError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

//! JSON document loading for the content store.
//!
//! Layout under the content root:
//! - `services.json`, `blog.json`, `encyclopedia.json`, `companies.json`
//! - `topics/{topic_id}.json` (articles)
//! - `encyclopedia/{category_id}.json` (entries)

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::error::ContentError;

pub const SERVICES_FILE: &str = "services.json";
pub const BLOG_TOPICS_FILE: &str = "blog.json";
pub const ENCYCLOPEDIA_FILE: &str = "encyclopedia.json";
pub const COMPANIES_FILE: &str = "companies.json";
pub const TOPICS_DIR: &str = "topics";
pub const ENTRIES_DIR: &str = "encyclopedia";

const PARTITION_EXT: &str = "json";

/// Read and deserialise one JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let bytes = std::fs::read(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Path of the partition file for `id` under `root/dir`.
///
/// Ids arrive from URLs, so anything that is not a single plain path segment
/// is rejected.
pub fn partition_path(root: &Path, dir: &str, id: &str) -> Result<PathBuf, ContentError> {
    if !is_safe_id(id) {
        return Err(ContentError::InvalidId(id.to_string()));
    }
    Ok(root.join(dir).join(format!("{}.{}", id, PARTITION_EXT)))
}

/// Partition ids present on disk under `root/dir` (file stems of `*.json`), sorted.
pub fn partition_ids(root: &Path, dir: &str) -> Result<Vec<String>, ContentError> {
    let dir_path = root.join(dir);
    let read_dir = match std::fs::read_dir(&dir_path) {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(ContentError::Io { path: dir_path, source }),
    };

    let mut ids: Vec<String> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(PARTITION_EXT))
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
        .collect();

    ids.sort();
    Ok(ids)
}

fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_safe_id() {
        assert!(is_safe_id("ac-services"));
        assert!(is_safe_id("cleaning_2024"));
        assert!(!is_safe_id(""));
        assert!(!is_safe_id(".."));
        assert!(!is_safe_id("../services"));
        assert!(!is_safe_id("a\\b"));
    }

    #[test]
    fn test_partition_path() {
        let path = partition_path(Path::new("content"), TOPICS_DIR, "ac-services").unwrap();
        assert_eq!(path, Path::new("content/topics/ac-services.json"));

        let err = partition_path(Path::new("content"), TOPICS_DIR, "../blog").unwrap_err();
        assert!(matches!(err, ContentError::InvalidId(_)));
    }

    #[test]
    fn test_read_json_missing_file_is_not_found() {
        let err = read_json::<Vec<serde_json::Value>>(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

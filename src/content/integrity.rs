//! Content integrity report.
//!
//! Checks the invariants the pages rely on: ids unique per collection,
//! every article/entry/company reference resolving to a parent record, every
//! partition file belonging to a listed parent, and every document parsing.

use std::fmt;

use rustc_hash::FxHashSet;

use super::collection::Collection;
use super::loader;
use super::store::{read_partition, ContentStore};
use super::types::{Article, EncyclopediaEntry, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    /// A document exists but could not be read or parsed.
    Unreadable { document: String, reason: String },
    DuplicateId { collection: String, id: String },
    /// `owner` names a record whose `field` points at a missing `target`.
    DanglingReference {
        owner: String,
        field: &'static str,
        target: String,
    },
    /// Partition file on disk whose parent id is not listed.
    OrphanPartition { partition: String },
    /// A child record stored in a partition belonging to another parent.
    MisplacedRecord {
        partition: String,
        id: String,
        parent: String,
    },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::Unreadable { document, reason } => {
                write!(f, "{}: unreadable ({})", document, reason)
            }
            ContentIssue::DuplicateId { collection, id } => {
                write!(f, "{}: duplicate id '{}'", collection, id)
            }
            ContentIssue::DanglingReference { owner, field, target } => {
                write!(f, "{}: {} '{}' does not exist", owner, field, target)
            }
            ContentIssue::OrphanPartition { partition } => {
                write!(f, "{}: no listed parent", partition)
            }
            ContentIssue::MisplacedRecord { partition, id, parent } => {
                write!(f, "{}: record '{}' belongs to '{}'", partition, id, parent)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContentReport {
    pub issues: Vec<ContentIssue>,
    pub partitions_checked: usize,
    pub records_checked: usize,
}

impl ContentReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn duplicates<T>(&mut self, collection: &str, records: &Collection<T>) {
        for id in records.duplicate_ids() {
            self.issues.push(ContentIssue::DuplicateId {
                collection: collection.to_string(),
                id: id.clone(),
            });
        }
    }
}

impl ContentStore {
    /// Walk every collection and partition and report broken invariants.
    ///
    /// Partitions are read straight from disk (not from the lookup cache) so
    /// parse failures show up here even though lookups hide them.
    pub fn validate(&self) -> ContentReport {
        let mut report = ContentReport::default();

        for (document, reason) in self.load_errors() {
            report.issues.push(ContentIssue::Unreadable {
                document: document.to_string(),
                reason: reason.clone(),
            });
        }

        report.duplicates(loader::SERVICES_FILE, self.services());
        report.duplicates(loader::BLOG_TOPICS_FILE, self.topics());
        report.duplicates(loader::ENCYCLOPEDIA_FILE, self.categories());
        report.duplicates(loader::COMPANIES_FILE, self.companies());
        report.records_checked +=
            self.services().len() + self.topics().len() + self.categories().len() + self.companies().len();

        for company in self.companies().iter() {
            for service_id in &company.services {
                if !self.services().contains(service_id) {
                    report.issues.push(ContentIssue::DanglingReference {
                        owner: format!("{}/{}", loader::COMPANIES_FILE, company.id),
                        field: "services",
                        target: service_id.clone(),
                    });
                }
            }
        }

        let topic_ids = self.partition_ids(
            loader::TOPICS_DIR,
            self.topics().iter().map(Record::id),
            &mut report,
        );
        for topic_id in &topic_ids {
            self.check_articles(topic_id, &mut report);
        }

        let category_ids = self.partition_ids(
            loader::ENTRIES_DIR,
            self.categories().iter().map(Record::id),
            &mut report,
        );
        for category_id in &category_ids {
            self.check_entries(category_id, &mut report);
        }

        report
    }

    /// Listed parent ids plus any partition files on disk without a listed
    /// parent; the latter are reported as orphans.
    fn partition_ids<'a>(
        &self,
        dir: &str,
        listed: impl Iterator<Item = &'a str>,
        report: &mut ContentReport,
    ) -> Vec<String> {
        let mut ids: Vec<String> = listed.map(str::to_string).collect();
        let mut seen: FxHashSet<String> = ids.iter().cloned().collect();

        match loader::partition_ids(self.root(), dir) {
            Ok(on_disk) => {
                for id in on_disk {
                    if seen.insert(id.clone()) {
                        report.issues.push(ContentIssue::OrphanPartition {
                            partition: format!("{}/{}", dir, id),
                        });
                        ids.push(id);
                    }
                }
            }
            Err(e) => tracing::warn!("Could not list partitions: {}", e),
        }
        ids
    }

    fn check_articles(&self, topic_id: &str, report: &mut ContentReport) {
        let Some(articles) = self.read_checked::<Article>(loader::TOPICS_DIR, topic_id, report) else {
            return;
        };
        let partition = format!("{}/{}", loader::TOPICS_DIR, topic_id);

        report.duplicates(&partition, &articles);
        report.records_checked += articles.len();

        for article in articles.iter() {
            let owner = format!("{}/{}", partition, article.id);
            if !self.topics().contains(&article.topic) {
                report.issues.push(ContentIssue::DanglingReference {
                    owner: owner.clone(),
                    field: "topic",
                    target: article.topic.clone(),
                });
            } else if article.topic != topic_id {
                report.issues.push(ContentIssue::MisplacedRecord {
                    partition: partition.clone(),
                    id: article.id.clone(),
                    parent: article.topic.clone(),
                });
            }

            for related in &article.related_articles {
                if !self.topics().contains(&related.topic) {
                    report.issues.push(ContentIssue::DanglingReference {
                        owner: owner.clone(),
                        field: "relatedArticles.topic",
                        target: related.topic.clone(),
                    });
                }
            }
        }
    }

    fn check_entries(&self, category_id: &str, report: &mut ContentReport) {
        let Some(entries) =
            self.read_checked::<EncyclopediaEntry>(loader::ENTRIES_DIR, category_id, report)
        else {
            return;
        };
        let partition = format!("{}/{}", loader::ENTRIES_DIR, category_id);

        report.duplicates(&partition, &entries);
        report.records_checked += entries.len();

        for entry in entries.iter() {
            if !self.categories().contains(&entry.category) {
                report.issues.push(ContentIssue::DanglingReference {
                    owner: format!("{}/{}", partition, entry.id),
                    field: "category",
                    target: entry.category.clone(),
                });
            } else if entry.category != category_id {
                report.issues.push(ContentIssue::MisplacedRecord {
                    partition: partition.clone(),
                    id: entry.id.clone(),
                    parent: entry.category.clone(),
                });
            }
        }
    }

    /// Read a partition for checking. A missing file is fine (the parent just
    /// has no children yet); anything else is reported.
    fn read_checked<T>(&self, dir: &str, id: &str, report: &mut ContentReport) -> Option<Collection<T>>
    where
        T: Record + serde::de::DeserializeOwned,
    {
        let result = loader::partition_path(self.root(), dir, id).and_then(|path| read_partition(&path));
        match result {
            Ok(records) => {
                report.partitions_checked += 1;
                Some(records)
            }
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                report.issues.push(ContentIssue::Unreadable {
                    document: format!("{}/{}", dir, id),
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}

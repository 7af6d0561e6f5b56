// Content store integration tests
//
// Purpose: exercise the lookup API against the shipped content directory and
// against small fixture stores with deliberate defects.
// Run with: cargo test --test content_store_tests

use std::fs;
use std::path::{Path, PathBuf};

use services_portal::content::{ContentIssue, ContentStore};
use tempfile::TempDir;

fn shipped_store() -> ContentStore {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content");
    ContentStore::open(root)
}

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

/// Minimal valid store: one service, one topic, one category, one company.
fn fixture_store() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "services.json",
        r#"[{"id":"cleaning","title":"Cleaning","description":"d","fullDescription":"fd",
             "image":"/static/a.jpg","features":["f1"],"duration":"2h"}]"#,
    );
    write(
        root,
        "blog.json",
        r#"[{"id":"tips","title":"Tips","description":"d","image":"","articleCount":1,"lastUpdated":"2024-01-01"}]"#,
    );
    write(
        root,
        "encyclopedia.json",
        r#"[{"id":"tools","title":"Tools","description":"d","image":"","entryCount":1,"lastUpdated":"2024-01-01"}]"#,
    );
    write(
        root,
        "companies.json",
        r#"[{"id":"acme","name":"Acme","description":"d","fullDescription":"fd","image":"",
             "rating":4.5,"reviews":10,"established":"2001","employees":"20",
             "services":["cleaning"],"features":[],"locations":["Riyadh"],
             "contact":{"phone":"+966 1","email":"a@acme.sa","website":""}}]"#,
    );
    write(
        root,
        "topics/tips.json",
        r#"[{"id":"first","topic":"tips","title":"First","excerpt":"e","content":"a\n\nb",
             "author":"x","publishedAt":"2024-01-01","readTime":"1","tags":[],"relatedArticles":[]}]"#,
    );
    write(
        root,
        "encyclopedia/tools.json",
        r#"[{"id":"mop","category":"tools","title":"Mop","description":"d","content":"c","paradigms":[]}]"#,
    );

    dir
}

// ============================================================================
// Shipped content
// ============================================================================

#[test]
fn test_shipped_content_is_clean() {
    let store = shipped_store();
    let report = store.validate();

    for issue in &report.issues {
        eprintln!("{}", issue);
    }
    assert!(report.is_clean());
    assert!(report.partitions_checked >= 5);
    assert!(report.records_checked > 0);
}

#[test]
fn test_shipped_collections_are_non_empty() {
    let store = shipped_store();

    assert_eq!(store.list_services().len(), 4);
    assert!(!store.list_blog_topics().is_empty());
    assert!(!store.list_encyclopedia_categories().is_empty());
    assert_eq!(store.list_companies().len(), 6);
}

#[test]
fn test_get_service_known_and_unknown() {
    let store = shipped_store();

    let service = store.get_service("ac-services").expect("ac-services is shipped");
    assert_eq!(service.id, "ac-services");
    assert!(!service.features.is_empty());

    assert!(store.get_service("nonexistent").is_none());
    assert!(store.get_service("").is_none());
}

#[test]
fn test_list_order_follows_document() {
    let store = shipped_store();
    let ids: Vec<&str> = store.list_services().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["furniture-moving", "cleaning-services", "security-systems", "ac-services"]
    );
}

#[test]
fn test_every_listed_record_is_retrievable() {
    let store = shipped_store();

    for service in store.list_services() {
        assert_eq!(store.get_service(&service.id).map(|s| &s.title), Some(&service.title));
    }
    for topic in store.list_blog_topics() {
        assert!(store.get_blog_topic(&topic.id).is_some());
    }
    for category in store.list_encyclopedia_categories() {
        assert!(store.get_encyclopedia_category(&category.id).is_some());
    }
    for company in store.list_companies() {
        assert_eq!(store.get_company(&company.id).map(|c| &c.name), Some(&company.name));
    }
}

#[test]
fn test_articles_belong_to_their_topic() {
    let store = shipped_store();

    for topic in store.list_blog_topics() {
        for article in store.list_topic_articles(&topic.id).iter() {
            assert_eq!(article.topic, topic.id);
            let fetched = store.get_article(&topic.id, &article.id).unwrap();
            assert_eq!(fetched.title, article.title);
        }
    }
}

#[test]
fn test_entries_belong_to_their_category() {
    let store = shipped_store();

    for category in store.list_encyclopedia_categories() {
        for entry in store.list_category_entries(&category.id).iter() {
            assert_eq!(entry.category, category.id);
            assert!(store.get_category_entry(&category.id, &entry.id).is_some());
        }
    }
}

#[test]
fn test_topic_without_partition_has_no_articles() {
    let store = shipped_store();

    assert!(store.get_blog_topic("security-systems").is_some());
    assert!(store.list_topic_articles("security-systems").is_empty());
    assert!(store.get_article("security-systems", "anything").is_none());
}

#[test]
fn test_article_lookup_is_scoped_to_topic() {
    let store = shipped_store();

    assert!(store.get_article("ac-services", "choosing-ac").is_some());
    // Same article id under a different topic is not found
    assert!(store.get_article("cleaning-services", "choosing-ac").is_none());
    assert!(store.get_article("no-such-topic", "choosing-ac").is_none());
}

#[test]
fn test_companies_by_service() {
    let store = shipped_store();

    for service in store.list_services() {
        let companies = store.get_companies_by_service(&service.id);
        for company in &companies {
            assert!(company.services.contains(&service.id));
        }
        // Every company offering the service is returned
        let expected = store
            .list_companies()
            .iter()
            .filter(|c| c.services.contains(&service.id))
            .count();
        assert_eq!(companies.len(), expected);
    }

    let ac: Vec<&str> = store
        .get_companies_by_service("ac-services")
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ac, vec!["cool-tech", "al-saqr"]);

    assert!(store.get_companies_by_service("nonexistent").is_empty());
}

#[test]
fn test_company_services_reference_known_services() {
    let store = shipped_store();
    for company in store.list_companies() {
        for service_id in &company.services {
            assert!(store.get_service(service_id).is_some(), "{} -> {}", company.id, service_id);
        }
    }
}

#[test]
fn test_repeated_partition_lookups_agree() {
    let store = shipped_store();
    let first = store.list_topic_articles("furniture-moving");
    let second = store.list_topic_articles("furniture-moving");
    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].id, second[0].id);
}

// ============================================================================
// Fixture stores
// ============================================================================

#[test]
fn test_fixture_store_is_clean() {
    let dir = fixture_store();
    let store = ContentStore::open(dir.path());

    assert!(store.validate().is_clean());
    assert_eq!(store.list_topic_articles("tips").len(), 1);
    assert_eq!(store.get_companies_by_service("cleaning").len(), 1);
}

#[test]
fn test_missing_directory_yields_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::open(dir.path().join("does-not-exist"));

    assert!(store.list_services().is_empty());
    assert!(store.list_companies().is_empty());
    assert!(store.list_topic_articles("tips").is_empty());

    let report = store.validate();
    let documents: Vec<&str> = report
        .issues
        .iter()
        .filter_map(|issue| match issue {
            ContentIssue::Unreadable { document, .. } => Some(document.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(report.issues.len(), 4);
    assert_eq!(
        documents,
        vec!["services.json", "blog.json", "encyclopedia.json", "companies.json"]
    );
}

#[test]
fn test_malformed_partition_is_empty_but_reported() {
    let dir = fixture_store();
    write(dir.path(), "topics/tips.json", "[{ not json");

    let store = ContentStore::open(dir.path());
    assert!(store.list_topic_articles("tips").is_empty());
    assert!(store.get_article("tips", "first").is_none());

    let report = store.validate();
    assert!(report.issues.iter().any(|issue| matches!(
        issue,
        ContentIssue::Unreadable { document, .. } if document == "topics/tips"
    )));
}

#[test]
fn test_unsafe_partition_ids_are_absent() {
    let dir = fixture_store();
    let store = ContentStore::open(dir.path());

    for id in ["../services", "..", ".", "a/b", "a\\b", ""] {
        assert!(store.list_topic_articles(id).is_empty(), "id {:?}", id);
        assert!(store.list_category_entries(id).is_empty(), "id {:?}", id);
        assert!(store.get_article(id, "first").is_none());
    }
}

#[test]
fn test_duplicate_ids_first_wins_and_are_reported() {
    let dir = fixture_store();
    write(
        dir.path(),
        "encyclopedia/tools.json",
        r#"[{"id":"mop","category":"tools","title":"Mop","description":"d","content":"c","paradigms":[]},
            {"id":"mop","category":"tools","title":"Second Mop","description":"d","content":"c","paradigms":[]}]"#,
    );

    let store = ContentStore::open(dir.path());
    let entry = store.get_category_entry("tools", "mop").unwrap();
    assert_eq!(entry.title, "Mop");

    let report = store.validate();
    assert!(report.issues.contains(&ContentIssue::DuplicateId {
        collection: "encyclopedia/tools".to_string(),
        id: "mop".to_string(),
    }));
}

#[test]
fn test_dangling_references_are_reported() {
    let dir = fixture_store();
    write(
        dir.path(),
        "companies.json",
        r#"[{"id":"acme","name":"Acme","description":"d","fullDescription":"fd","image":"",
             "rating":4.5,"reviews":10,"established":"2001","employees":"20",
             "services":["cleaning","plumbing"],"features":[],"locations":[],
             "contact":{"phone":"","email":"","website":""}}]"#,
    );
    write(
        dir.path(),
        "topics/tips.json",
        r#"[{"id":"first","topic":"tips","title":"First","excerpt":"e","content":"c",
             "author":"x","publishedAt":"2024-01-01","readTime":"1","tags":[],
             "relatedArticles":[{"id":"gone","topic":"archive","title":"Gone","description":"",
                                 "image":"","author":"","publishedAt":"","readTime":"","tags":[]}]}]"#,
    );

    let store = ContentStore::open(dir.path());
    let report = store.validate();

    assert!(report.issues.contains(&ContentIssue::DanglingReference {
        owner: "companies.json/acme".to_string(),
        field: "services",
        target: "plumbing".to_string(),
    }));
    assert!(report.issues.contains(&ContentIssue::DanglingReference {
        owner: "topics/tips/first".to_string(),
        field: "relatedArticles.topic",
        target: "archive".to_string(),
    }));
    // Unknown services are simply not offered
    assert_eq!(store.get_companies_by_service("plumbing").len(), 1);
}

#[test]
fn test_misplaced_and_orphan_partitions_are_reported() {
    let dir = fixture_store();
    // Entry filed under "tools" but claiming another existing category
    write(
        dir.path(),
        "encyclopedia.json",
        r#"[{"id":"tools","title":"Tools","description":"d","image":"","entryCount":1,"lastUpdated":"2024-01-01"},
            {"id":"materials","title":"Materials","description":"d","image":"","entryCount":0,"lastUpdated":"2024-01-01"}]"#,
    );
    write(
        dir.path(),
        "encyclopedia/tools.json",
        r#"[{"id":"bleach","category":"materials","title":"Bleach","description":"d","content":"c","paradigms":[]}]"#,
    );
    // Partition on disk for a topic nobody lists
    write(
        dir.path(),
        "topics/orphan.json",
        r#"[{"id":"lost","topic":"orphan","title":"Lost","excerpt":"e","content":"c",
             "author":"x","publishedAt":"2024-01-01","readTime":"1","tags":[],"relatedArticles":[]}]"#,
    );

    let store = ContentStore::open(dir.path());
    let report = store.validate();

    assert!(report.issues.contains(&ContentIssue::MisplacedRecord {
        partition: "encyclopedia/tools".to_string(),
        id: "bleach".to_string(),
        parent: "materials".to_string(),
    }));
    assert!(report.issues.contains(&ContentIssue::OrphanPartition {
        partition: "topics/orphan".to_string(),
    }));
    assert!(report.issues.contains(&ContentIssue::DanglingReference {
        owner: "topics/orphan/lost".to_string(),
        field: "topic",
        target: "orphan".to_string(),
    }));
}

#[test]
fn test_empty_orphan_partition_is_reported() {
    let dir = fixture_store();
    write(dir.path(), "encyclopedia/retired.json", "[]");

    let store = ContentStore::open(dir.path());
    let report = store.validate();

    assert_eq!(
        report.issues,
        vec![ContentIssue::OrphanPartition {
            partition: "encyclopedia/retired".to_string(),
        }]
    );
    // Still readable through the lookup API
    assert!(store.list_category_entries("retired").is_empty());
}

#[test]
fn test_unreadable_collection_names_its_document() {
    let dir = fixture_store();
    write(dir.path(), "companies.json", "{ not a list");
    fs::remove_file(dir.path().join("blog.json")).unwrap();

    let store = ContentStore::open(dir.path());
    assert!(store.list_companies().is_empty());
    assert!(store.list_blog_topics().is_empty());
    assert_eq!(store.list_services().len(), 1);

    let report = store.validate();
    let unreadable: Vec<&str> = report
        .issues
        .iter()
        .filter_map(|issue| match issue {
            ContentIssue::Unreadable { document, .. } => Some(document.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(unreadable, vec!["blog.json", "companies.json"]);
}

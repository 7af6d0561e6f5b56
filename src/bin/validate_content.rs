// Content integrity check
//
// Purpose: verify that the JSON content store is consistent before deploying
// (unique ids, every topic/category/service reference resolves, every
// partition parses).
// Usage: cargo run --bin validate_content -- [CONTENT_DIR]

use anyhow::bail;
use services_portal::ContentStore;

fn main() -> anyhow::Result<()> {
    let content_dir = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CONTENT_DIR").ok())
        .unwrap_or_else(|| "content".to_string());

    let store = ContentStore::open(&content_dir);
    let report = store.validate();

    println!("Content directory: {}", content_dir);
    println!("  Services: {}", store.list_services().len());
    println!("  Blog topics: {}", store.list_blog_topics().len());
    println!("  Encyclopedia categories: {}", store.list_encyclopedia_categories().len());
    println!("  Companies: {}", store.list_companies().len());
    println!("  Partitions checked: {}", report.partitions_checked);
    println!("  Records checked: {}", report.records_checked);

    if report.is_clean() {
        println!("\n✅ No problems found");
        return Ok(());
    }

    println!("\n❌ {} problem(s):", report.issues.len());
    for issue in &report.issues {
        println!("  - {}", issue);
    }
    bail!("content store has {} problem(s)", report.issues.len());
}

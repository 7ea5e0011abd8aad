use crate::io::FetchError;
use crate::parser::Highlighter;
use crate::services::loader::ContentLoader;
use crate::services::search::SearchIndex;
use crate::tests::mocks::MockContentFetcher;
use std::sync::Arc;

fn setup_loader(fetcher: &MockContentFetcher) -> ContentLoader {
    ContentLoader::new(
        Box::new(fetcher.clone()),
        Arc::new(Highlighter::new()),
        "Error: ",
    )
}

// a small fake site: two good pages and one that fails to load
fn seed_site(fetcher: &MockContentFetcher) -> Vec<&'static str> {
    fetcher.add_file(
        "home.md",
        "# Mapathon Iran\nJoin us to map OpenStreetMap together.",
    );
    fetcher.add_file(
        "tools.md",
        "# Editing Tools\nThe iD editor runs in the browser, JOSM is a desktop editor.",
    );
    fetcher.fail_with("broken.md", FetchError::Status(500));

    vec!["home.md", "broken.md", "tools.md"]
}

// one bad page must not stop the rest from being indexed
#[tokio::test]
async fn test_build_skips_failed_paths() {
    let fetcher = MockContentFetcher::new();
    let paths = seed_site(&fetcher);
    let loader = setup_loader(&fetcher);
    let index = SearchIndex::new("Untitled");

    assert!(!index.is_ready());
    let indexed = index.build(&loader, paths).await;

    assert_eq!(indexed, 2);
    assert!(index.is_ready());
    let entries = index.entries().await;
    let indexed_paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(indexed_paths, vec!["home.md", "tools.md"]);
    assert_eq!(entries[0].title, "Mapathon Iran");
}

// search is case-insensitive both ways and returns title, path and excerpt
#[tokio::test]
async fn test_search_case_insensitive() {
    let fetcher = MockContentFetcher::new();
    let paths = seed_site(&fetcher);
    let loader = setup_loader(&fetcher);
    let index = SearchIndex::new("Untitled");
    index.build(&loader, paths).await;

    let results = index.search("JOSM").await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Editing Tools");
    assert_eq!(results[0].path, "tools.md");
    assert!(results[0].excerpt.contains("josm"));
    assert!(results[0].excerpt.starts_with("..."));
    assert!(results[0].excerpt.ends_with("..."));

    let lower = index.search("openstreetmap").await;
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].path, "home.md");
}

#[tokio::test]
async fn test_search_matches_several_documents() {
    let fetcher = MockContentFetcher::new();
    let paths = seed_site(&fetcher);
    let loader = setup_loader(&fetcher);
    let index = SearchIndex::new("Untitled");
    index.build(&loader, paths).await;

    // "map" appears on home ("mapathon", "map") and nowhere on tools
    let results = index.search("map").await;
    assert_eq!(results.len(), 1);

    // "editor" only on tools, "e" everywhere
    assert_eq!(index.search("EDITOR").await.len(), 1);
    assert_eq!(index.search("e").await.len(), 2);
}

#[tokio::test]
async fn test_search_absent_text_is_empty() {
    let fetcher = MockContentFetcher::new();
    let paths = seed_site(&fetcher);
    let loader = setup_loader(&fetcher);
    let index = SearchIndex::new("Untitled");
    index.build(&loader, paths).await;

    assert!(index.search("xyzzy").await.is_empty());
    // markup is not searchable text
    assert!(index.search("<h1").await.is_empty());
}

// the index reuses renders the loader already has, and leaves them cached for the router
#[tokio::test]
async fn test_build_shares_loader_cache() {
    let fetcher = MockContentFetcher::new();
    let paths = seed_site(&fetcher);
    let loader = setup_loader(&fetcher);

    loader.load_markdown("home.md").await;
    let index = SearchIndex::new("Untitled");
    index.build(&loader, paths).await;

    assert_eq!(fetcher.calls_for("home.md"), 1);
    assert_eq!(fetcher.calls_for("tools.md"), 1);
    assert!(loader.is_cached("tools.md").await);
    assert!(!loader.is_cached("broken.md").await);
}

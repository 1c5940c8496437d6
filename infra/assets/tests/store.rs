use ignite_assets::*;
use ignite_domain::asset::{AssetType, CriticalResource, FontFace};
use ignite_domain::config::AssetsConfig;
use ignite_kernel::collaborators::{AssetLoader, CollaboratorError, FontLoader};
use std::fs;
use tempfile::TempDir;

fn seeded() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("fonts")).unwrap();
    fs::create_dir_all(temp.path().join("images")).unwrap();
    fs::write(temp.path().join("fonts/Inter-Regular.woff2"), b"wOF2\x00\x01\x00\x00rest").unwrap();
    fs::write(temp.path().join("fonts/broken.woff2"), b"<html>not a font</html>").unwrap();
    fs::write(temp.path().join("images/logo.svg"), b"<svg/>").unwrap();
    temp
}

#[tokio::test]
async fn test_path_traversal_blocked() {
    let temp = seeded();
    let store = AssetStore::builder().root(temp.path()).open().await.unwrap();

    assert!(matches!(store.resolve("../etc/passwd"), Err(AssetError::PathTraversalAttempt { .. })));
    assert!(store.resolve("images/../../outside").is_err());
    assert!(store.resolve("images/../images/logo.svg").is_ok());
}

#[tokio::test]
async fn test_missing_root_is_an_error_unless_created() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("public");

    assert!(matches!(
        AssetStore::builder().root(&root).open().await,
        Err(AssetError::Io { .. })
    ));

    let store = AssetStore::builder().root(&root).create(true).open().await.unwrap();
    assert!(store.root().ends_with("public"));
}

#[tokio::test]
async fn test_reads_are_cached_by_normalized_id() {
    let temp = seeded();
    let store = AssetStore::builder().root(temp.path()).open().await.unwrap();

    let first = store.read("/images/logo.svg?v=2").await.unwrap();
    assert!(store.is_cached("images/logo.svg"));

    fs::remove_file(temp.path().join("images/logo.svg")).unwrap();
    let second = store.read("images/logo.svg").await.unwrap();
    assert_eq!(first, second);

    store.evict("images/logo.svg");
    assert!(matches!(store.read("images/logo.svg").await, Err(AssetError::NotFound { .. })));
}

#[tokio::test]
async fn test_aliased_ids_share_one_cache_entry() {
    let temp = seeded();
    let store = AssetStore::builder().root(temp.path()).open().await.unwrap();

    store.read("fonts/../images/./logo.svg").await.unwrap();
    assert!(store.is_cached("images/logo.svg"));
    assert!(store.is_cached("/images/logo.svg#mark"));

    store.evict("images/logo.svg");
    assert!(!store.is_cached("fonts/../images/logo.svg"));
}

#[tokio::test]
async fn test_config_section_drives_the_builder() {
    let temp = seeded();
    let config = AssetsConfig { root: temp.path().to_path_buf(), cache_capacity: 8 };
    let store = AssetStore::builder().config(&config).open().await.unwrap();

    assert!(store.read("images/logo.svg").await.is_ok());
}

#[tokio::test]
async fn test_preload_maps_errors_for_the_phase() {
    let temp = seeded();
    let store = AssetStore::builder().root(temp.path()).open().await.unwrap();

    let present = CriticalResource::new("images/logo.svg", AssetType::Image);
    let missing = CriticalResource::new("images/hero.png", AssetType::Image);

    assert!(store.preload(&present).await.is_ok());
    assert!(matches!(
        store.preload(&missing).await,
        Err(CollaboratorError::Unavailable { .. })
    ));
}

#[tokio::test]
async fn test_fonts_are_signature_checked() {
    let temp = seeded();
    let store = AssetStore::builder().root(temp.path()).open().await.unwrap();

    assert_eq!(store.read_font("fonts/Inter-Regular.woff2").await.unwrap(), FontFormat::Woff2);
    assert!(store.load(&FontFace::new("Inter", "fonts/Inter-Regular.woff2")).await.is_ok());

    let broken = store.load(&FontFace::new("Broken", "fonts/broken.woff2")).await;
    assert!(matches!(broken, Err(CollaboratorError::Rejected { .. })));
    assert!(!store.is_cached("fonts/broken.woff2"));
}

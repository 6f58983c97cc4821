//! Batch conversion integration tests

use super::{converter_with, place_visit, story, write_document};
use crate::error::ConverterError;
use crate::geocode::testing::StaticResolver;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_batch_merges_files_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_document(
        root,
        "2021_AUGUST/2021_AUGUST.json",
        &json!({"timelineObjects": [place_visit("August", 407484000, -739857000)]}),
    );
    write_document(
        root,
        "2021_JULY/2021_JULY.json",
        &json!({"timelineObjects": [
            place_visit("July A", 515072000, -1276000),
            place_visit("July B", 515194000, -1270000),
        ]}),
    );
    write_document(
        root,
        "stories/stories.json",
        &json!({"ig_stories": [story("media/stories/202108/a.jpg", 40.7, -73.9)]}),
    );

    let conversion = converter_with(StaticResolver::new())
        .convert_batch(root)
        .await
        .unwrap();

    let names: Vec<_> = conversion
        .collection
        .features
        .iter()
        .map(|feature| feature.properties.get("name").cloned())
        .collect();
    assert_eq!(
        names,
        vec![
            Some(json!("August")),
            Some(json!("July A")),
            Some(json!("July B")),
            None,
        ]
    );

    let report = &conversion.report;
    assert_eq!(report.files_processed, 3);
    assert_eq!(report.files_failed, 0);
    assert_eq!(report.features_written, 4);
}

#[tokio::test]
async fn test_batch_skips_bad_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("broken")).unwrap();
    fs::write(root.join("broken/broken.json"), "not json").unwrap();
    write_document(root, "other/other.json", &json!({"locations": []}));
    write_document(
        root,
        "valid/valid.json",
        &json!({"timelineObjects": [place_visit("Valid", 407484000, -739857000)]}),
    );

    let conversion = converter_with(StaticResolver::new())
        .convert_batch(root)
        .await
        .unwrap();

    assert_eq!(conversion.collection.len(), 1);
    assert_eq!(conversion.report.files_processed, 1);
    assert_eq!(conversion.report.files_failed, 2);
    assert_eq!(
        conversion.report.failed_files,
        vec![root.join("broken/broken.json"), root.join("other/other.json")]
    );
}

#[tokio::test]
async fn test_batch_aborts_on_service_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_document(
        root,
        "2021_JULY/2021_JULY.json",
        &json!({"timelineObjects": [super::activity_segment(
            json!([{"placeId": "denied", "duration": "5s"}])
        )]}),
    );

    let result = converter_with(StaticResolver::new().with_failure("denied"))
        .convert_batch(root)
        .await;

    assert!(matches!(
        result,
        Err(ConverterError::RemoteService { .. })
    ));
}

#[tokio::test]
async fn test_batch_with_no_inputs() {
    let temp_dir = TempDir::new().unwrap();

    let conversion = converter_with(StaticResolver::new())
        .convert_batch(temp_dir.path())
        .await
        .unwrap();

    assert!(conversion.collection.is_empty());
    assert_eq!(conversion.report.files_processed, 0);
}

#[tokio::test]
async fn test_batch_missing_directory() {
    let temp_dir = TempDir::new().unwrap();

    let result = converter_with(StaticResolver::new())
        .convert_batch(&temp_dir.path().join("missing"))
        .await;

    assert!(matches!(result, Err(ConverterError::InputNotFound { .. })));
}

use chrono::{Duration, Utc};
use essensys_application::CatalogRepository;
use essensys_core::AppError;
use essensys_domain::{
    CatalogEntry, CatalogVersion, EntryDefaults, EntryFields, EntryId, VersionId, VersionStatus,
};

use super::InMemoryCatalogRepository;

fn version(name: &str) -> CatalogVersion {
    CatalogVersion::new(VersionId::new(), name, Utc::now()).unwrap_or_else(|_| unreachable!())
}

fn entry(keys: &str) -> CatalogEntry {
    CatalogEntry::new(
        EntryId::new(),
        EntryFields {
            categorie: "Eclairage".to_owned(),
            zone: "Salon".to_owned(),
            keys: keys.to_owned(),
            value: "1".to_owned(),
            ..EntryFields::default()
        },
        EntryDefaults::default(),
    )
    .unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn inserted_versions_are_listed_newest_first() {
    let repository = InMemoryCatalogRepository::new();
    let first = version("Version 1");
    let second = version("Version 2");

    assert!(repository.insert_version(first.clone()).await.is_ok());
    assert!(repository.insert_version(second.clone()).await.is_ok());

    let listed = repository.list_versions().await.unwrap_or_default();
    let names: Vec<&str> = listed.iter().map(CatalogVersion::name).collect();
    assert_eq!(names, vec!["Version 2", "Version 1"]);
    assert_eq!(repository.count_versions().await.ok(), Some(2));
}

#[tokio::test]
async fn duplicate_version_id_is_a_conflict() {
    let repository = InMemoryCatalogRepository::new();
    let first = version("Version 1");

    assert!(repository.insert_version(first.clone()).await.is_ok());
    let again = repository.insert_version(first).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn replace_version_requires_matching_updated_at() {
    let repository = InMemoryCatalogRepository::new();
    let original = version("Version 1");
    let expected = original.updated_at();
    assert!(repository.insert_version(original.clone()).await.is_ok());

    let next = original
        .clone()
        .with_entry_prepended(entry("K1"), Utc::now() + Duration::seconds(1));
    assert!(repository.replace_version(next.clone(), expected).await.is_ok());

    let lost_update = original.with_status(VersionStatus::Review, Utc::now());
    let result = repository.replace_version(lost_update, expected).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let stored = repository
        .find_version(next.id())
        .await
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(stored.entries().len(), 1);
    assert_eq!(stored.status(), VersionStatus::Draft);
}

#[tokio::test]
async fn snapshots_are_isolated_from_later_writes() {
    let repository = InMemoryCatalogRepository::new();
    let original = version("Version 1");
    assert!(repository.insert_version(original.clone()).await.is_ok());

    let snapshot = repository
        .find_version(original.id())
        .await
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    let next = snapshot
        .clone()
        .with_entry_prepended(entry("K1"), Utc::now() + Duration::seconds(1));
    assert!(
        repository
            .replace_version(next, original.updated_at())
            .await
            .is_ok()
    );

    assert!(snapshot.entries().is_empty());
}

#[tokio::test]
async fn replacing_unknown_version_is_not_found() {
    let repository = InMemoryCatalogRepository::new();
    let missing = version("Version 1");
    let expected = missing.updated_at();

    let result = repository.replace_version(missing, expected).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn selection_must_reference_existing_version() {
    let repository = InMemoryCatalogRepository::new();
    assert_eq!(repository.selected_version_id().await.ok(), Some(None));

    let result = repository.select_version(VersionId::new()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let stored = version("Version 1");
    assert!(repository.insert_version(stored.clone()).await.is_ok());
    assert!(repository.select_version(stored.id()).await.is_ok());
    assert_eq!(
        repository.selected_version_id().await.ok(),
        Some(Some(stored.id()))
    );
}

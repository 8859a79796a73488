/*!
 * Tests for the preference store
 */

use babelbot::store::{Repository, StoreConnection};

use crate::common::in_memory_repository;

#[tokio::test]
async fn test_setUserLang_thenGetUserLang_shouldReturnValue() {
    let repo = in_memory_repository();

    repo.set_user_lang("42", "fr").await.unwrap();

    assert_eq!(repo.get_user_lang("42").await.unwrap().unwrap(), "fr");
}

#[tokio::test]
async fn test_getUserLang_withNoPreference_shouldReturnNone() {
    let repo = in_memory_repository();
    assert!(repo.get_user_lang("42").await.unwrap().is_none());
}

#[tokio::test]
async fn test_upsertChannel_twiceSameThenDifferent_shouldKeepSingleRowLastLang() {
    let repo = in_memory_repository();

    repo.add_translation_channel("chan", "fr").await.unwrap();
    repo.add_translation_channel("chan", "fr").await.unwrap();
    repo.add_translation_channel("chan", "de").await.unwrap();

    let channels = repo.list_translation_channels().await.unwrap();
    assert_eq!(channels, vec![("chan".to_string(), "de".to_string())]);
}

#[tokio::test]
async fn test_removeChannel_onMissingId_shouldBeIdempotentNoOp() {
    let repo = in_memory_repository();

    repo.add_translation_channel("kept", "es").await.unwrap();
    repo.remove_translation_channel("missing").await.unwrap();

    // Store state unchanged
    let channels = repo.list_translation_channels().await.unwrap();
    assert_eq!(channels, vec![("kept".to_string(), "es".to_string())]);
}

#[tokio::test]
async fn test_addThenRemoveChannel_shouldDisappearFromListing() {
    let repo = in_memory_repository();

    repo.add_translation_channel("100", "es").await.unwrap();
    let channels = repo.list_translation_channels().await.unwrap();
    assert!(channels.contains(&("100".to_string(), "es".to_string())));

    repo.remove_translation_channel("100").await.unwrap();
    let channels = repo.list_translation_channels().await.unwrap();
    assert!(!channels.contains(&("100".to_string(), "es".to_string())));
}

#[tokio::test]
async fn test_store_shouldPersistAcrossReopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("prefs.db");

    {
        let repo = Repository::new(StoreConnection::new(&db_path).unwrap());
        repo.set_user_lang("42", "fr").await.unwrap();
        repo.add_translation_channel("100", "es").await.unwrap();
    }

    // Reopen the same file - durable writes must survive
    let repo = Repository::new(StoreConnection::new(&db_path).unwrap());
    assert_eq!(repo.get_user_lang("42").await.unwrap().unwrap(), "fr");
    assert!(repo.is_translation_channel("100").await.unwrap());
}

#[tokio::test]
async fn test_init_onEveryStart_shouldBeIdempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("prefs.db");

    let repo = Repository::new(StoreConnection::new(&db_path).unwrap());
    repo.init().unwrap();
    repo.set_user_lang("1", "de").await.unwrap();
    repo.init().unwrap();

    assert_eq!(repo.get_user_lang("1").await.unwrap().unwrap(), "de");
}

#[tokio::test]
async fn test_stats_shouldCountRows() {
    let repo = in_memory_repository();

    repo.set_user_lang("1", "fr").await.unwrap();
    repo.set_user_lang("2", "de").await.unwrap();
    repo.add_translation_channel("100", "es").await.unwrap();

    let stats = repo.connection().stats().unwrap();
    assert_eq!(stats.user_count, 2);
    assert_eq!(stats.channel_count, 1);
}

#[tokio::test]
async fn test_concurrentWrites_toDistinctKeys_shouldAllLand() {
    let repo = in_memory_repository();

    let mut handles = Vec::new();
    for i in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.set_user_lang(&i.to_string(), "fr").await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for i in 0..20 {
        assert_eq!(
            repo.get_user_lang(&i.to_string()).await.unwrap().unwrap(),
            "fr"
        );
    }
}

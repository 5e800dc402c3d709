#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;
    use vigil::libs::storage::{StateStore, KEY_ACTIVITY_LOGS, KEY_IS_MONITORING, KEY_MONITORING_USERNAME};

    fn store_in(temp_dir: &TempDir) -> StateStore {
        StateStore::with_path(temp_dir.path().join("state.json"))
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        let value: Option<bool> = store.get(KEY_IS_MONITORING).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        store.set(KEY_IS_MONITORING, &true).await.unwrap();
        store.set(KEY_MONITORING_USERNAME, &"alice".to_string()).await.unwrap();

        assert_eq!(store.get::<bool>(KEY_IS_MONITORING).await.unwrap(), Some(true));
        assert_eq!(
            store.get::<String>(KEY_MONITORING_USERNAME).await.unwrap(),
            Some("alice".to_string())
        );
    }

    #[tokio::test]
    async fn test_set_preserves_other_keys() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        store.set(KEY_MONITORING_USERNAME, &"alice".to_string()).await.unwrap();
        store.set(KEY_IS_MONITORING, &true).await.unwrap();

        // Writing one key must not clobber the rest of the object.
        assert_eq!(
            store.get::<String>(KEY_MONITORING_USERNAME).await.unwrap(),
            Some("alice".to_string())
        );
    }

    #[tokio::test]
    async fn test_set_many_lands_in_one_write() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        store
            .set_many(vec![(KEY_IS_MONITORING, json!(true)), (KEY_MONITORING_USERNAME, json!("bob"))])
            .await
            .unwrap();

        assert_eq!(store.get::<bool>(KEY_IS_MONITORING).await.unwrap(), Some(true));
        assert_eq!(store.get::<String>(KEY_MONITORING_USERNAME).await.unwrap(), Some("bob".to_string()));
    }

    #[tokio::test]
    async fn test_list_values_round_trip_in_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        let lines = vec!["first".to_string(), "second".to_string(), "third".to_string()];
        store.set(KEY_ACTIVITY_LOGS, &lines).await.unwrap();

        assert_eq!(store.get::<Vec<String>>(KEY_ACTIVITY_LOGS).await.unwrap(), Some(lines));
    }

    #[tokio::test]
    async fn test_remove_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        store.set(KEY_IS_MONITORING, &true).await.unwrap();
        store.remove(KEY_IS_MONITORING).await.unwrap();

        assert_eq!(store.get::<bool>(KEY_IS_MONITORING).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_the_same_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);
        let clone = store.clone();

        store.set(KEY_IS_MONITORING, &true).await.unwrap();
        assert_eq!(clone.get::<bool>(KEY_IS_MONITORING).await.unwrap(), Some(true));
    }
}

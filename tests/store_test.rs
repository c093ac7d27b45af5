#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glossa::language::{ARABIC, ENGLISH};
    use glossa::spelling::DictionaryEntry;
    use glossa::storage::DataStore;
    use glossa::storage::memory::MemoryStore;

    async fn shared_store() -> Arc<dyn DataStore> {
        let store: Arc<dyn DataStore> = Arc::new(MemoryStore::new());
        store.initialize().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_term_indices_are_stable() {
        let store = shared_store().await;

        for (i, term) in ["albert", "argument", "academically"].iter().enumerate() {
            let count = store.push_term(term).await.unwrap();
            assert_eq!(count - 1, i);
        }

        let terms = store.get_terms_at(&[2, 0, 7]).await.unwrap();
        assert_eq!(terms[0].as_deref(), Some("academically"));
        assert_eq!(terms[1].as_deref(), Some("albert"));
        assert_eq!(terms[2], None);
    }

    #[tokio::test]
    async fn test_entry_overwrite() {
        let store = shared_store().await;

        let mut entry = DictionaryEntry::placeholder(0);
        store.set_entry("argment", entry.clone()).await.unwrap();
        entry.push_term(4);
        store.set_entry("argment", entry).await.unwrap();

        let stored = store.get_entry("argment").await.unwrap().unwrap();
        assert_eq!(stored.to_vec(), vec![0, 0, 4]);

        let entries = store
            .get_entries(&["argment".to_string(), "nothing".to_string()])
            .await
            .unwrap();
        assert!(entries[0].is_some());
        assert!(entries[1].is_none());
    }

    #[tokio::test]
    async fn test_namespaces_per_language() {
        let store = shared_store().await;
        store.push_term("albert").await.unwrap();
        store
            .set_entry("electrodynamics", DictionaryEntry::new(1))
            .await
            .unwrap();

        store.set_language(ARABIC).await.unwrap();
        store.set_language(ARABIC).await.unwrap();
        store.push_term("ممتاز").await.unwrap();
        store.set_entry("ممتاز", DictionaryEntry::new(1)).await.unwrap();

        assert_eq!(store.get_term_at(0).await.unwrap().as_deref(), Some("ممتاز"));
        assert_eq!(store.max_entry_length().await.unwrap(), 5);
        assert!(!store.has_entry("electrodynamics").await.unwrap());

        store.set_language(ENGLISH).await.unwrap();
        assert_eq!(store.get_term_at(0).await.unwrap().as_deref(), Some("albert"));
        assert_eq!(store.max_entry_length().await.unwrap(), 15);
    }

    #[tokio::test]
    async fn test_clear_resets_active_namespace() {
        let store = MemoryStore::new();
        store.initialize().await.unwrap();

        store.push_term("albert").await.unwrap();
        store.set_entry("albert", DictionaryEntry::new(2)).await.unwrap();
        store.set_language(ARABIC).await.unwrap();
        store.push_term("ممتاز").await.unwrap();

        store.set_language(ENGLISH).await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.term_count(), 0);
        assert_eq!(store.max_entry_length().await.unwrap(), 0);
        assert_eq!(store.get_term_at(0).await.unwrap(), None);

        // New terms restart at index 0 after a clear.
        assert_eq!(store.push_term("argument").await.unwrap(), 1);

        store.set_language(ARABIC).await.unwrap();
        assert_eq!(store.term_count(), 1);
        assert_eq!(store.language_count(), 2);
    }

    #[tokio::test]
    async fn test_entry_json_encoding() {
        let entry = DictionaryEntry {
            frequency: 3,
            terms: vec![1, 2],
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, "[3,1,2]");

        let decoded: DictionaryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }
}

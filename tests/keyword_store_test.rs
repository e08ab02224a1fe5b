//! Keyword store integration tests
//! Run with: cargo test --test keyword_store_test

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Once};

use wordbank_bot::{JsonKeywordStore, KeywordStore};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn open(path: &Path, seed: u64) -> JsonKeywordStore {
    ensure_init();
    JsonKeywordStore::open_with_rng(path, StdRng::seed_from_u64(seed)).expect("store should open")
}

#[tokio::test]
async fn test_reply_only_in_enabled_group() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("bank.json"), 1);

    store.add_entry("hi", "hello").await.unwrap();
    store.enable_in_group("hi", "g1").await.unwrap();

    assert_eq!(store.get_reply("hi", "g1").await.as_deref(), Some("hello"));
    assert_eq!(store.get_reply("hi", "g2").await, None);
}

#[tokio::test]
async fn test_remove_first_entry_by_index() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("bank.json"), 1);

    store.add_entry("hi", "a").await.unwrap();
    store.add_entry("hi", "b").await.unwrap();
    assert!(store.remove_entry_at("hi", 0).await.unwrap());

    assert_eq!(store.list_entries("hi").await, vec!["b"]);
}

#[tokio::test]
async fn test_remove_by_index_on_unknown_keyword() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("bank.json"), 1);

    assert!(!store.remove_entry_at("ghost", 0).await.unwrap());
    assert!(store.get_all_keys().await.is_empty());
    assert!(!dir.path().join("bank.json").exists());
}

#[tokio::test]
async fn test_set_aliases_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("bank.json"), 1);

    store.add_entry("hi", "hello").await.unwrap();
    store.set_aliases("hi", vec!["greet".to_string()]).await.unwrap();
    store.set_aliases("hi", vec!["yo".to_string()]).await.unwrap();

    assert!(store.list_entries("greet").await.is_empty());
    assert_eq!(store.list_entries("yo").await, vec!["hello"]);
}

#[tokio::test]
async fn test_alias_reads_match_canonical() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("bank.json"), 1);

    store.add_entry("foo", "x").await.unwrap();
    store.enable_in_group("foo", "g1").await.unwrap();
    assert!(store.add_alias("foo", "bar").await.unwrap());
    assert!(!store.add_alias("foo", "bar").await.unwrap());

    assert_eq!(store.list_entries("bar").await, store.list_entries("foo").await);
    for group in ["g1", "g2"] {
        assert_eq!(store.is_enabled("bar", group).await, store.is_enabled("foo", group).await);
    }
    assert_eq!(store.get_keyword_info("bar").await, store.get_keyword_info("foo").await);
}

#[tokio::test]
async fn test_delete_removes_record_and_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("bank.json"), 1);

    store.add_entry("hi", "hello").await.unwrap();
    store.set_aliases("hi", vec!["greet".to_string(), "yo".to_string()]).await.unwrap();
    assert!(store.delete_keyword("hi").await.unwrap());
    assert!(!store.delete_keyword("hi").await.unwrap());

    for name in ["hi", "greet", "yo"] {
        assert_eq!(store.get_keyword_info(name).await, None);
    }
}

#[tokio::test]
async fn test_all_keywords_interleaves_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("bank.json"), 1);

    store.set_aliases("hi", vec!["greet".to_string(), "yo".to_string()]).await.unwrap();
    store.add_entry("bye", "see you").await.unwrap();
    store.add_alias("bye", "cya").await.unwrap();

    assert_eq!(store.get_all_keywords().await, vec!["hi", "greet", "yo", "bye", "cya"]);
    assert_eq!(store.get_all_keys().await, vec!["hi", "bye"]);
}

#[tokio::test]
async fn test_file_order_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.json");
    std::fs::write(
        &path,
        r#"{
  "zebra": {"entries": ["z"], "enabled_groups": ["g1"], "alias": ["x"]},
  "apple": {"entries": ["a"], "enabled_groups": ["g1"], "alias": ["x"]}
}"#,
    )
    .unwrap();

    let store = open(&path, 1);
    // shared alias resolves to the record listed first in the file
    assert_eq!(store.list_entries("x").await, vec!["z"]);

    store.add_entry("mango", "m").await.unwrap();
    assert_eq!(store.get_all_keys().await, vec!["zebra", "apple", "mango"]);

    let raw = std::fs::read_to_string(&path).unwrap();
    let zebra = raw.find("\"zebra\"").unwrap();
    let apple = raw.find("\"apple\"").unwrap();
    let mango = raw.find("\"mango\"").unwrap();
    assert!(zebra < apple && apple < mango);

    let reloaded = open(&path, 1);
    assert_eq!(reloaded.get_all_keys().await, vec!["zebra", "apple", "mango"]);
}

#[tokio::test]
async fn test_replies_drawn_from_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir.path().join("bank.json"), 99);

    let entries = ["a", "b", "c"];
    for entry in entries {
        store.add_entry("hi", entry).await.unwrap();
    }
    store.enable_in_group("hi", "g1").await.unwrap();

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let reply = store.get_reply("hi", "g1").await.expect("enabled keyword should reply");
        assert!(entries.contains(&reply.as_str()));
        seen.insert(reply);
    }
    // 200 uniform draws over 3 entries hit every one of them
    assert_eq!(seen.len(), entries.len());
}

#[tokio::test]
async fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.json");

    {
        let store = open(&path, 1);
        store.add_entry("hi", "b").await.unwrap();
        store.add_entry("hi", "a").await.unwrap();
        store.add_alias("hi", "greet").await.unwrap();
        store.enable_in_group("hi", "g2").await.unwrap();
        store.enable_in_group("hi", "g1").await.unwrap();
        store.add_entry("bye", "later").await.unwrap();
    }

    let before = open(&path, 1);
    let after = open(&path, 2);
    assert_eq!(after.get_all_keys().await, before.get_all_keys().await);

    let record = after.get_keyword_info("greet").await.expect("alias should resolve");
    assert_eq!(record.entries, vec!["b", "a"]);
    assert_eq!(record.aliases, vec!["greet"]);
    let groups: HashSet<_> = record.enabled_groups.iter().map(String::as_str).collect();
    assert_eq!(groups, HashSet::from(["g1", "g2"]));
}

#[tokio::test]
async fn test_loads_existing_word_bank_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("default_word_bank.json");
    std::fs::write(
        &path,
        r#"{
  "早上好": {
    "entries": ["早", "早安"],
    "enabled_groups": ["123456"],
    "alias": ["早安呀"]
  },
  "legacy": {
    "entries": ["old"]
  }
}"#,
    )
    .unwrap();

    let store = open(&path, 3);
    assert!(store.is_enabled("早安呀", "123456").await);
    assert_eq!(store.list_entries("早安呀").await, vec!["早", "早安"]);
    assert_eq!(store.list_entries("legacy").await, vec!["old"]);
    assert!(!store.is_enabled("legacy", "123456").await);
}

#[tokio::test]
async fn test_concurrent_writers_are_serialized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.json");
    let store = Arc::new(open(&path, 1));

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.add_entry("hi", &format!("entry-{}", i)).await.unwrap();
            store.enable_in_group("hi", &format!("g{}", i)).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list_entries("hi").await.len(), 16);
    let reloaded = open(&path, 1);
    assert_eq!(reloaded.list_entries("hi").await.len(), 16);
    for i in 0..16 {
        assert!(reloaded.is_enabled("hi", &format!("g{}", i)).await);
    }
}

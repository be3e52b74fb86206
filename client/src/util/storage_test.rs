use super::*;
use crate::net::types::Role;

fn farmer() -> User {
    User {
        id: "u1".to_owned(),
        name: "Sari".to_owned(),
        email: "sari@example.com".to_owned(),
        role: Role::Farmer,
        company_id: Some("c1".to_owned()),
        profile_image: None,
    }
}

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert!(store.get("k").is_none());
}

#[test]
fn session_record_round_trips_under_fixed_key() {
    let store = MemoryStore::new();
    let record = SessionRecord { user: Some(farmer()), token: Some("tok".to_owned()) };
    save_session(&store, &record);

    assert_eq!(store.len(), 1);
    assert!(store.get(SESSION_KEY).is_some());
    assert_eq!(load_session(&store), Some(record));
}

#[test]
fn session_record_is_json_with_user_and_token() {
    let store = MemoryStore::new();
    save_session(&store, &SessionRecord { user: Some(farmer()), token: Some("tok".to_owned()) });

    let raw = store.get(SESSION_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["token"], "tok");
    assert_eq!(value["user"]["email"], "sari@example.com");
}

#[test]
fn corrupt_record_reads_as_absent() {
    let store = MemoryStore::new();
    store.set(SESSION_KEY, "{not json");
    assert!(load_session(&store).is_none());
    assert!(load_token(&store).is_none());
}

#[test]
fn empty_token_reads_as_absent() {
    let store = MemoryStore::new();
    save_session(&store, &SessionRecord { user: Some(farmer()), token: Some(String::new()) });
    assert!(load_token(&store).is_none());
}

#[test]
fn clear_session_removes_record() {
    let store = MemoryStore::new();
    save_session(&store, &SessionRecord { user: None, token: Some("tok".to_owned()) });
    clear_session(&store);
    assert!(store.is_empty());
}

#[test]
fn local_storage_is_empty_outside_browser() {
    let store = LocalStorage;
    store.set(SESSION_KEY, "{}");
    assert!(store.get(SESSION_KEY).is_none());
}

use marketdata_admin::application::config::Config;
use marketdata_admin::constants::AUTH_TOKEN_KEY;
use marketdata_admin::model::auth::TokenPair;
use marketdata_admin::session::{FileStore, HeadlessNavigator, MemoryStore, Navigator, Session, SessionStore};
use tempfile::tempdir;

#[test]
fn test_memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("authToken"), None);

    store.set("authToken", "abc").unwrap();
    assert_eq!(store.get("authToken").as_deref(), Some("abc"));

    store.remove("authToken").unwrap();
    store.remove("authToken").unwrap();
    assert_eq!(store.get("authToken"), None);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.set("authToken", "abc").unwrap();
        store.set("refreshToken", "def").unwrap();
        store.remove("refreshToken").unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.path(), path.as_path());
    assert_eq!(reopened.get("authToken").as_deref(), Some("abc"));
    assert_eq!(reopened.get("refreshToken"), None);
}

#[test]
fn test_file_store_empty_file_is_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("authToken"), None);
}

#[test]
fn test_file_store_rejects_corrupt_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(FileStore::open(&path).is_err());
}

#[test]
fn test_session_from_config_uses_file_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    let mut config = Config::with_base_url("http://localhost:1");
    config.storage.path = Some(path.clone());

    let session = Session::from_config(&config).unwrap();
    session
        .store_tokens(&TokenPair {
            access_token: "persisted".to_string(),
            refresh_token: "r".to_string(),
        })
        .unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(AUTH_TOKEN_KEY).as_deref(), Some("persisted"));
}

#[test]
fn test_headless_navigator_tracks_location() {
    let navigator = HeadlessNavigator::default();
    assert_eq!(navigator.current_location(), "/");

    navigator.navigate("/login");
    assert_eq!(navigator.current_location(), "/login");
}

#[test]
fn test_file_store_failed_write_keeps_memory_consistent() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let store = FileStore::open(blocker.join("session.json")).unwrap();

    assert!(store.set("authToken", "abc").is_err());
    assert_eq!(store.get("authToken"), None);
}

#[test]
fn test_file_store_failed_remove_keeps_value() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"authToken":"abc"}"#).unwrap();
    let store = FileStore::open(&path).unwrap();

    // Replacing the file with a directory makes the next write fail
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    assert!(store.remove("authToken").is_err());
    assert_eq!(store.get("authToken").as_deref(), Some("abc"));
}

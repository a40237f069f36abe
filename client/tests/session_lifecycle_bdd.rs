//! Behaviour tests for persisting and restoring the session.
//!
//! Each scenario drives a `SessionStore` over `FileSessionStorage` in a
//! temporary directory and "restarts" by building a fresh store on the same
//! directory.

use std::sync::Arc;

use camino::Utf8PathBuf;
use holidaze::domain::{AccessToken, Session, SessionStatus, SessionStore};
use holidaze::outbound::storage::{FileSessionStorage, SESSION_FILE};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

struct SessionWorld {
    _tmp: TempDir,
    dir: Utf8PathBuf,
    store: SessionStore,
    restored: Option<Option<Session>>,
}

impl SessionWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("temporary directory");
        let dir = Utf8PathBuf::from_path_buf(tmp.path().join("holidaze"))
            .expect("temporary path should be valid UTF-8");
        let store = open_store(&dir);
        Self {
            _tmp: tmp,
            dir,
            store,
            restored: None,
        }
    }

    fn restored(&self) -> Option<&Session> {
        self.restored
            .as_ref()
            .expect("the client should have restarted")
            .as_ref()
    }
}

fn open_store(dir: &Utf8PathBuf) -> SessionStore {
    let storage = FileSessionStorage::open(dir).expect("session directory opens");
    SessionStore::new(Arc::new(storage))
}

#[fixture]
fn world() -> SessionWorld {
    SessionWorld::new()
}

#[given("an empty session directory")]
fn an_empty_session_directory(world: &mut SessionWorld) {
    assert!(!world.dir.join(SESSION_FILE).exists());
}

#[given("a session directory containing a corrupt record")]
fn a_session_directory_containing_a_corrupt_record(world: &mut SessionWorld) {
    std::fs::write(world.dir.join(SESSION_FILE), "{\"name\": \"kari\", \"accessTok")
        .expect("corrupt record written");
}

#[when("{name} logs in with token {token}")]
fn user_logs_in(world: &mut SessionWorld, name: String, token: String) {
    world
        .store
        .login(Session {
            email: format!("{name}@stud.noroff.no"),
            name,
            avatar: None,
            venue_manager: false,
            access_token: AccessToken::new(token),
        })
        .expect("login persists");
}

#[when("the user logs out")]
fn the_user_logs_out(world: &mut SessionWorld) {
    world.store.logout().expect("logout clears the record");
    assert_eq!(world.store.current(), None);
}

#[when("the client restarts")]
fn the_client_restarts(world: &mut SessionWorld) {
    world.store = open_store(&world.dir);
    assert_eq!(world.store.status(), SessionStatus::Restoring);
    world.restored = Some(world.store.restore());
}

#[then("the restored session belongs to {name}")]
fn the_restored_session_belongs_to(world: &mut SessionWorld, name: String) {
    let restored = world.restored().expect("a session should be restored");
    assert_eq!(restored.name, name);
    assert_eq!(world.store.status(), SessionStatus::LoggedIn);
}

#[then("the restored token is {token}")]
fn the_restored_token_is(world: &mut SessionWorld, token: String) {
    let restored = world.restored().expect("a session should be restored");
    assert_eq!(restored.token().expose(), token);
}

#[then("no session is restored")]
fn no_session_is_restored(world: &mut SessionWorld) {
    assert!(world.restored().is_none());
    assert_eq!(world.store.status(), SessionStatus::LoggedOut);
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "A stored login is restored by a fresh store"
)]
fn a_stored_login_is_restored(world: SessionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "Logging in again replaces the previous session"
)]
fn logging_in_again_replaces_the_previous_session(world: SessionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "Logging out forgets the stored session"
)]
fn logging_out_forgets_the_stored_session(world: SessionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_lifecycle.feature",
    name = "A corrupt session record restores as logged out"
)]
fn a_corrupt_record_restores_as_logged_out(world: SessionWorld) {
    drop(world);
}

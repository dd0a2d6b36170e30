//! BDD tests for the keyed ephemeral store

use cucumber::{given, then, when, World};
use stash_core::{Result, Scope, StashError, Store};

#[derive(Debug, World)]
#[world(init = Self::new)]
struct StorageWorld {
    store: Store,
    last_error: Option<StashError>,
}

impl StorageWorld {
    fn new() -> Self {
        Self {
            // Every scenario gets its own isolated store instance.
            store: Store::new(Scope::Local),
            last_error: None,
        }
    }

    fn record(&mut self, result: Result<()>) {
        self.last_error = result.err();
    }
}

#[given("an empty store")]
async fn given_empty_store(world: &mut StorageWorld) {
    world.store.clear();
}

#[given(expr = "the store holds {string} with value {string}")]
async fn given_store_holds(world: &mut StorageWorld, key: String, value: String) {
    world.store.set_item(&key, &value).unwrap();
}

#[when(expr = "I store {string} with value {string}")]
async fn when_store(world: &mut StorageWorld, key: String, value: String) {
    let result = world.store.set_item(&key, &value);
    world.record(result);
}

#[when(expr = "I update {string} to value {string}")]
async fn when_update(world: &mut StorageWorld, key: String, value: String) {
    let result = world.store.update_item(&key, &value);
    world.record(result);
}

#[when(expr = "I remove {string}")]
async fn when_remove(world: &mut StorageWorld, key: String) {
    let result = world.store.remove_item(&key);
    world.record(result);
}

#[when("I clear the store")]
async fn when_clear(world: &mut StorageWorld) {
    world.store.clear();
}

#[then(expr = "reading {string} yields {string}")]
async fn then_reading_yields(world: &mut StorageWorld, key: String, expected: String) {
    assert_eq!(world.store.get_item(&key).unwrap(), expected);
}

#[then(expr = "reading {string} fails because the key does not exist")]
async fn then_reading_fails(world: &mut StorageWorld, key: String) {
    assert_eq!(world.store.get_item(&key), Err(StashError::NotFound { key }));
}

#[then("the operation is rejected as a conflict")]
async fn then_rejected_as_conflict(world: &mut StorageWorld) {
    assert!(matches!(
        world.last_error,
        Some(StashError::Conflict { .. })
    ));
}

#[then("the operation is rejected because the key does not exist")]
async fn then_rejected_as_not_found(world: &mut StorageWorld) {
    assert!(matches!(
        world.last_error,
        Some(StashError::NotFound { .. })
    ));
}

#[then("the operation is rejected as an invalid argument")]
async fn then_rejected_as_invalid(world: &mut StorageWorld) {
    assert!(matches!(
        world.last_error,
        Some(StashError::InvalidArgument { .. })
    ));
}

#[then(expr = "the store holds {int} entry/entries")]
async fn then_store_holds(world: &mut StorageWorld, count: usize) {
    assert_eq!(world.store.len(), count);
}

#[then(expr = "the entries in order are {string}")]
async fn then_entries_in_order(world: &mut StorageWorld, expected: String) {
    let entries: Vec<String> = world
        .store
        .to_vec()
        .into_iter()
        .map(|e| format!("{}={}", e.key, e.value))
        .collect();
    let expected: Vec<String> = expected.split(", ").map(str::to_string).collect();
    assert_eq!(entries, expected);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("running storage suite with {}", stash_core::BUILD_INFO);

    StorageWorld::run("tests/features").await;
}

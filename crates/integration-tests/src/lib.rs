//! Shared fixtures for the Jobboard integration tests

use std::future::Future;
use std::panic;

use jobboard_core::domain::CreateJobListingInput;
use jobboard_infra_mongo::{connect, MongoJobStore, MongoSettings};

/// Environment variable naming a MongoDB deployment for the live tests
pub const TEST_MONGODB_URI: &str = "JOBBOARD_TEST_MONGODB_URI";

pub fn engineer() -> CreateJobListingInput {
    CreateJobListingInput::new(
        "Engineer",
        "Build things",
        "Acme",
        "http://acme.example/job/1",
    )
}

pub fn listing(n: usize) -> CreateJobListingInput {
    CreateJobListingInput::new(
        format!("Engineer {n}"),
        format!("Build thing #{n}"),
        format!("Company {}", n % 3),
        format!("http://acme.example/job/{n}"),
    )
}

/// Store bound to a fresh database on the live deployment, plus that database's name
pub async fn live_mongo_store() -> (MongoJobStore, String) {
    let uri = std::env::var(TEST_MONGODB_URI)
        .unwrap_or_else(|_| panic!("{TEST_MONGODB_URI} must point at a MongoDB deployment"));
    let db_name = format!("jobboard_test_{}", uuid::Uuid::new_v4().simple());

    let store = connect(&MongoSettings::for_uri(uri), &db_name)
        .await
        .expect("connect to test deployment");
    (store, db_name)
}

pub async fn live_client() -> mongodb::Client {
    let uri = std::env::var(TEST_MONGODB_URI).expect("test deployment uri");
    mongodb::Client::with_uri_str(uri)
        .await
        .expect("client for cleanup")
}

/// Drop a database created by `live_mongo_store`
pub async fn drop_live_database(db_name: &str) {
    live_client()
        .await
        .database(db_name)
        .drop()
        .await
        .expect("drop test database");
}

/// Run `test` to completion, then drop `db_name` even if `test` panicked
///
/// A panic from `test` is re-raised after the drop.
pub async fn run_then_drop<Fut>(db_name: &str, test: Fut)
where
    Fut: Future<Output = ()> + Send + 'static,
{
    let outcome = tokio::spawn(test).await;
    drop_live_database(db_name).await;

    if let Err(e) = outcome {
        if e.is_panic() {
            panic::resume_unwind(e.into_panic());
        }
        panic!("live test task failed: {e}");
    }
}

/// Run `body` against a store on a fresh live database that is always dropped afterwards
pub async fn with_live_store<F, Fut>(body: F)
where
    F: FnOnce(MongoJobStore) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let (store, db_name) = live_mongo_store().await;
    run_then_drop(&db_name, body(store)).await;
}

//! Delete orchestration against a scripted store.

mod support;

use ent_engine::{Deleter, EngineError, NoProgress};
use pretty_assertions::assert_eq;
use serde_json::json;
use support::MockStore;

#[tokio::test]
async fn delete_all_empties_the_store() {
    let store = MockStore::new()
        .with_entity("audit", json!({}))
        .with_entity("managed", json!({}))
        .with_entity("emailTemplate/welcome", json!({}));

    let deleted = Deleter::new(&store).delete_all(&NoProgress).await.unwrap();

    assert_eq!(deleted.len(), 3);
    assert!(store.ids().is_empty());
}

#[tokio::test]
async fn delete_by_type_only_touches_matching_ids() {
    let store = MockStore::new()
        .with_entity("script/a", json!({}))
        .with_entity("script/b", json!({}))
        .with_entity("audit", json!({}));

    let deleted = Deleter::new(&store)
        .delete_all_of_type("script", &NoProgress)
        .await
        .unwrap();

    assert_eq!(deleted.len(), 2);
    assert_eq!(store.ids(), vec!["audit"]);
    assert_eq!(store.call_count("delete "), 2);
}

#[tokio::test]
async fn one_failed_delete_does_not_stop_the_rest() {
    let store = MockStore::new()
        .with_entity("script/a", json!({}))
        .with_entity("script/b", json!({}))
        .with_entity("script/c", json!({}))
        .fail_delete("script/b", 500, "Internal Server Error", "boom");

    let err = Deleter::new(&store)
        .delete_all_of_type("script", &NoProgress)
        .await
        .unwrap_err();

    // All three were attempted, two landed.
    assert_eq!(store.call_count("delete "), 3);
    assert_eq!(store.ids(), vec!["script/b"]);

    let aggregate = err.aggregate().unwrap();
    assert_eq!(aggregate.attempted, 3);
    assert_eq!(aggregate.errors.len(), 1);
    assert_eq!(aggregate.errors[0].id, "script/b");
}

#[tokio::test]
async fn delete_all_aggregates_without_short_circuit() {
    let store = MockStore::new()
        .with_entity("audit", json!({}))
        .with_entity("managed", json!({}))
        .fail_delete("audit", 403, "Forbidden", "denied");

    let err = Deleter::new(&store).delete_all(&NoProgress).await.unwrap_err();

    assert_eq!(store.call_count("delete "), 2);
    assert_eq!(err.aggregate().unwrap().errors.len(), 1);
    assert_eq!(store.ids(), vec!["audit"]);
}

#[tokio::test]
async fn listing_failure_is_fatal_not_aggregated() {
    let store = MockStore::new().fail_listing(503, "Service Unavailable", "maintenance");

    let err = Deleter::new(&store).delete_all(&NoProgress).await.unwrap_err();

    assert!(matches!(err, EngineError::List(_)));
    assert_eq!(store.call_count("delete "), 0);
}

use chrono::Utc;
use enlist_database::Database;
use enlist_registration::{MIGRATIONS, RegistrantStore, Registrant, SurrealRegistrantStore};

async fn store() -> SurrealRegistrantStore {
    let db = Database::builder()
        .url("mem://")
        .session("enlist", "events_test")
        .migrations(MIGRATIONS.iter().copied())
        .init()
        .await
        .expect("in-memory database");
    SurrealRegistrantStore::new(db)
}

fn registrant(identifier: &str) -> Registrant {
    Registrant {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        identifier: identifier.to_owned(),
        credential: "aB3$xY9!qR".to_owned(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn inserted_records_can_be_found() {
    let store = store().await;
    let alice = registrant("5b0c8a5e-2a8e-4b8e-9c53-0c6f3f7b6a11");

    assert!(!store.contains(&alice.identifier).await.unwrap());
    store.insert(&alice).await.unwrap();
    assert!(store.contains(&alice.identifier).await.unwrap());
    assert!(!store.contains("someone-else").await.unwrap());
}

#[tokio::test]
async fn bounded_inserts_still_commit() {
    let store = store().await.with_write_timeout(std::time::Duration::from_secs(5));
    let alice = registrant("c2d4e6f8-1a3b-4c5d-8e7f-9a0b1c2d3e4f");

    store.insert(&alice).await.unwrap();
    assert!(store.contains(&alice.identifier).await.unwrap());
}

#[tokio::test]
async fn duplicate_identifiers_are_rejected() {
    let store = store().await;
    let alice = registrant("1f6a3f0c-77e4-4a3d-8d8e-6c0b7d1e2f33");

    store.insert(&alice).await.unwrap();
    let err = store.insert(&alice).await.unwrap_err();
    assert!(
        matches!(err, enlist_registration::RegistrationError::Storage { .. }),
        "{err}"
    );
}

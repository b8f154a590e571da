mod common;

use common::*;
use enlist_kernel::domain::config::RegistrationConfig;
use enlist_registration::{
    PASSWORD_ALPHABET, RegisterRequest, RegistrantStore, RegistrationError, RegistrationWorkflow,
};
use std::sync::Arc;

fn alice() -> RegisterRequest {
    RegisterRequest { name: Some("Alice".to_owned()), email: Some("alice@example.com".to_owned()) }
}

#[tokio::test]
async fn valid_request_stores_once_and_notifies_once() {
    let store = Arc::new(MemoryStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let registrant = workflow(store.clone(), notifier.clone()).register(alice()).await.unwrap();

    assert_eq!(registrant.name, "Alice");
    assert_eq!(registrant.email, "alice@example.com");
    assert_eq!(registrant.credential.len(), 10);
    assert!(registrant.credential.bytes().all(|b| PASSWORD_ALPHABET.contains(&b)));
    assert!(uuid_like(&registrant.identifier), "{}", registrant.identifier);

    assert_eq!(store.records(), vec![registrant.clone()]);
    assert_eq!(notifier.sent(), vec![registrant.clone()]);
    assert!(store.contains(&registrant.identifier).await.unwrap());
}

#[tokio::test]
async fn invalid_request_touches_nothing() {
    let store = Arc::new(MemoryStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let flow = workflow(store.clone(), notifier.clone());

    for request in [
        RegisterRequest { name: None, ..alice() },
        RegisterRequest { email: Some(String::new()), ..alice() },
        RegisterRequest::default(),
    ] {
        let err = flow.register(request).await.unwrap_err();
        assert!(matches!(err, RegistrationError::Validation { .. }));
    }

    assert!(store.records().is_empty());
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn storage_failure_skips_notification() {
    let notifier = Arc::new(RecordingNotifier::default());
    let err = workflow(Arc::new(FailingStore), notifier.clone()).register(alice()).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Storage { .. }), "{err}");
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn notification_failure_keeps_the_record() {
    let store = Arc::new(MemoryStore::default());
    let err = workflow(store.clone(), Arc::new(FailingNotifier)).register(alice()).await.unwrap_err();

    assert!(matches!(err, RegistrationError::Notification { .. }), "{err}");
    let records = store.records();
    assert_eq!(records.len(), 1);
    assert!(store.contains(&records[0].identifier).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn slow_store_times_out_as_storage_error() {
    let notifier = Arc::new(RecordingNotifier::default());
    let config = RegistrationConfig { store_timeout_secs: 1, ..RegistrationConfig::default() };
    let err = workflow_with(&config, Arc::new(SlowStore), notifier.clone())
        .register(alice())
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::Storage { .. }), "{err}");
    assert!(err.to_string().contains("timed out"), "{err}");
    assert!(notifier.sent().is_empty());
}

#[tokio::test(start_paused = true)]
async fn timed_out_insert_reports_the_identifier_it_may_have_left() {
    let store = Arc::new(StalledAckStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let config = RegistrationConfig { store_timeout_secs: 1, ..RegistrationConfig::default() };
    let err = workflow_with(&config, store.clone(), notifier.clone())
        .register(alice())
        .await
        .unwrap_err();

    assert!(matches!(err, RegistrationError::Storage { .. }), "{err}");
    assert!(notifier.sent().is_empty());

    let committed = store.inner.records();
    assert_eq!(committed.len(), 1);
    assert!(err.to_string().contains(&committed[0].identifier), "{err}");
}

#[tokio::test]
async fn each_registration_gets_fresh_credentials() {
    let store = Arc::new(MemoryStore::default());
    let flow = workflow(store.clone(), Arc::new(RecordingNotifier::default()));

    let first = flow.register(alice()).await.unwrap();
    let second = flow.register(alice()).await.unwrap();

    assert_ne!(first.identifier, second.identifier);
    assert_eq!(store.records().len(), 2);
}

#[tokio::test]
async fn configured_password_length_is_used() {
    let config = RegistrationConfig { password_length: 24, ..RegistrationConfig::default() };
    let registrant = workflow_with(
        &config,
        Arc::new(MemoryStore::default()),
        Arc::new(RecordingNotifier::default()),
    )
    .register(alice())
    .await
    .unwrap();

    assert_eq!(registrant.credential.len(), 24);
}

#[test]
fn invalid_settings_are_rejected() {
    let store = Arc::new(MemoryStore::default());
    let notifier = Arc::new(RecordingNotifier::default());

    for config in [
        RegistrationConfig { password_length: 0, ..RegistrationConfig::default() },
        RegistrationConfig { store_timeout_secs: 0, ..RegistrationConfig::default() },
        RegistrationConfig { notify_timeout_secs: 0, ..RegistrationConfig::default() },
    ] {
        let err = RegistrationWorkflow::new(&config, store.clone(), notifier.clone()).unwrap_err();
        assert!(matches!(err, RegistrationError::Config { .. }), "{config:?}");
    }
}

fn uuid_like(value: &str) -> bool {
    let groups: Vec<usize> = value.split('-').map(str::len).collect();
    groups == [8, 4, 4, 4, 12] && value.chars().all(|c| c == '-' || c.is_ascii_hexdigit())
}

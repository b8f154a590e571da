#![allow(dead_code, unreachable_pub)]

use async_trait::async_trait;
use enlist_database::DatabaseError;
use enlist_mailer::MailerError;
use enlist_registration::{
    CredentialNotifier, RegistrantStore, Registrant, RegistrationError, RegistrationWorkflow,
};
use enlist_kernel::domain::config::RegistrationConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Registrant>>,
}

impl MemoryStore {
    pub fn records(&self) -> Vec<Registrant> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrantStore for MemoryStore {
    async fn insert(&self, registrant: &Registrant) -> Result<(), RegistrationError> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.identifier == registrant.identifier) {
            return Err(DatabaseError::from("duplicate identifier").into());
        }
        records.push(registrant.clone());
        Ok(())
    }

    async fn contains(&self, identifier: &str) -> Result<bool, RegistrationError> {
        Ok(self.records.lock().unwrap().iter().any(|r| r.identifier == identifier))
    }
}

#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl RegistrantStore for FailingStore {
    async fn insert(&self, _registrant: &Registrant) -> Result<(), RegistrationError> {
        Err(DatabaseError::Connection { message: "connection refused".into(), context: None }.into())
    }

    async fn contains(&self, _identifier: &str) -> Result<bool, RegistrationError> {
        Ok(false)
    }
}

#[derive(Debug, Default)]
pub struct SlowStore;

#[async_trait]
impl RegistrantStore for SlowStore {
    async fn insert(&self, _registrant: &Registrant) -> Result<(), RegistrationError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    }

    async fn contains(&self, _identifier: &str) -> Result<bool, RegistrationError> {
        Ok(false)
    }
}

/// Commits the record, then stalls before acknowledging the write.
#[derive(Debug, Default)]
pub struct StalledAckStore {
    pub inner: MemoryStore,
}

#[async_trait]
impl RegistrantStore for StalledAckStore {
    async fn insert(&self, registrant: &Registrant) -> Result<(), RegistrationError> {
        self.inner.insert(registrant).await?;
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    }

    async fn contains(&self, identifier: &str) -> Result<bool, RegistrationError> {
        self.inner.contains(identifier).await
    }
}

/// Records every message it is asked to send.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Registrant>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Registrant> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialNotifier for RecordingNotifier {
    async fn notify(&self, registrant: &Registrant) -> Result<(), RegistrationError> {
        self.sent.lock().unwrap().push(registrant.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FailingNotifier;

#[async_trait]
impl CredentialNotifier for FailingNotifier {
    async fn notify(&self, _registrant: &Registrant) -> Result<(), RegistrationError> {
        Err(MailerError::from("535 authentication rejected").into())
    }
}

pub fn workflow(
    store: Arc<dyn RegistrantStore>,
    notifier: Arc<dyn CredentialNotifier>,
) -> RegistrationWorkflow {
    RegistrationWorkflow::new(&RegistrationConfig::default(), store, notifier).unwrap()
}

pub fn workflow_with(
    config: &RegistrationConfig,
    store: Arc<dyn RegistrantStore>,
    notifier: Arc<dyn CredentialNotifier>,
) -> RegistrationWorkflow {
    RegistrationWorkflow::new(config, store, notifier).unwrap()
}

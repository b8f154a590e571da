//! Seams the workflow depends on. Production wiring lives in `store` and `notifier`.

use crate::error::RegistrationError;
use crate::model::Registrant;
use async_trait::async_trait;
use std::fmt::Debug;

/// Write-once persistence for registrant records.
#[async_trait]
pub trait RegistrantStore: Debug + Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Storage`] on connectivity or constraint failure.
    async fn insert(&self, registrant: &Registrant) -> Result<(), RegistrationError>;

    /// Whether a record with this identifier exists.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Storage`] when the store cannot be queried.
    async fn contains(&self, identifier: &str) -> Result<bool, RegistrationError>;
}

/// Delivers freshly issued credentials to the registrant.
#[async_trait]
pub trait CredentialNotifier: Debug + Send + Sync {
    /// # Errors
    /// Returns [`RegistrationError::Notification`] on transport or authentication failure.
    async fn notify(&self, registrant: &Registrant) -> Result<(), RegistrationError>;
}

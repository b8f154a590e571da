use crate::credentials::CredentialIssuer;
use crate::error::RegistrationError;
use crate::model::{RegisterRequest, Registrant};
use crate::ports::{CredentialNotifier, RegistrantStore};
use crate::validator::validate;
use chrono::Utc;
use enlist_database::DatabaseError;
use enlist_kernel::domain::config::RegistrationConfig;
use enlist_mailer::MailerError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

/// Progress of a single registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Received,
    Validated,
    Generated,
    Stored,
    Notified,
    Completed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Validate, issue credentials, persist, then notify.
///
/// Nothing is retried. A record that was stored before a failed notification stays stored.
#[derive(Debug, Clone)]
pub struct RegistrationWorkflow {
    issuer: CredentialIssuer,
    store: Arc<dyn RegistrantStore>,
    notifier: Arc<dyn CredentialNotifier>,
    store_timeout: Duration,
    notify_timeout: Duration,
}

impl RegistrationWorkflow {
    /// # Errors
    /// Returns [`RegistrationError::Config`] for a zero password length or a zero timeout.
    pub fn new(
        config: &RegistrationConfig,
        store: Arc<dyn RegistrantStore>,
        notifier: Arc<dyn CredentialNotifier>,
    ) -> Result<Self, RegistrationError> {
        if config.store_timeout_secs == 0 || config.notify_timeout_secs == 0 {
            return Err(RegistrationError::Config {
                message: "store and notify timeouts must be greater than zero".into(),
                context: None,
            });
        }

        Ok(Self {
            issuer: CredentialIssuer::new(config.password_length)?,
            store,
            notifier,
            store_timeout: Duration::from_secs(config.store_timeout_secs),
            notify_timeout: Duration::from_secs(config.notify_timeout_secs),
        })
    }

    #[must_use]
    pub const fn issuer(&self) -> &CredentialIssuer {
        &self.issuer
    }

    /// Runs one registration end to end and returns the stored record.
    ///
    /// # Errors
    /// * [`RegistrationError::Validation`] when `name` or `email` is missing or empty;
    ///   nothing is stored or sent.
    /// * [`RegistrationError::Storage`] when the insert fails or times out; no mail is sent.
    /// * [`RegistrationError::Notification`] when delivery fails or times out; the record
    ///   remains stored.
    #[instrument(skip_all)]
    pub async fn register(&self, request: RegisterRequest) -> Result<Registrant, RegistrationError> {
        trace_stage(Stage::Received);

        let candidate = validate(request)?;
        trace_stage(Stage::Validated);

        let credentials = self.issuer.issue();
        let registrant = Registrant {
            name: candidate.name().to_owned(),
            email: candidate.email().to_owned(),
            identifier: credentials.identifier,
            credential: credentials.password,
            created_at: Utc::now(),
        };
        trace_stage(Stage::Generated);

        timeout(self.store_timeout, self.store.insert(&registrant)).await.map_err(|_| {
            warn!(
                identifier = %registrant.identifier,
                timeout = ?self.store_timeout,
                "Insert timed out; the store may still hold this registrant"
            );
            RegistrationError::from(DatabaseError::Connection {
                message: format!("insert timed out after {:?}", self.store_timeout).into(),
                context: Some(format!("identifier {}", registrant.identifier).into()),
            })
        })??;
        trace_stage(Stage::Stored);

        let notified = timeout(self.notify_timeout, self.notifier.notify(&registrant))
            .await
            .map_err(|_| {
                RegistrationError::from(MailerError::Internal {
                    message: format!("delivery timed out after {:?}", self.notify_timeout).into(),
                    context: None,
                })
            })
            .and_then(|result| result);

        if let Err(err) = notified {
            warn!(
                identifier = %registrant.identifier,
                error = %err,
                "Credentials not delivered; registrant record kept"
            );
            return Err(err);
        }
        trace_stage(Stage::Notified);

        trace_stage(Stage::Completed);
        Ok(registrant)
    }
}

fn trace_stage(stage: Stage) {
    debug!(%stage, "Registration stage reached");
}

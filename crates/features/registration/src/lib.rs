//! Registration feature slice.
//!
//! `POST /api/register` validates the body, issues an identifier and password, stores the
//! registrant and mails the credentials back to them.

mod credentials;
mod error;
mod handlers;
mod model;
mod notifier;
mod ports;
mod store;
mod validator;
mod workflow;

pub use credentials::{CredentialIssuer, Credentials, PASSWORD_ALPHABET};
pub use error::{RegistrationError, RegistrationErrorExt};
pub use model::{NewRegistrant, RegisterRequest, RegisterResponse, Registrant};
pub use notifier::{MailNotifier, credentials_body};
pub use ports::{CredentialNotifier, RegistrantStore};
pub use store::{SCHEMA, SurrealRegistrantStore};
pub use validator::validate;
pub use workflow::RegistrationWorkflow;

use enlist_database::{Database, Migration};
use enlist_kernel::domain::config::ApiConfig;
use enlist_kernel::domain::registry::InitializedSlice;
use enlist_kernel::server::ApiState;
use enlist_mailer::Mailer;
use std::sync::Arc;
use std::time::Duration;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Schema scripts this slice needs applied before [`init`].
pub const MIGRATIONS: &[Migration] = &[SCHEMA];

/// Registration feature state.
#[enlist_derive::enlist_slice]
pub struct Registration {
    pub workflow: RegistrationWorkflow,
}

/// Initialize the registration feature over the shared database and mailer.
///
/// # Errors
/// Returns [`RegistrationError::Config`] when the `registration` settings are invalid.
pub fn init(
    config: &ApiConfig,
    database: &Database,
    mailer: &Mailer,
) -> Result<InitializedSlice, RegistrationError> {
    let workflow = RegistrationWorkflow::new(
        &config.registration,
        Arc::new(
            SurrealRegistrantStore::new(database.clone())
                .with_write_timeout(Duration::from_secs(config.registration.store_timeout_secs)),
        ),
        Arc::new(MailNotifier::new(mailer.clone())),
    )?;

    tracing::info!(
        password_length = workflow.issuer().password_length(),
        "Registration slice initialized"
    );
    Ok(slice(workflow))
}

/// Wraps an already assembled workflow as a registrable slice.
#[must_use]
pub fn slice(workflow: RegistrationWorkflow) -> InitializedSlice {
    InitializedSlice::new(Registration::new(RegistrationInner { workflow }))
}

/// Routes served by this slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(handlers::register_handler))
}

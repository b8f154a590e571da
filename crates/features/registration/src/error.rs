use enlist_database::DatabaseError;
use enlist_kernel::domain::constants::MSG_FIELDS_REQUIRED;
use enlist_kernel::server::ApiError;
use enlist_mailer::MailerError;
use std::borrow::Cow;
use tracing::{error, warn};

#[enlist_derive::enlist_error]
pub enum RegistrationError {
    /// Missing or empty `name`/`email`.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Storage error{}: {source}", format_context(.context))]
    Storage {
        #[source]
        source: DatabaseError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Notification error{}: {source}", format_context(.context))]
    Notification {
        #[source]
        source: MailerError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Registration config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        if let RegistrationError::Validation { .. } = err {
            warn!(error = %err, "Registration rejected");
            return Self::BadRequest {
                message: MSG_FIELDS_REQUIRED.into(),
                context: Some(err.to_string().into()),
            };
        }

        error!(error = %err, "Registration failed");
        Self::server_error(err.to_string())
    }
}

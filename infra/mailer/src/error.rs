use std::borrow::Cow;

#[enlist_derive::enlist_error]
pub enum MailerError {
    #[error("Mailer validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A sender or recipient address that does not parse.
    #[error("Invalid mail address{}: {source}", format_context(.context))]
    Address {
        #[source]
        source: lettre::address::AddressError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Failed to build message{}: {source}", format_context(.context))]
    Message {
        #[source]
        source: lettre::error::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Connection, TLS, authentication or relay rejection.
    #[error("SMTP transport error{}: {source}", format_context(.context))]
    Transport {
        #[source]
        source: lettre::transport::smtp::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal mailer error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

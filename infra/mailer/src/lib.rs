//! # Mailer
//!
//! Thin wrapper over an async `lettre` SMTP transport that sends plain-text mail from a
//! single configured sender.
//!
//! ```rust,no_run
//! use enlist_mailer::{Mailer, MailerError, Tls};
//!
//! # async fn example() -> Result<(), MailerError> {
//! let mailer = Mailer::builder()
//!     .host("smtp.gmail.com")
//!     .tls(Tls::Wrapper)
//!     .credentials("events@example.com", "app-password")
//!     .sender("Club Event", "events@example.com")
//!     .build()?;
//!
//! let message = mailer.compose("ada@example.com", "Hello", "Hi Ada")?;
//! mailer.send(message).await?;
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::{MailerError, MailerErrorExt};
pub use lettre::Message;

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_PORT: u16 = 465;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type Transport = AsyncSmtpTransport<Tokio1Executor>;

/// How the SMTP session is secured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tls {
    /// Implicit TLS from the first byte.
    #[default]
    Wrapper,
    /// Plain connection upgraded with STARTTLS.
    Starttls,
    /// No encryption.
    None,
}

struct MailerInner {
    transport: Transport,
    sender: Mailbox,
    relay: String,
}

/// Cloneable handle to a pooled SMTP transport.
#[derive(Clone)]
pub struct Mailer {
    inner: Arc<MailerInner>,
}

impl fmt::Debug for Mailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailer")
            .field("relay", &self.inner.relay)
            .field("sender", &self.inner.sender.to_string())
            .finish_non_exhaustive()
    }
}

impl Mailer {
    pub fn builder() -> MailerBuilder {
        MailerBuilder::default()
    }

    #[must_use]
    pub fn sender(&self) -> &Mailbox {
        &self.inner.sender
    }

    /// Builds a plain-text message from the configured sender.
    ///
    /// # Errors
    /// * [`MailerError::Address`] if `to` is not a valid address.
    /// * [`MailerError::Message`] if the message cannot be assembled.
    pub fn compose(
        &self,
        to: &str,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Message, MailerError> {
        let recipient = to.trim().parse::<Address>().context("Parsing recipient")?;

        Message::builder()
            .from(self.inner.sender.clone())
            .to(Mailbox::new(None, recipient))
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.into())
            .context("Assembling message")
    }

    /// Delivers a message through the relay.
    ///
    /// # Errors
    /// Returns [`MailerError::Transport`] when the relay cannot be reached or rejects the mail.
    #[instrument(skip_all, fields(relay = %self.inner.relay))]
    pub async fn send(&self, message: Message) -> Result<(), MailerError> {
        let response = self.inner.transport.send(message).await.context("Delivering message")?;
        debug!(code = %response.code(), "Message accepted by relay");
        Ok(())
    }

    /// Opens a session and issues `NOOP` to verify the relay and credentials.
    ///
    /// # Errors
    /// Returns [`MailerError::Transport`] when the relay is unreachable.
    pub async fn test_connection(&self) -> Result<bool, MailerError> {
        self.inner.transport.test_connection().await.context("Testing SMTP connection")
    }
}

/// Fluent builder for [`Mailer`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug)]
pub struct MailerBuilder {
    host: Option<String>,
    port: u16,
    tls: Tls,
    credentials: Option<(String, String)>,
    sender_name: Option<String>,
    sender_address: Option<String>,
    timeout: Duration,
}

impl Default for MailerBuilder {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            tls: Tls::default(),
            credentials: None,
            sender_name: None,
            sender_address: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl MailerBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub const fn tls(mut self, tls: Tls) -> Self {
        self.tls = tls;
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Display name and address used in the `From` header.
    pub fn sender(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self.sender_address = Some(address.into());
        self
    }

    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates the transport. No connection is made until the first send.
    ///
    /// # Errors
    /// * [`MailerError::Validation`] if the host or sender is missing, or the timeout is zero.
    /// * [`MailerError::Address`] if the sender address does not parse.
    /// * [`MailerError::Transport`] if the TLS parameters cannot be created.
    pub fn build(self) -> Result<Mailer, MailerError> {
        let host = self
            .host
            .filter(|h| !h.trim().is_empty())
            .ok_or(MailerError::Validation { message: "SMTP host is required".into(), context: None })?;
        let address = self.sender_address.filter(|a| !a.trim().is_empty()).ok_or(
            MailerError::Validation { message: "Sender address is required".into(), context: None },
        )?;
        if self.timeout.is_zero() {
            return Err(MailerError::Validation {
                message: "Timeout must be greater than zero".into(),
                context: None,
            });
        }

        let address = address.trim().parse::<Address>().context("Parsing sender address")?;
        let name = self.sender_name.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty());
        let sender = Mailbox::new(name, address);

        let builder = match self.tls {
            Tls::Wrapper => Transport::relay(&host).context("Configuring implicit TLS")?,
            Tls::Starttls => Transport::starttls_relay(&host).context("Configuring STARTTLS")?,
            Tls::None => Transport::builder_dangerous(&host),
        };
        let mut builder = builder.port(self.port).timeout(Some(self.timeout));
        if let Some((username, password)) = self.credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Mailer {
            inner: Arc::new(MailerInner {
                transport: builder.build(),
                sender,
                relay: format!("{host}:{}", self.port),
            }),
        })
    }
}

use crate::error::RegistrationError;
use crate::model::Registrant;
use crate::ports::CredentialNotifier;
use async_trait::async_trait;
use enlist_kernel::domain::constants::CREDENTIALS_SUBJECT;
use enlist_mailer::Mailer;
use tracing::info;

/// Plain-text body of the credentials mail.
#[must_use]
pub fn credentials_body(registrant: &Registrant) -> String {
    format!(
        "Hi {name},\n\nThank you for registering!\n\nHere are your credentials:\n\n\
         Identifier: {identifier}\nPassword: {password}\n\nBest,\nEvent Team",
        name = registrant.name,
        identifier = registrant.identifier,
        password = registrant.credential,
    )
}

/// [`CredentialNotifier`] that mails the credentials through SMTP.
#[derive(Debug, Clone)]
pub struct MailNotifier {
    mailer: Mailer,
}

impl MailNotifier {
    #[must_use]
    pub const fn new(mailer: Mailer) -> Self {
        Self { mailer }
    }
}

#[async_trait]
impl CredentialNotifier for MailNotifier {
    async fn notify(&self, registrant: &Registrant) -> Result<(), RegistrationError> {
        let message =
            self.mailer.compose(&registrant.email, CREDENTIALS_SUBJECT, credentials_body(registrant))?;
        self.mailer.send(message).await?;

        info!(identifier = %registrant.identifier, "Credentials mailed");
        Ok(())
    }
}

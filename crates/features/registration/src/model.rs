use chrono::{DateTime, Utc};
use enlist_derive::api_model;
use std::fmt;

/// Body of `POST /api/register`. Both fields are optional at the wire level and checked by
/// the validator.
#[api_model(deny_unknown_fields = false)]
#[derive(Default, Clone)]
pub struct RegisterRequest {
    /// Display name of the registrant
    #[schema(example = "Alice")]
    pub name: Option<String>,
    /// Address the credentials are mailed to
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
}

#[api_model]
pub struct RegisterResponse {
    pub message: String,
}

/// A request whose `name` and `email` are both present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistrant {
    name: String,
    email: String,
}

impl NewRegistrant {
    pub(crate) const fn new(name: String, email: String) -> Self {
        Self { name, email }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A stored registration. Written once, never updated.
#[derive(Clone, PartialEq, Eq)]
pub struct Registrant {
    pub name: String,
    pub email: String,
    pub identifier: String,
    pub credential: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for Registrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registrant")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("identifier", &self.identifier)
            .field("credential", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

use crate::error::RegistrationError;
use crate::model::Registrant;
use crate::ports::RegistrantStore;
use async_trait::async_trait;
use enlist_database::{Database, DatabaseErrorExt, Migration};
use enlist_kernel::domain::constants::REGISTRANT_TABLE;
use std::time::Duration;
use tracing::debug;

/// Table and unique index backing [`SurrealRegistrantStore`].
pub const SCHEMA: Migration = Migration::new(
    "registration",
    "0001_registrant",
    "DEFINE TABLE IF NOT EXISTS registrant SCHEMAFULL;
     DEFINE FIELD IF NOT EXISTS name ON registrant TYPE string;
     DEFINE FIELD IF NOT EXISTS email ON registrant TYPE string;
     DEFINE FIELD IF NOT EXISTS identifier ON registrant TYPE string READONLY;
     DEFINE FIELD IF NOT EXISTS credential ON registrant TYPE string READONLY;
     DEFINE FIELD IF NOT EXISTS created_at ON registrant TYPE datetime READONLY;
     DEFINE INDEX IF NOT EXISTS registrant_identifier ON registrant FIELDS identifier UNIQUE;",
);

const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// The insert statement. `TIMEOUT` makes the database abandon and roll back a write that
/// runs past `timeout`, so a timed-out insert never leaves a record behind.
fn insert_statement(timeout: Duration) -> String {
    format!(
        "CREATE type::table($table) CONTENT {{
            name: $name,
            email: $email,
            identifier: $identifier,
            credential: $credential,
            created_at: <datetime> $created_at
        }} TIMEOUT {}ms;",
        timeout.as_millis().max(1)
    )
}

const CONTAINS: &str =
    "RETURN array::len((SELECT VALUE id FROM type::table($table) WHERE identifier = $identifier)) > 0;";

/// [`RegistrantStore`] over the shared `SurrealDB` handle.
#[derive(Debug, Clone)]
pub struct SurrealRegistrantStore {
    db: Database,
    write_timeout: Duration,
}

impl SurrealRegistrantStore {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db, write_timeout: DEFAULT_WRITE_TIMEOUT }
    }

    /// Upper bound the database enforces on a single insert.
    #[must_use]
    pub const fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }
}

#[async_trait]
impl RegistrantStore for SurrealRegistrantStore {
    async fn insert(&self, registrant: &Registrant) -> Result<(), RegistrationError> {
        self.db
            .query(insert_statement(self.write_timeout))
            .bind(("table", REGISTRANT_TABLE))
            .bind(("name", registrant.name.clone()))
            .bind(("email", registrant.email.clone()))
            .bind(("identifier", registrant.identifier.clone()))
            .bind(("credential", registrant.credential.clone()))
            .bind(("created_at", registrant.created_at.to_rfc3339()))
            .await
            .context("Inserting registrant")?
            .check()
            .map_err(surrealdb::Error::from)
            .context("Registrant rejected by store")?;

        debug!(identifier = %registrant.identifier, "Registrant stored");
        Ok(())
    }

    async fn contains(&self, identifier: &str) -> Result<bool, RegistrationError> {
        let found = self
            .db
            .query(CONTAINS)
            .bind(("table", REGISTRANT_TABLE))
            .bind(("identifier", identifier.to_owned()))
            .await
            .context("Looking up registrant")?
            .take::<Option<bool>>(0)
            .context("Reading lookup result")?;

        Ok(found.unwrap_or_default())
    }
}

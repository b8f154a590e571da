//! Facade crate for the Enlist feature slices and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Pass [`migrations`] to the database builder.
//! - Call [`init`] to build every feature slice, then register them in `ApiState`.
//! - Merge [`server::router::api_router`] into the application router.

use enlist_database::{Database, Migration};
pub use enlist_domain as domain;
use enlist_domain::config::ApiConfig;
use enlist_domain::registry::InitializedSlice;
pub use enlist_kernel as kernel;
use enlist_mailer::Mailer;

pub mod server {
    pub mod router {
        use enlist_kernel::server::ApiState;
        pub use enlist_kernel::server::router::system_router;
        use utoipa_axum::router::OpenApiRouter;

        /// System routes plus the routes of every feature slice.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            system_router().merge(crate::features::registration::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use enlist_registration as registration;

    /// Feature slices compiled into this build.
    pub const ENABLED: &[&str] = &["registration"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Schema migrations of every feature slice, in application order.
#[must_use]
pub fn migrations() -> Vec<Migration> {
    features::registration::MIGRATIONS.to_vec()
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
    database: &Database,
    mailer: &Mailer,
) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::registration::init(config, database, mailer)?];

    Ok(slices)
}

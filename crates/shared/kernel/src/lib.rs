//! Kernel utilities shared across slices: layered config loading, the shared
//! [`server::ApiState`], system routes and the JSON error envelope.
//!
//! ```rust,no_run
//! use enlist_kernel::config::load_config;
//! use enlist_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap();
//! assert!(cfg.registration.password_length > 0);
//! ```

pub mod config;
pub mod prelude;
pub mod server;

pub use enlist_domain as domain;

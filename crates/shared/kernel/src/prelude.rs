pub use crate::config::{ConfigError, load_config};
pub use crate::server::{ApiError, ApiState, ApiStateBuilder, ApiStateError, ErrorResponse};
pub use enlist_domain::config::ApiConfig;
pub use enlist_domain::registry::{FeatureSlice, InitializedSlice};

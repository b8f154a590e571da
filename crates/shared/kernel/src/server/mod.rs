mod error;
mod health;
pub mod router;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use health::HealthResponse;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};

use crate::Registration;
use crate::model::{RegisterRequest, RegisterResponse};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use enlist_derive::api_handler;
use enlist_kernel::domain::constants::{MSG_REGISTERED, REGISTRATION_TAG};
use enlist_kernel::server::{ApiError, ApiState, ErrorResponse};
use tracing::debug;

#[api_handler(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = OK, description = "Registrant stored and credentials mailed", body = RegisterResponse),
        (status = BAD_REQUEST, description = "Name or email missing", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Storage or delivery failed", body = ErrorResponse),
    ),
    tag = REGISTRATION_TAG,
)]
pub(crate) async fn register_handler(
    State(state): State<ApiState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let request = payload.map_or_else(
        |rejection| {
            debug!(%rejection, "Unreadable registration body treated as empty");
            RegisterRequest::default()
        },
        |Json(request)| request,
    );

    let slice = state.try_get_slice::<Registration>()?;
    slice.workflow.register(request).await?;

    Ok(Json(RegisterResponse { message: MSG_REGISTERED.to_owned() }))
}

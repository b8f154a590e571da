use crate::error::RegistrationError;
use crate::model::{NewRegistrant, RegisterRequest};

/// Accepts a request only when both fields are present and non-empty.
///
/// Values are passed through untouched, so whitespace-only input is accepted.
///
/// # Errors
/// Returns [`RegistrationError::Validation`] naming the first missing field.
pub fn validate(request: RegisterRequest) -> Result<NewRegistrant, RegistrationError> {
    let RegisterRequest { name, email } = request;

    let name = required(name, "name")?;
    let email = required(email, "email")?;

    Ok(NewRegistrant::new(name, email))
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RegistrationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(RegistrationError::Validation {
            message: format!("{field} is empty").into(),
            context: None,
        }),
        None => Err(RegistrationError::Validation {
            message: format!("{field} is missing").into(),
            context: None,
        }),
    }
}

//! Names shared between the HTTP surface, the store and the outgoing mail.

/// `OpenAPI` tag for infrastructure routes.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for registration routes.
pub const REGISTRATION_TAG: &str = "Registration";

/// Document table holding registrant records.
pub const REGISTRANT_TABLE: &str = "registrant";

pub const MSG_REGISTERED: &str = "User registered and email sent";
pub const MSG_FIELDS_REQUIRED: &str = "Name and email are required";
pub const MSG_SERVER_ERROR: &str = "Server error";

pub const CREDENTIALS_SUBJECT: &str = "Your Event Credentials";

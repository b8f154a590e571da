use enlist_domain::constants::{
    CREDENTIALS_SUBJECT, MSG_FIELDS_REQUIRED, MSG_REGISTERED, MSG_SERVER_ERROR, REGISTRANT_TABLE,
};

#[test]
fn client_visible_strings_are_stable() {
    assert_eq!(MSG_REGISTERED, "User registered and email sent");
    assert_eq!(MSG_FIELDS_REQUIRED, "Name and email are required");
    assert_eq!(MSG_SERVER_ERROR, "Server error");
    assert_eq!(CREDENTIALS_SUBJECT, "Your Event Credentials");
    assert_eq!(REGISTRANT_TABLE, "registrant");
}

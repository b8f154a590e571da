use enlist_derive::enlist_error;
use std::borrow::Cow;

#[enlist_error]
pub enum StoreError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), StoreError> {
    Err::<(), _>(std::io::Error::other("disk unplugged")).context("Reading registrant")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading registrant): disk unplugged");

    let internal: StoreError = "boom".into();
    assert!(matches!(internal, StoreError::Internal { context: None, .. }));
}

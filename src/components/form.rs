use leptos::{html, NodeRef};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Form field `{0}` is missing from the page")]
    MissingField(&'static str),
}

/// Current value of a mounted input; missing elements are an error, not a panic
pub fn read_input(input: NodeRef<html::Input>, field: &'static str) -> Result<String, FormError> {
    input
        .get_untracked()
        .map(|element| element.value())
        .ok_or(FormError::MissingField(field))
}

/// Read the username and password inputs of an auth form
pub fn read_credentials(
    username: (NodeRef<html::Input>, &'static str),
    password: (NodeRef<html::Input>, &'static str),
) -> Result<(String, String), FormError> {
    let username = read_input(username.0, username.1)?;
    let password = read_input(password.0, password.1)?;
    Ok((username, password))
}

/// What a click on a submit button ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitClick {
    /// An earlier submission has not finished yet
    InFlight,
    Dropped(FormError),
    Dispatched,
}

/// Dispatch the form fields unless a submission is pending or the form can't be read
pub fn handle_submit_click(
    pending: bool,
    read: impl FnOnce() -> Result<(String, String), FormError>,
    dispatch: impl FnOnce((String, String)),
) -> SubmitClick {
    if pending {
        log::debug!("Submission already in flight");
        return SubmitClick::InFlight;
    }

    match read() {
        Ok(fields) => {
            dispatch(fields);
            SubmitClick::Dispatched
        }
        Err(e) => {
            log::warn!("Ignoring submit click: {}", e);
            SubmitClick::Dropped(e)
        }
    }
}

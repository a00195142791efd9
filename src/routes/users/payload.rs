use serde_json::{Map, Value};
use userfn_db::users::models::{NewUser, UserDetails, UserId, UserName};

use super::InvocationError;
use crate::invocation::Invocation;

///
/// Validate a create request: body, then path id, then the user fields.
///
pub fn parse_new_user(invocation: &Invocation) -> Result<NewUser, InvocationError> {
    let (id, details) = parse_user_with_id(invocation)?;

    Ok(NewUser { id, details })
}

///
/// Validate an update request. Same rules as for create.
///
pub fn parse_user_update(invocation: &Invocation) -> Result<(UserId, UserDetails), InvocationError> {
    parse_user_with_id(invocation)
}

///
/// The id from the request path, reported as missing `user_id` otherwise.
///
pub fn required_user_id(invocation: &Invocation) -> Result<UserId, InvocationError> {
    invocation
        .user_id()
        .ok_or(InvocationError::MissingField("user_id"))
}

fn parse_user_with_id(invocation: &Invocation) -> Result<(UserId, UserDetails), InvocationError> {
    let payload = parse_payload(invocation.body())?;
    let id = required_user_id(invocation)?;
    let details = parse_user_details(&payload)?;

    Ok((id, details))
}

fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, InvocationError> {
    if body.is_empty() {
        return Err(InvocationError::MissingPayload);
    }

    serde_json::from_slice(body).map_err(InvocationError::MalformedPayload)
}

fn parse_user_details(payload: &Map<String, Value>) -> Result<UserDetails, InvocationError> {
    Ok(UserDetails {
        first_name: required_field(payload, "first_name")?,
        last_name: required_field(payload, "last_name")?,
        username: required_field(payload, "username")?,
    })
}

// Only non-empty strings count as present.
fn required_field(
    payload: &Map<String, Value>,
    field: &'static str,
) -> Result<UserName, InvocationError> {
    match payload.get(field) {
        Some(Value::String(value)) => {
            UserName::parse(value.clone()).map_err(|_| InvocationError::MissingField(field))
        }
        _ => Err(InvocationError::MissingField(field)),
    }
}

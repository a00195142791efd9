use actix_web::HttpResponse;
use anyhow::Context;
use userfn_db::users::store::UserStore;
use userfn_shared::users::MessageResponse;

use super::{payload::parse_user_update, InvocationError};
use crate::invocation::Invocation;

#[tracing::instrument(name = "Update existing user", skip(store, invocation), fields(user_id = tracing::field::Empty))]
pub async fn update<S: UserStore + ?Sized>(
    store: &S,
    invocation: &Invocation,
) -> Result<HttpResponse, InvocationError> {
    let (user_id, details) = parse_user_update(invocation)?;

    tracing::Span::current().record("user_id", &tracing::field::display(&user_id));

    // There is no existence check, an unknown id updates zero rows and still succeeds
    let rows_affected = store
        .update_user(&user_id, &details)
        .await
        .context("Failed to update user")?;

    tracing::info!(rows_affected, "User update committed");

    Ok(HttpResponse::Ok().json(MessageResponse::new("User updated successfully")))
}

use actix_web::HttpResponse;
use anyhow::Context;
use userfn_db::users::store::UserStore;
use userfn_shared::users::MessageResponse;

use super::{payload::required_user_id, InvocationError};
use crate::invocation::Invocation;

#[tracing::instrument(name = "Delete user", skip(store, invocation), fields(user_id = tracing::field::Empty))]
pub async fn delete<S: UserStore + ?Sized>(
    store: &S,
    invocation: &Invocation,
) -> Result<HttpResponse, InvocationError> {
    let user_id = required_user_id(invocation)?;

    tracing::Span::current().record("user_id", &tracing::field::display(&user_id));

    let rows_affected = store
        .delete_user(&user_id)
        .await
        .context("Failed to delete user")?;

    tracing::info!(rows_affected, "User deletion committed");

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")))
}

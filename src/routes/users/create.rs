use actix_web::HttpResponse;
use anyhow::Context;
use userfn_db::users::store::UserStore;
use userfn_shared::users::MessageResponse;

use super::{payload::parse_new_user, InvocationError};
use crate::invocation::Invocation;

#[tracing::instrument(name = "Create user", skip(store, invocation), fields(user_id = tracing::field::Empty))]
pub async fn create<S: UserStore + ?Sized>(
    store: &S,
    invocation: &Invocation,
) -> Result<HttpResponse, InvocationError> {
    let new_user = parse_new_user(invocation)?;

    tracing::Span::current().record("user_id", &tracing::field::display(&new_user.id));

    // Duplicate ids are rejected by the database, not here
    store
        .create_user(&new_user)
        .await
        .context("Failed to create user")?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User created successfully")))
}

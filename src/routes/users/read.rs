use actix_web::HttpResponse;
use anyhow::Context;
use userfn_db::users::{
    models::{UserId, UserLookup},
    store::UserStore,
};
use userfn_shared::users::{MessageResponse, UserResponse};

use super::InvocationError;
use crate::invocation::Invocation;

///
/// Read the user addressed by the path, or every user when the path has no id.
///
pub async fn read<S: UserStore + ?Sized>(
    store: &S,
    invocation: &Invocation,
) -> Result<HttpResponse, InvocationError> {
    match invocation.user_id() {
        Some(user_id) => read_user(store, &user_id).await,
        None => read_all_users(store).await,
    }
}

#[tracing::instrument(name = "Read user", skip(store, user_id), fields(user_id = %user_id))]
pub async fn read_user<S: UserStore + ?Sized>(
    store: &S,
    user_id: &UserId,
) -> Result<HttpResponse, InvocationError> {
    let lookup = store
        .read_user(user_id)
        .await
        .context("Failed to read user")?;

    match lookup {
        UserLookup::Found(user) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        UserLookup::NotFound => Ok(HttpResponse::Ok().json(MessageResponse::new("User not found"))),
    }
}

#[tracing::instrument(name = "Read all users", skip(store))]
pub async fn read_all_users<S: UserStore + ?Sized>(
    store: &S,
) -> Result<HttpResponse, InvocationError> {
    let users: Vec<UserResponse> = store
        .read_users()
        .await
        .context("Failed to read all users")?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

use sqlx::{PgPool, Postgres, Transaction};

use super::models::*;

#[tracing::instrument(name = "Saving a new user to the database", skip(transaction, new_user), fields(user_id = %new_user.id))]
pub async fn insert_user(
    transaction: &mut Transaction<'_, Postgres>,
    new_user: &NewUser,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (ID, FIRST_NAME, LAST_NAME, USERNAME)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(new_user.id.as_ref())
    .bind(new_user.details.first_name.as_ref())
    .bind(new_user.details.last_name.as_ref())
    .bind(new_user.details.username.as_ref())
    .execute(transaction)
    .await?;

    Ok(result.rows_affected())
}

#[tracing::instrument(name = "Get stored user with id", skip(user_id, pool), fields(user_id = %user_id))]
pub async fn get_user_with_id(
    user_id: &UserId,
    pool: &PgPool,
) -> Result<Option<UserModel>, sqlx::Error> {
    sqlx::query_as::<_, UserModel>(
        r#"
        SELECT ID, FIRST_NAME, LAST_NAME, USERNAME, CREATED_ON
        FROM users
        WHERE ID = $1
        "#,
    )
    .bind(user_id.as_ref())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Get all stored users", skip(pool))]
pub async fn get_all_users(pool: &PgPool) -> Result<Vec<UserModel>, sqlx::Error> {
    sqlx::query_as::<_, UserModel>(
        r#"
        SELECT ID, FIRST_NAME, LAST_NAME, USERNAME, CREATED_ON
        FROM users
        "#,
    )
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update a existing user", skip(transaction, user_id, details), fields(user_id = %user_id))]
pub async fn update_user(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: &UserId,
    details: &UserDetails,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET FIRST_NAME = $1, LAST_NAME = $2, USERNAME = $3
        WHERE ID = $4
        "#,
    )
    .bind(details.first_name.as_ref())
    .bind(details.last_name.as_ref())
    .bind(details.username.as_ref())
    .bind(user_id.as_ref())
    .execute(transaction)
    .await?;

    Ok(result.rows_affected())
}

#[tracing::instrument(name = "Delete a existing user", skip(transaction, user_id), fields(user_id = %user_id))]
pub async fn delete_user(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: &UserId,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM users
        WHERE ID = $1
        "#,
    )
    .bind(user_id.as_ref())
    .execute(transaction)
    .await?;

    Ok(result.rows_affected())
}

use async_trait::async_trait;
use sqlx::PgPool;

use super::{models::*, queries};

///
/// Data access used by the users function.
///
/// Mutations report the number of affected rows. Zero is not an error.
///
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn create_user(&self, new_user: &NewUser) -> Result<u64, sqlx::Error>;

    async fn read_user(&self, user_id: &UserId) -> Result<UserLookup, sqlx::Error>;

    async fn read_users(&self) -> Result<Vec<UserModel>, sqlx::Error>;

    async fn update_user(
        &self,
        user_id: &UserId,
        details: &UserDetails,
    ) -> Result<u64, sqlx::Error>;

    async fn delete_user(&self, user_id: &UserId) -> Result<u64, sqlx::Error>;
}

// Each mutation holds one pooled connection inside a transaction that is committed
// right after the statement. Dropping the transaction on an error path rolls back
// and hands the connection back to the pool.
#[async_trait]
impl UserStore for PgPool {
    async fn create_user(&self, new_user: &NewUser) -> Result<u64, sqlx::Error> {
        let mut transaction = self.begin().await?;
        let rows = queries::insert_user(&mut transaction, new_user).await?;
        transaction.commit().await?;

        Ok(rows)
    }

    async fn read_user(&self, user_id: &UserId) -> Result<UserLookup, sqlx::Error> {
        Ok(queries::get_user_with_id(user_id, self).await?.into())
    }

    async fn read_users(&self) -> Result<Vec<UserModel>, sqlx::Error> {
        queries::get_all_users(self).await
    }

    async fn update_user(
        &self,
        user_id: &UserId,
        details: &UserDetails,
    ) -> Result<u64, sqlx::Error> {
        let mut transaction = self.begin().await?;
        let rows = queries::update_user(&mut transaction, user_id, details).await?;
        transaction.commit().await?;

        Ok(rows)
    }

    async fn delete_user(&self, user_id: &UserId) -> Result<u64, sqlx::Error> {
        let mut transaction = self.begin().await?;
        let rows = queries::delete_user(&mut transaction, user_id).await?;
        transaction.commit().await?;

        Ok(rows)
    }
}

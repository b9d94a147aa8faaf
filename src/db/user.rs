use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use crate::db::service::DbService;
use crate::types::{error::AppError, user::NewUser};
use crate::utils::token::new_id;

impl DbService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    /// Lookup by login name. Absence is `Ok(None)`, never an error.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(*id).one(&self.db).await?)
    }

    /// Signup: create a user record.
    ///
    /// The pre-check gives the common duplicate a clean rejection; the
    /// unique index on email is what guarantees at most one row when two
    /// signups race, so a constraint violation maps to the same error.
    pub async fn create_user(&self, payload: NewUser) -> Result<Uuid, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::DuplicateEmail);
        }
        let uid = new_id();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let inserted = User::insert(UserActive {
            id: Set(uid),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await;

        match inserted {
            Ok(_) => {}
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AppError::DuplicateEmail);
            }
            Err(e) => return Err(e.into()),
        }

        txn.commit().await?;
        Ok(uid)
    }
}

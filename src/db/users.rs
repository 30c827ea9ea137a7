use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, NewUser};

/// Insert a new user. The caller supplies the already-hashed password and a
/// lowercase-normalized email; the unique index on `email` is the final
/// arbiter against concurrent signups.
pub async fn insert_user(
    db: &DatabaseConnection,
    input: NewUser,
    password_hash: String,
) -> Result<users::Model, DbErr> {
    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        email: Set(input.email),
        password_hash: Set(password_hash),
        created_at: Set(chrono::Utc::now()),
    };

    new_user.insert(db).await
}

/// Look up a user by normalized email.
pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Batch-fetch users by ID for the inbox's "received" partition.
pub async fn get_users_by_ids(
    db: &DatabaseConnection,
    ids: Vec<Uuid>,
) -> Result<Vec<users::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await
}

use ironlog_core::types::DbId;
use ironlog_db::models::user::CreateUser;
use ironlog_db::repositories::UserRepo;
use sqlx::PgPool;

/// Insert a user and return its id. Password hash is an opaque fixture
/// string; nothing in the db layer interprets it.
pub async fn seed_user(pool: &PgPool, email: &str) -> DbId {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_owned(),
            password_hash: "$argon2id$fixture".to_owned(),
            display_name: None,
        },
    )
    .await
    .expect("seed user");
    user.id
}

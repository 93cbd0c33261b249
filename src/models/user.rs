use sqlx::FromRow;

/// A registered account as stored in the `users` table.
///
/// The `password` column holds an opaque bcrypt hash, never the cleartext
/// value. Usernames are unique at the store level; no resolver re-checks
/// uniqueness before inserting.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

use sqlx::FromRow;

/// A post as stored in the `posts` table.
///
/// Posts carry no author reference: creating one requires a valid token,
/// but the schema records nothing about who held it.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

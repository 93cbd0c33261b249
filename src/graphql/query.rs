use async_graphql::{Context, Object, Result};
use sqlx::SqlitePool;

use crate::models::Post;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every post in the board, unfiltered and unpaginated. No ordering is
    /// guaranteed.
    async fn all_posts(&self, ctx: &Context<'_>) -> Result<Option<Vec<Post>>> {
        let pool = ctx.data_unchecked::<SqlitePool>();

        let posts = sqlx::query_as::<_, Post>("SELECT id, title, content FROM posts")
            .fetch_all(pool)
            .await?;
        Ok(Some(posts))
    }

    /// A single post by its id, or null when none exists. "Not found" is an
    /// absence, never an error.
    async fn post_by_id(&self, ctx: &Context<'_>, post_id: i32) -> Result<Option<Post>> {
        let pool = ctx.data_unchecked::<SqlitePool>();

        let post = sqlx::query_as::<_, Post>("SELECT id, title, content FROM posts WHERE id = ?")
            .bind(post_id)
            .fetch_optional(pool)
            .await?;
        Ok(post)
    }
}

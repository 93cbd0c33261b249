//! GraphQL object types returned by the resolvers.

use async_graphql::{Object, SimpleObject, ID};

use crate::models::Post;

/// GraphQL view over a stored post. The surrogate key is exposed as `ID!`.
#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID::from(self.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn content(&self) -> &str {
        &self.content
    }
}

/// Outcome of `authenticateUser`. `token` is only present when `ok` is true.
#[derive(Debug, SimpleObject)]
pub struct AuthPayload {
    pub ok: bool,
    pub token: Option<String>,
}

/// Outcome of `createNewUser`.
#[derive(Debug, SimpleObject)]
pub struct UserPayload {
    pub ok: bool,
}

/// Outcome of `createNewPost`: a result string callers match on.
#[derive(Debug, SimpleObject)]
pub struct PostPayload {
    pub result: String,
}

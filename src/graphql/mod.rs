//! Schema and resolver layer.
//!
//! The schema is code-first: field and argument names render the served SDL,
//! and building it binds every declared operation to its resolver up front,
//! so a dangling operation fails at startup rather than at request time.

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use sqlx::SqlitePool;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The executable schema served at `/graphql`.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(pool: SqlitePool) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

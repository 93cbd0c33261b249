//! The `postboard` library crate.
//!
//! This crate contains the persistence layer, the credential subsystem, the
//! GraphQL schema and resolvers, the task queue client, and the HTTP route
//! configuration for the postboard application. It is used by the main
//! binary (`main.rs`) to construct and run the server.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod models;
pub mod queue;
pub mod routes;

//! Veranda API server library.
//!
//! Exposes the building blocks of the server (config, state, error
//! handling, routes, session registry) so integration tests and the
//! binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod sessions;
pub mod state;

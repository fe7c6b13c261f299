//! HTTP service that issues HS256-signed JWTs carrying a fixed set of
//! channel subscriptions.
//!
//! `GET /token/{user}?seconds=N` (or `?days=N`, default 7 days) returns the
//! compact token as plain text.

pub mod app_state;
pub mod config;
pub mod error;
pub mod routes;
pub mod token;

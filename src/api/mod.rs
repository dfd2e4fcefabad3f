//! # API Module
//!
//! HTTP endpoints for the short-lived local server that backs the
//! authorization flow. The server exists only to receive the OAuth redirect
//! from Spotify's consent page; it exposes:
//!
//! - [`callback`] - Captures the authorization code (and verifies the `state`
//!   guard) delivered by the redirect, handing it to the waiting auth flow.
//! - [`health`] - A trivial health check endpoint with version information.
//!
//! The module is built on [Axum](https://docs.rs/axum); each endpoint is an
//! async function wired into the router in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;

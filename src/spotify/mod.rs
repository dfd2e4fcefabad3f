//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! replaycli: token acquisition, identity resolution, catalog search, and
//! playlist management. It handles all HTTP communication and the OAuth
//! flows, leaving orchestration to the CLI layer.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code flow:
//! - **Refresh Exchange**: Trades a stored refresh token for a fresh access
//!   token using HTTP Basic client authentication
//! - **Interactive Authorization**: Drives the user's browser through the
//!   consent page and captures the redirect on a local callback server
//! - **Code Exchange**: Exchanges the captured authorization code for a
//!   credential pair
//!
//! ### User Module
//!
//! [`user`] - Resolves the authenticated user's identifier, which owns the
//! created playlists.
//!
//! ### Search Module
//!
//! [`search`] - Looks up a broadcast (title, artist) pair in the Spotify
//! catalog; a miss is a valid outcome, not an error.
//!
//! ### Playlist Module
//!
//! [`playlist`] - Creates playlists and inserts matched tracks one at a time.
//!
//! ## Error Handling
//!
//! Functions return `Result` types: `reqwest::Error` for plain HTTP/decoding
//! failures, `String` where a contract check (a required field, an expected
//! `201 Created`) can fail. No call in this module retries; fatal versus
//! per-item handling is the caller's decision.
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - Token exchange and refresh
//! - `GET /me` - Current user identity
//! - `GET /search` - Catalog track search
//! - `POST /users/{user_id}/playlists` - Create playlist
//! - `POST /playlists/{playlist_id}/tracks` - Insert track

pub mod auth;
pub mod playlist;
pub mod search;
pub mod user;

//! # CLI Module
//!
//! User-facing command implementations. Each command coordinates the config,
//! management, spotify and station layers and owns the fatal/per-item error
//! split: fatal conditions (no token, no playlist, malformed broadcast page)
//! terminate through the `error!` macro; per-item conditions (search miss,
//! failed insertion) are logged with `warning!` and the run continues.
//!
//! ## Commands
//!
//! - [`auth`] - Forces the interactive authorization flow and persists the
//!   newly issued refresh token
//! - [`plays`] - Lists a station's broadcast log for a date as a table
//! - [`playlist`] - Replays a broadcast log into a freshly created playlist

mod auth;
mod playlist;
mod plays;

pub use auth::auth;
pub use playlist::playlist;
pub use plays::plays;

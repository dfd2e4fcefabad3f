//! # Station Module
//!
//! Client for the public broadcast-history API. The centerpiece is
//! [`PlayLog`], a lazy, pull-based reader over the plays a station broadcast
//! within the overnight window of a given date. Pages are fetched only as the
//! consumer drains them, so long broadcast windows never buffer more than one
//! page at a time.
//!
//! The reader is finite and consumed once per run: it ends normally on the
//! first empty page, and ends with an error on a malformed one. Plays already
//! handed to the consumer stay valid either way.

mod plays;

pub use plays::PlayLog;
pub use plays::extract_plays;

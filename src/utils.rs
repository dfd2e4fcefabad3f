use chrono::{Duration, NaiveDate, Utc};
use rand::{Rng, distr::Alphanumeric};

use crate::{types::PlayWindow, warning};

/// Upper bound the broadcast-history API accepts for a single page.
pub const MAX_BATCH_SIZE: u32 = 100;

pub fn clamp_batch_size(batch_size: u32) -> u32 {
    if batch_size > MAX_BATCH_SIZE {
        warning!(
            "Batch size limited to {} due to API restrictions",
            MAX_BATCH_SIZE
        );
        MAX_BATCH_SIZE
    } else if batch_size < 1 {
        warning!("Batch size must be 1 or greater, reverting to 1");
        1
    } else {
        batch_size
    }
}

/// Computes the overnight play window associated with a broadcast date.
///
/// Plays between 20:00 of the prior calendar day and 10:59:59 of the target
/// day count as that day's slot, matching the broadcaster's convention that
/// the overnight programme belongs to yesterday.
pub fn play_window(date: NaiveDate) -> PlayWindow {
    let prior_day = date - Duration::days(1);
    PlayWindow {
        from: format!("{}T20:00:00", prior_day.format("%Y-%m-%d")),
        to: format!("{}T10:59:59", date.format("%Y-%m-%d")),
    }
}

pub fn get_date_from_string(date: Option<String>) -> NaiveDate {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .unwrap_or_else(|_| Utc::now().date_naive()),
        None => Utc::now().date_naive(),
    }
}

/// Generates the random `state` guard carried through the authorization
/// redirect and checked by the callback handler.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

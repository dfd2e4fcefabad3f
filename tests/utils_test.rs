use chrono::{NaiveDate, Utc};
use replaycli::utils::*;

#[test]
fn test_clamp_batch_size_above_limit() {
    // Anything above the API cap collapses to exactly 100
    assert_eq!(clamp_batch_size(101), 100);
    assert_eq!(clamp_batch_size(250), 100);
    assert_eq!(clamp_batch_size(u32::MAX), 100);
}

#[test]
fn test_clamp_batch_size_below_limit() {
    assert_eq!(clamp_batch_size(0), 1);
}

#[test]
fn test_clamp_batch_size_in_range() {
    // Values inside [1,100] pass through unchanged, boundaries included
    assert_eq!(clamp_batch_size(1), 1);
    assert_eq!(clamp_batch_size(2), 2);
    assert_eq!(clamp_batch_size(50), 50);
    assert_eq!(clamp_batch_size(99), 99);
    assert_eq!(clamp_batch_size(100), 100);
}

#[test]
fn test_play_window() {
    let date = NaiveDate::from_ymd_opt(2021, 5, 23).unwrap();
    let window = play_window(date);

    // Starts at 20:00 the evening before, ends at 10:59:59 on the day itself
    assert_eq!(window.from, "2021-05-22T20:00:00");
    assert_eq!(window.to, "2021-05-23T10:59:59");
}

#[test]
fn test_play_window_month_boundary() {
    let date = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
    let window = play_window(date);

    assert_eq!(window.from, "2023-02-28T20:00:00");
    assert_eq!(window.to, "2023-03-01T10:59:59");
}

#[test]
fn test_play_window_leap_day() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let window = play_window(date);

    assert_eq!(window.from, "2024-02-29T20:00:00");
    assert_eq!(window.to, "2024-03-01T10:59:59");
}

#[test]
fn test_play_window_year_boundary() {
    let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let window = play_window(date);

    assert_eq!(window.from, "2021-12-31T20:00:00");
    assert_eq!(window.to, "2022-01-01T10:59:59");
}

#[test]
fn test_get_date_from_string() {
    // Test valid date string
    let valid_date = get_date_from_string(Some("2023-10-17".to_string()));
    let expected = NaiveDate::from_ymd_opt(2023, 10, 17).unwrap();
    assert_eq!(valid_date, expected);

    // Test None input (should return current date)
    let current_date = get_date_from_string(None);
    let today = Utc::now().date_naive();
    assert_eq!(current_date, today);

    // Test invalid date string (should return current date)
    let invalid_date = get_date_from_string(Some("invalid-date".to_string()));
    let today = Utc::now().date_naive();
    assert_eq!(invalid_date, today);
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 32 characters
    assert_eq!(state.len(), 32);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated states should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

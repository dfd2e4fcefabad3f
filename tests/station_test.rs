use replaycli::station::extract_plays;
use replaycli::types::{PageCursor, PlaySearchResponse};

// A trimmed-down page in the shape the broadcast search endpoint returns,
// extra fields included to check they are tolerated.
const SAMPLE_PAGE: &str = r#"{
  "total": 3,
  "offset": 0,
  "items": [
    {
      "entity": "Play",
      "played_time": "2021-05-23T10:55:12+00:00",
      "recording": {
        "title": "Song A",
        "artists": [{"name": "Artist A"}, {"name": "Featured B"}]
      }
    },
    {
      "entity": "Play",
      "played_time": "2021-05-23T10:51:40+00:00",
      "recording": {
        "title": "Song B",
        "artists": [{"name": "Artist B"}]
      }
    },
    {
      "entity": "Play",
      "played_time": "2021-05-23T10:47:03+00:00",
      "recording": {
        "title": "Song C",
        "artists": [{"name": "Artist C"}]
      }
    }
  ]
}"#;

#[test]
fn test_extract_plays_keeps_received_order() {
    let page: PlaySearchResponse = serde_json::from_str(SAMPLE_PAGE).unwrap();
    let plays = extract_plays(page.items).unwrap();

    assert_eq!(plays.len(), 3);
    assert_eq!(plays[0].title, "Song A");
    assert_eq!(plays[1].title, "Song B");
    assert_eq!(plays[2].title, "Song C");
}

#[test]
fn test_extract_plays_takes_first_artist() {
    let page: PlaySearchResponse = serde_json::from_str(SAMPLE_PAGE).unwrap();
    let plays = extract_plays(page.items).unwrap();

    // "Featured B" is listed second on Song A and must not win
    assert_eq!(plays[0].artist, "Artist A");
    assert_eq!(plays[1].artist, "Artist B");
}

#[test]
fn test_extract_plays_empty_artist_list_is_malformed() {
    let json = r#"{
      "items": [
        {"recording": {"title": "Orphan Song", "artists": []}}
      ]
    }"#;
    let page: PlaySearchResponse = serde_json::from_str(json).unwrap();

    let result = extract_plays(page.items);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Orphan Song"));
}

#[test]
fn test_extract_plays_empty_page() {
    let page: PlaySearchResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
    let plays = extract_plays(page.items).unwrap();
    assert!(plays.is_empty());
}

#[test]
fn test_extract_plays_missing_recording_fields_fail_decoding() {
    // A page whose items lack the recording structure never reaches
    // extraction; it fails at the serde layer.
    let result = serde_json::from_str::<PlaySearchResponse>(r#"{"items": [{"entity": "Play"}]}"#);
    assert!(result.is_err());
}

#[test]
fn test_page_cursor_starts_at_zero() {
    let cursor = PageCursor::new(100);
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.batch_size(), 100);
}

#[test]
fn test_page_cursor_advances_by_batch_size() {
    let mut cursor = PageCursor::new(100);
    cursor.advance();
    assert_eq!(cursor.offset(), 100);
    cursor.advance();
    assert_eq!(cursor.offset(), 200);

    let mut small = PageCursor::new(7);
    small.advance();
    assert_eq!(small.offset(), 7);
}

#[test]
fn test_page_cursor_clamps_batch_size() {
    assert_eq!(PageCursor::new(250).batch_size(), 100);
    assert_eq!(PageCursor::new(0).batch_size(), 1);
    assert_eq!(PageCursor::new(42).batch_size(), 42);
}

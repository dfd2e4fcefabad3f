use std::collections::VecDeque;

use chrono::NaiveDate;
use reqwest::Client;

use crate::{
    types::{PageCursor, Play, PlayItem, PlaySearchResponse, PlayWindow},
    utils,
};

/// Lazy reader over the plays a station broadcast on a given date.
///
/// Each call to [`next`](PlayLog::next) pops a buffered play or, when the
/// buffer is drained, fetches the next page from the broadcast search
/// endpoint. Plays are yielded in the order the API returns them (descending
/// chronological); the reader never re-sorts.
///
/// # Termination
///
/// - A page with zero items ends the sequence normally.
/// - An undecodable page, or a recording without artists, ends the sequence
///   with an error. Subsequent calls return `Ok(None)`.
pub struct PlayLog {
    api_url: String,
    station: String,
    window: PlayWindow,
    cursor: PageCursor,
    buffer: VecDeque<Play>,
    finished: bool,
    client: Client,
}

impl PlayLog {
    pub fn new(api_url: &str, station: &str, date: NaiveDate, batch_size: u32) -> Self {
        PlayLog {
            api_url: api_url.to_string(),
            station: station.to_string(),
            window: utils::play_window(date),
            cursor: PageCursor::new(batch_size),
            buffer: VecDeque::new(),
            finished: false,
            client: Client::new(),
        }
    }

    /// Yields the next play, fetching a new page when the buffer runs dry.
    pub async fn next(&mut self) -> Result<Option<Play>, String> {
        loop {
            if let Some(play) = self.buffer.pop_front() {
                return Ok(Some(play));
            }
            if self.finished {
                return Ok(None);
            }

            let page = match self.fetch_page().await {
                Ok(page) => page,
                Err(e) => {
                    self.finished = true;
                    return Err(format!("Failed to fetch broadcast log page: {}", e));
                }
            };

            if page.items.is_empty() {
                // normal end of data; the cursor stays where it is
                self.finished = true;
                return Ok(None);
            }

            match extract_plays(page.items) {
                Ok(plays) => self.buffer.extend(plays),
                Err(e) => {
                    self.finished = true;
                    return Err(e);
                }
            }
            self.cursor.advance();
        }
    }

    async fn fetch_page(&self) -> Result<PlaySearchResponse, reqwest::Error> {
        let api_url = format!("{uri}/plays/search.json", uri = self.api_url);

        let response = self
            .client
            .get(&api_url)
            .query(&[
                ("station", self.station.clone()),
                ("from", self.window.from.clone()),
                ("to", self.window.to.clone()),
                ("limit", self.cursor.batch_size().to_string()),
                ("offset", self.cursor.offset().to_string()),
                ("order", "desc".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        response.json::<PlaySearchResponse>().await
    }
}

/// Maps a page of broadcast items to (title, artist) plays, in page order.
///
/// The artist is the first entry of the recording's artist list; a recording
/// without artists makes the whole page malformed.
pub fn extract_plays(items: Vec<PlayItem>) -> Result<Vec<Play>, String> {
    items
        .into_iter()
        .map(|item| {
            let artist = item
                .recording
                .artists
                .first()
                .map(|a| a.name.clone())
                .ok_or_else(|| {
                    format!(
                        "Broadcast item \"{}\" has no artist entries",
                        item.recording.title
                    )
                })?;

            Ok(Play {
                title: item.recording.title,
                artist,
            })
        })
        .collect()
}

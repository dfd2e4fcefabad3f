use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// Credential pair returned by the token endpoint. The access token lives for
/// the rest of the run; the refresh token, when present, outlives it and is
/// persisted for future runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// In-flight interactive authorization, shared between the callback server
/// and the flow waiting on it.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub state: String,
    pub code: Option<String>,
}

/// One (title, artist) pair from the broadcast log. A search key against the
/// Spotify catalog, not a streaming identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Play {
    pub title: String,
    pub artist: String,
}

/// The overnight-to-morning time range associated with a broadcast date,
/// rendered in the station API's `YYYY-MM-DDTHH:MM:SS` format.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayWindow {
    pub from: String,
    pub to: String,
}

/// Offset/limit pair driving paginated retrieval from the broadcast API.
/// The batch size is clamped into [1,100] at construction; the offset only
/// moves forward, by one batch at a time.
#[derive(Debug, Clone)]
pub struct PageCursor {
    offset: u32,
    batch_size: u32,
}

impl PageCursor {
    pub fn new(batch_size: u32) -> Self {
        PageCursor {
            offset: 0,
            batch_size: utils::clamp_batch_size(batch_size),
        }
    }

    pub fn advance(&mut self) {
        self.offset += self.batch_size;
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaySearchResponse {
    pub items: Vec<PlayItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayItem {
    pub recording: Recording,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recording {
    pub title: String,
    pub artists: Vec<RecordingArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordingArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct PlayTableRow {
    pub title: String,
    pub artist: String,
}

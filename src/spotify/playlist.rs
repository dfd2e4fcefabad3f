use reqwest::{Client, StatusCode};

use crate::{
    config::AppConfig,
    types::{AddTracksRequest, CreatePlaylistRequest, CreatePlaylistResponse, SnapshotResponse},
};

/// Creates a new playlist owned by the given user.
///
/// Anything but `201 Created` is an error; without a playlist there is
/// nothing to populate, so the caller treats this as fatal.
pub async fn create(
    cfg: &AppConfig,
    token: &str,
    user_id: &str,
    request: &CreatePlaylistRequest,
) -> Result<CreatePlaylistResponse, String> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = cfg.api_url,
        user_id = user_id
    );

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != StatusCode::CREATED {
        return Err(format!(
            "Playlist creation returned {status}",
            status = response.status()
        ));
    }

    response
        .json::<CreatePlaylistResponse>()
        .await
        .map_err(|e| e.to_string())
}

/// Inserts a single matched track into a playlist.
///
/// A non-`201` response is an error the caller logs and skips; the run
/// continues with the next track.
pub async fn add_track(
    cfg: &AppConfig,
    token: &str,
    playlist_id: &str,
    uri: &str,
) -> Result<SnapshotResponse, String> {
    let api_url = format!(
        "{api}/playlists/{playlist_id}/tracks",
        api = cfg.api_url,
        playlist_id = playlist_id
    );
    let request = AddTracksRequest {
        uris: vec![uri.to_string()],
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != StatusCode::CREATED {
        return Err(format!(
            "Track insertion returned {status}",
            status = response.status()
        ));
    }

    response
        .json::<SnapshotResponse>()
        .await
        .map_err(|e| e.to_string())
}

use reqwest::Client;

use crate::{
    config::AppConfig,
    types::{Play, SearchResponse, Track},
};

/// Searches the catalog for a broadcast play.
///
/// Combines the title with an artist filter and asks for a single result.
/// `Ok(None)` means the catalog has no match, which is a valid per-item
/// outcome; the caller logs and skips it.
pub async fn find_track(
    cfg: &AppConfig,
    token: &str,
    play: &Play,
) -> Result<Option<Track>, reqwest::Error> {
    let api_url = format!("{uri}/search", uri = cfg.api_url);
    let query = format!("{} artist:{}", play.title, play.artist);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<SearchResponse>().await?;
    Ok(json.tracks.items.into_iter().next())
}

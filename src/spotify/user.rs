use reqwest::Client;

use crate::{config::AppConfig, types::UserProfile};

/// Resolves the identifier of the user the access token belongs to.
pub async fn current_user_id(cfg: &AppConfig, token: &str) -> Result<String, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = cfg.api_url);

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let profile = response.json::<UserProfile>().await?;
    Ok(profile.id)
}

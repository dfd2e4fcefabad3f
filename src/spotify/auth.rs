use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config::AppConfig,
    server::start_api_server,
    types::{AuthRequest, Token},
    utils, warning,
};

/// Obtains a bearer credential for the Spotify API.
///
/// When a stored refresh token is supplied it is exchanged directly at the
/// token endpoint; otherwise the interactive authorization-code flow runs,
/// sending the user through the consent page in their browser.
///
/// # Arguments
///
/// * `cfg` - Resolved Spotify configuration (credentials, endpoints, scope)
/// * `stored_refresh` - Refresh token from a previous run, if one exists
///
/// # Returns
///
/// Returns the credential pair on success. `refresh_token` is `None` when
/// the endpoint did not reissue one; that is expected behavior, not an
/// error, and the caller keeps using its stored credential in that case.
///
/// # Errors
///
/// Any response from which an `access_token` cannot be extracted fails the
/// acquisition; without a valid token the run cannot proceed. There is no
/// retry.
pub async fn acquire(cfg: &AppConfig, stored_refresh: Option<String>) -> Result<Token, String> {
    match stored_refresh {
        Some(refresh) => exchange_refresh(cfg, &refresh).await,
        None => authorize_interactive(cfg).await,
    }
}

/// Exchanges a refresh token for a fresh access token.
///
/// The client authenticates with an HTTP Basic header built from
/// base64-encoding `client_id:client_secret`, and posts a form body of
/// `{grant_type: "refresh_token", refresh_token}`.
///
/// # Token Response
///
/// The response must carry an `access_token`; a `refresh_token` may or may
/// not be present (Spotify does not always rotate it).
pub async fn exchange_refresh(cfg: &AppConfig, refresh_token: &str) -> Result<Token, String> {
    let secret = format!("{}:{}", cfg.client_id, cfg.client_secret);
    let b64_secret = STANDARD.encode(secret.as_bytes());

    let client = Client::new();
    let res = client
        .post(&cfg.token_url)
        .header("Authorization", format!("Basic {}", b64_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_json(&json)
}

/// Runs the interactive authorization-code flow.
///
/// # Authorization Flow
///
/// 1. **State Setup**: Generates a random `state` guard for the redirect
/// 2. **Server Start**: Launches the local HTTP server for the OAuth callback
/// 3. **Browser Launch**: Opens the consent URL in the default browser
/// 4. **User Authorization**: User grants the requested scope
/// 5. **Callback Handling**: The local server captures the authorization code
/// 6. **Code Exchange**: The code is exchanged for a credential pair
///
/// # Error Handling
///
/// - Browser launch failures produce a warning with manual URL instructions
/// - Waiting for the callback is bounded at 60 seconds; exceeding it fails
///   the whole acquisition
pub async fn authorize_interactive(cfg: &AppConfig) -> Result<Token, String> {
    let state = utils::generate_state();
    let auth_url = authorize_url(cfg, &state);

    let shared_state = Arc::new(Mutex::new(AuthRequest { state, code: None }));

    // start API server
    let server_state = Arc::clone(&shared_state);
    let server_addr = cfg.server_addr.clone();
    tokio::spawn(async move {
        start_api_server(server_state, &server_addr).await;
    });

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let code = wait_for_code(Arc::clone(&shared_state))
        .await
        .ok_or_else(|| "Authorization timed out before a code was received".to_string())?;

    exchange_code(cfg, &code).await
}

/// Constructs the consent-page URL for the authorization request.
pub fn authorize_url(cfg: &AppConfig, state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = cfg.auth_url,
        client_id = cfg.client_id,
        redirect_uri = cfg.redirect_uri,
        scope = cfg.scope,
        state = state
    )
}

/// Waits for the OAuth callback to deliver an authorization code.
///
/// Polls the shared state once per second with a 60-second ceiling. Runs
/// concurrently with the callback handler that populates the code.
async fn wait_for_code(shared_state: Arc<Mutex<AuthRequest>>) -> Option<String> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(code) = &lock.code {
            return Some(code.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for a credential pair.
///
/// Posts a form body of `{grant_type: "authorization_code", code,
/// redirect_uri, client_id, client_secret}` to the token endpoint. The
/// redirect URI must match the one the consent page redirected to.
pub async fn exchange_code(cfg: &AppConfig, code: &str) -> Result<Token, String> {
    let client = Client::new();
    let res = client
        .post(&cfg.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", cfg.redirect_uri.as_str()),
            ("client_id", cfg.client_id.as_str()),
            ("client_secret", cfg.client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_json(&json)
}

/// Extracts the credential pair from a token-endpoint response body.
///
/// A missing `access_token` is an error; a missing `refresh_token` maps to
/// `None`. Both exchange paths share this treatment.
pub fn token_from_json(json: &Value) -> Result<Token, String> {
    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| format!("Token response is missing access_token: {}", json))?
        .to_string();
    let refresh_token = json["refresh_token"].as_str().map(|s| s.to_string());

    Ok(Token {
        access_token,
        refresh_token,
    })
}

use crate::{config::AppConfig, error, management::TokenStore, spotify, success, warning};

pub async fn auth() {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let token = match spotify::auth::authorize_interactive(&cfg).await {
        Ok(token) => token,
        Err(e) => error!("Authentication failed or timed out: {}", e),
    };

    match token.refresh_token {
        Some(refresh) => {
            if let Err(e) = TokenStore::persist(&refresh).await {
                error!("Failed to save refresh token: {}", e);
            }
            success!("Authentication successful!");
        }
        None => warning!("Authentication succeeded but no refresh token was issued."),
    }
}

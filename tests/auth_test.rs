use replaycli::config::AppConfig;
use replaycli::spotify::auth::{authorize_url, token_from_json};
use serde_json::json;

fn test_config() -> AppConfig {
    AppConfig {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        scope: "playlist-modify-public".to_string(),
        redirect_uri: "http://127.0.0.1:8080/callback".to_string(),
        auth_url: "https://accounts.example.com/authorize".to_string(),
        token_url: "https://accounts.example.com/api/token".to_string(),
        api_url: "https://api.example.com/v1".to_string(),
        server_addr: "127.0.0.1:8080".to_string(),
    }
}

#[test]
fn test_token_from_json_full_response() {
    let json = json!({
        "access_token": "BQC-access",
        "token_type": "Bearer",
        "scope": "playlist-modify-public",
        "expires_in": 3600,
        "refresh_token": "AQD-refresh"
    });

    let token = token_from_json(&json).unwrap();
    assert_eq!(token.access_token, "BQC-access");
    assert_eq!(token.refresh_token.as_deref(), Some("AQD-refresh"));
}

#[test]
fn test_token_from_json_without_refresh_token() {
    // Refresh exchanges often omit the refresh token; that maps to None,
    // not an error and not a stale value.
    let json = json!({
        "access_token": "BQC-access",
        "token_type": "Bearer",
        "expires_in": 3600
    });

    let token = token_from_json(&json).unwrap();
    assert_eq!(token.access_token, "BQC-access");
    assert!(token.refresh_token.is_none());
}

#[test]
fn test_token_from_json_null_refresh_token() {
    let json = json!({
        "access_token": "BQC-access",
        "refresh_token": null
    });

    let token = token_from_json(&json).unwrap();
    assert!(token.refresh_token.is_none());
}

#[test]
fn test_token_from_json_missing_access_token() {
    let json = json!({
        "error": "invalid_grant",
        "error_description": "Refresh token revoked"
    });

    let result = token_from_json(&json);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("access_token"));
}

#[test]
fn test_authorize_url_carries_required_parameters() {
    let cfg = test_config();
    let url = authorize_url(&cfg, "abc123state");

    assert!(url.starts_with("https://accounts.example.com/authorize?"));
    assert!(url.contains("client_id=test-client-id"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("redirect_uri=http://127.0.0.1:8080/callback"));
    assert!(url.contains("scope=playlist-modify-public"));
    assert!(url.contains("state=abc123state"));
}

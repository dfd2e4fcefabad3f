use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::AuthRequest, warning};

/// Receives the OAuth redirect and stores the authorization code in shared
/// state for the waiting flow. The code is only captured when the `state`
/// query parameter matches the one generated for this authorization attempt.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<AuthRequest>>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut request = shared_state.lock().await;
    if params.get("state").map(String::as_str) != Some(request.state.as_str()) {
        warning!("Callback state mismatch; ignoring authorization code.");
        return Html("<h4>State mismatch.</h4>");
    }

    request.code = Some(code.clone());
    Html("<h2>Authorization successful.</h2><p>Close this browser window.</p>")
}

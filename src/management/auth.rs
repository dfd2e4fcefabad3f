use std::path::PathBuf;

/// Persistence for the single long-lived refresh credential.
///
/// The store holds one opaque value in the local data directory. It is read
/// at the start of a run and overwritten at the end when the token endpoint
/// issued a new refresh token.
pub struct TokenStore;

impl TokenStore {
    /// Loads the stored refresh token, if any. A missing or empty store is
    /// not an error; it simply means the interactive flow has to run.
    pub async fn load() -> Option<String> {
        let content = async_fs::read_to_string(Self::store_path()).await.ok()?;
        let token = content.trim().to_string();
        if token.is_empty() { None } else { Some(token) }
    }

    pub async fn persist(refresh_token: &str) -> Result<(), String> {
        let path = Self::store_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        async_fs::write(path, refresh_token)
            .await
            .map_err(|e| e.to_string())
    }

    fn store_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("replaycli/cache/refresh.token");
        path
    }
}

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{self, AppConfig},
    error, info,
    management::TokenStore,
    spotify, success,
    station::PlayLog,
    types::CreatePlaylistRequest,
    utils, warning,
};

pub async fn playlist(
    date: Option<String>,
    name: Option<String>,
    station: Option<String>,
    public: bool,
    description: Option<String>,
    batch_size: Option<u32>,
) {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let play_date = utils::get_date_from_string(date);
    let station = station.unwrap_or_else(config::station_id);
    let playlist_name = name.unwrap_or_else(|| format!("{} {}", station, play_date));

    // Step 1: acquire a token, via the stored refresh credential when one exists
    let stored_refresh = TokenStore::load().await;
    if stored_refresh.is_none() {
        info!("No stored refresh token; starting interactive authorization.");
    }

    let token = match spotify::auth::acquire(&cfg, stored_refresh).await {
        Ok(token) => token,
        Err(e) => error!("Authorization failed: {}", e),
    };

    if let Some(refresh) = &token.refresh_token {
        if let Err(e) = TokenStore::persist(refresh).await {
            warning!("Failed to persist refresh token: {}", e);
        }
    }

    // Step 2: resolve the playlist owner
    let user_id = match spotify::user::current_user_id(&cfg, &token.access_token).await {
        Ok(id) => id,
        Err(e) => error!("Failed to resolve current user: {}", e),
    };

    // Step 3: create the playlist
    let request = CreatePlaylistRequest {
        name: playlist_name.clone(),
        public,
        description: description
            .unwrap_or_else(|| format!("{} broadcast log for {}", station, play_date)),
    };

    let created = match spotify::playlist::create(&cfg, &token.access_token, &user_id, &request).await
    {
        Ok(resp) => resp,
        Err(e) => error!("Couldn't create playlist: {}", e),
    };
    success!("Playlist {} created.", playlist_name);

    // Step 4: replay the broadcast log, one search+insert per play
    let mut log = PlayLog::new(
        &config::station_api_url(),
        &station,
        play_date,
        batch_size.unwrap_or(utils::MAX_BATCH_SIZE),
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Replaying broadcast log...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut added: u32 = 0;
    let mut skipped: u32 = 0;

    loop {
        let play = match log.next().await {
            Ok(Some(play)) => play,
            Ok(None) => break,
            Err(e) => {
                pb.finish_and_clear();
                error!("Broadcast log aborted: {}", e);
            }
        };

        pb.set_message(format!("{} — {}", play.title, play.artist));

        let track = match spotify::search::find_track(&cfg, &token.access_token, &play).await {
            Ok(Some(track)) => track,
            Ok(None) => {
                skipped += 1;
                warning!("Couldn't find spotify track: {} by {}", play.title, play.artist);
                continue;
            }
            Err(e) => {
                skipped += 1;
                warning!(
                    "Search failed for {} by {}: {}",
                    play.title,
                    play.artist,
                    e
                );
                continue;
            }
        };

        match spotify::playlist::add_track(&cfg, &token.access_token, &created.id, &track.uri).await
        {
            Ok(_) => added += 1,
            Err(e) => {
                skipped += 1;
                warning!(
                    "Error adding track {} by {}: {}",
                    play.title,
                    play.artist,
                    e
                );
            }
        }
    }
    pb.finish_and_clear();

    success!(
        "Added {} tracks to {} ({} skipped).",
        added,
        playlist_name,
        skipped
    );
}

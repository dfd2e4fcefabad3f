use tabled::Table;

use crate::{config, error, info, station::PlayLog, types::PlayTableRow, utils};

pub async fn plays(date: Option<String>, station: Option<String>, batch_size: Option<u32>) {
    let play_date = utils::get_date_from_string(date);
    let station = station.unwrap_or_else(config::station_id);

    let mut log = PlayLog::new(
        &config::station_api_url(),
        &station,
        play_date,
        batch_size.unwrap_or(utils::MAX_BATCH_SIZE),
    );

    let mut rows: Vec<PlayTableRow> = Vec::new();
    loop {
        match log.next().await {
            Ok(Some(play)) => rows.push(PlayTableRow {
                title: play.title,
                artist: play.artist,
            }),
            Ok(None) => break,
            Err(e) => error!("Broadcast log aborted: {}", e),
        }
    }

    if rows.is_empty() {
        info!("No plays found for {} on {}.", station, play_date);
        return;
    }

    let table = Table::new(rows);
    println!(
        "Station: {station}\tDate: {date}\n{table}\n",
        station = station,
        date = play_date,
        table = table
    );
}

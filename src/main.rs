use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use replaycli::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Spotify API
    Auth,

    /// List a station's broadcast log for a date
    Plays(PlaysOptions),

    #[clap(about = "Build a playlist from a station's broadcast log")]
    Playlist(PlaylistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaysOptions {
    /// Broadcast date (YYYY-MM-DD); defaults to today
    #[clap(long)]
    pub date: Option<String>,

    /// Station identifier; defaults to the configured station
    #[clap(long)]
    pub station: Option<String>,

    /// Page size for broadcast-log retrieval (clamped to 1-100)
    #[clap(long)]
    pub batch_size: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Broadcast date (YYYY-MM-DD); defaults to today
    #[clap(long)]
    pub date: Option<String>,

    /// Playlist name; defaults to "<station> <date>"
    #[clap(long)]
    pub name: Option<String>,

    /// Station identifier; defaults to the configured station
    #[clap(long)]
    pub station: Option<String>,

    /// Make the playlist public
    #[clap(long)]
    pub public: bool,

    /// Playlist description
    #[clap(long)]
    pub description: Option<String>,

    /// Page size for broadcast-log retrieval (clamped to 1-100)
    #[clap(long)]
    pub batch_size: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Plays(opt) => cli::plays(opt.date, opt.station, opt.batch_size).await,
        Command::Playlist(opt) => {
            cli::playlist(
                opt.date,
                opt.name,
                opt.station,
                opt.public,
                opt.description,
                opt.batch_size,
            )
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

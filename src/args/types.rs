use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::directory::DEFAULT_PLAYERS_FILE;
use crate::model::{DEFAULT_SEASON, Season};
use crate::stats::client::{DEFAULT_MEDIA_BASE, DEFAULT_STATS_BASE};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Name to id mapping loaded at startup.
    #[arg(long, value_name = "PLAYERS_FILE", default_value = DEFAULT_PLAYERS_FILE)]
    pub players_file: PathBuf,
    /// Rebuild the players file from the stats service before serving.
    #[arg(long)]
    pub fetch_players: bool,
    /// Only list players on a current roster when rebuilding the players file.
    #[arg(long, value_name = "BOOL", default_value_t = true, action = clap::ArgAction::Set)]
    pub only_current: bool,
    #[arg(long, value_name = "SEASON", default_value = DEFAULT_SEASON, value_parser = crate::args::validation::check_season)]
    pub directory_season: Season,

    #[arg(long, value_name = "URL", default_value = DEFAULT_STATS_BASE, value_parser = crate::args::validation::check_base_url)]
    pub stats_base_url: String,
    /// Host serving player headshots and team logos.
    #[arg(long, value_name = "URL", default_value = DEFAULT_MEDIA_BASE, value_parser = crate::args::validation::check_base_url)]
    pub media_base_url: String,
    /// Upper bound on every remote call.
    #[arg(long, value_name = "SECONDS", default_value_t = 10, value_parser = crate::args::validation::check_timeout)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: (String, u16),
    pub players_file: PathBuf,
    pub fetch_players: bool,
    pub only_current: bool,
    pub directory_season: Season,
    pub stats_base_url: String,
    pub media_base_url: String,
    pub timeout: Duration,
}

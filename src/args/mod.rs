use clap::Parser;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            bind: (args.host, args.port),
            players_file: args.players_file,
            fetch_players: args.fetch_players,
            only_current: args.only_current,
            directory_season: args.directory_season,
            stats_base_url: args.stats_base_url,
            media_base_url: args.media_base_url,
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}

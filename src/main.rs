use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use log::{error, info};
use std::sync::Arc;

use shotchart::args;
use shotchart::directory::PlayerDirectory;
use shotchart::stats::NbaStatsClient;
use shotchart::{AppState, routes};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks();
    let client = NbaStatsClient::new(&args.stats_base_url, &args.media_base_url, args.timeout)?;

    if args.fetch_players {
        info!(
            "fetching player list for {} (current only: {})",
            args.directory_season, args.only_current
        );
        let directory =
            PlayerDirectory::build(&client, &args.directory_season, args.only_current).await?;
        directory.save(&args.players_file)?;
    }

    let directory = match PlayerDirectory::load(&args.players_file) {
        Ok(directory) => directory,
        Err(e) => {
            error!("cannot load player directory: {e}");
            error!("run with --fetch-players to build {}", args.players_file.display());
            std::process::exit(1);
        }
    };
    info!(
        "loaded {} players from {}",
        directory.len(),
        args.players_file.display()
    );

    let state = AppState::new(Arc::new(client), directory);
    let (host, port) = args.bind.clone();
    info!("listening on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(state.clone()))
            .configure(routes)
            .service(Files::new("/static", "./static"))
    })
    .bind((host, port))?
    .run()
    .await?;
    Ok(())
}

pub mod args;
pub mod controller;
pub mod court;
pub mod directory;
pub mod error;
pub mod model;
pub mod render;
pub mod stats;
pub mod view;

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use directory::PlayerDirectory;
use stats::StatsApi;

pub use error::AppError;

/// Shared with every worker; nothing in here changes after startup.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn StatsApi>,
    pub directory: Arc<PlayerDirectory>,
}

impl AppState {
    pub fn new(api: Arc<dyn StatsApi>, directory: PlayerDirectory) -> Self {
        Self {
            api,
            directory: Arc::new(directory),
        }
    }
}

/// Registers every page and chart route. Team charts live under
/// `/chart/team/{id}`, apart from player charts at `/chart/{id}`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(controller::index))
        .route("/health", web::get().to(HttpResponse::Ok))
        .route("/chart/team/{team_id}", web::get().to(controller::team_chart))
        .route("/chart/{player_id}", web::get().to(controller::player_chart));
}

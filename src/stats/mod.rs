pub mod client;
pub mod table;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::{Season, SeasonType, ShotRecord, Subject};

pub use client::NbaStatsClient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerListing {
    pub person_id: i64,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotChartQuery {
    pub subject: Subject,
    pub season: Season,
    pub season_type: SeasonType,
}

/// Remote stats service and thumbnail host.
#[async_trait]
pub trait StatsApi: Send + Sync {
    async fn player_list(
        &self,
        season: &Season,
        only_current: bool,
    ) -> Result<Vec<PlayerListing>, AppError>;

    async fn shot_chart(&self, query: &ShotChartQuery) -> Result<Vec<ShotRecord>, AppError>;

    /// Raw image bytes of the 230x185 headshot or logo.
    async fn thumbnail(&self, subject: Subject) -> Result<Vec<u8>, AppError>;
}

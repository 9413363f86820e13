use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER};
use std::time::Duration;

use crate::error::AppError;
use crate::model::{Season, ShotRecord, Subject};
use crate::stats::table::{StatsResponse, parse_player_list, parse_shot_chart};
use crate::stats::{PlayerListing, ShotChartQuery, StatsApi};

pub const DEFAULT_STATS_BASE: &str = "http://stats.nba.com";
pub const DEFAULT_MEDIA_BASE: &str = "http://stats.nba.com";
const LEAGUE_ID: &str = "00";

/// Stats service client. Every request is bounded by `timeout`.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    stats_base: String,
    media_base: String,
    timeout: Duration,
}

impl NbaStatsClient {
    /// # Errors
    ///
    /// Will return `Err` if the underlying http client cannot be built
    pub fn new(stats_base: &str, media_base: &str, timeout: Duration) -> Result<Self, AppError> {
        // the stats host rejects requests that do not look like they came from its own site
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        let client = Client::builder()
            .user_agent("shotchart/0.1 (shot chart renderer)")
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            stats_base: stats_base.trim_end_matches('/').to_string(),
            media_base: media_base.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    async fn get_stats(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<StatsResponse, AppError> {
        let url = format!("{}/stats/{endpoint}", self.stats_base);
        debug!("GET {url} {params:?}");
        let response = self
            .client
            .get(&url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("{url}: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Upstream(format!("{url}: {e}")))?;

        response
            .json::<StatsResponse>()
            .await
            .map_err(|e| AppError::Parse(format!("{url}: {e}")))
    }

    fn thumbnail_url(&self, subject: Subject) -> String {
        match subject {
            Subject::Player(id) => format!("{}/media/players/230x185/{id}.png", self.media_base),
            Subject::Team(id) => format!("{}/media/teams/230x185/{id}.png", self.media_base),
        }
    }
}

#[async_trait]
impl StatsApi for NbaStatsClient {
    async fn player_list(
        &self,
        season: &Season,
        only_current: bool,
    ) -> Result<Vec<PlayerListing>, AppError> {
        let params = [
            ("LeagueID", LEAGUE_ID.to_string()),
            ("Season", season.to_string()),
            ("IsOnlyCurrentSeason", u8::from(only_current).to_string()),
        ];
        let response = self.get_stats("commonallplayers", &params).await?;
        parse_player_list(&response)
    }

    async fn shot_chart(&self, query: &ShotChartQuery) -> Result<Vec<ShotRecord>, AppError> {
        // team charts are requested with PlayerID 0
        let (player_id, team_id) = match query.subject {
            Subject::Player(id) => (id, 0),
            Subject::Team(id) => (0, id),
        };
        let params = [
            ("LeagueID", LEAGUE_ID.to_string()),
            ("Season", query.season.to_string()),
            ("SeasonType", query.season_type.to_string()),
            ("TeamID", team_id.to_string()),
            ("PlayerID", player_id.to_string()),
            ("GameID", String::new()),
            ("Outcome", String::new()),
            ("Location", String::new()),
            ("Month", "0".to_string()),
            ("SeasonSegment", String::new()),
            ("DateFrom", String::new()),
            ("DateTo", String::new()),
            ("OpponentTeamID", "0".to_string()),
            ("VsConference", String::new()),
            ("VsDivision", String::new()),
            ("Position", String::new()),
            ("RookieYear", String::new()),
            ("GameSegment", String::new()),
            ("Period", "0".to_string()),
            ("LastNGames", "0".to_string()),
            ("ContextMeasure", "FGA".to_string()),
        ];
        let response = self.get_stats("shotchartdetail", &params).await?;
        let shots = parse_shot_chart(&response, query.season.as_str())?;
        debug!("{} shots for {} in {}", shots.len(), query.subject, query.season);
        Ok(shots)
    }

    async fn thumbnail(&self, subject: Subject) -> Result<Vec<u8>, AppError> {
        let url = self.thumbnail_url(subject);
        let bytes = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("{url}: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Upstream(format!("{url}: {e}")))?
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("{url}: {e}")))?;
        Ok(bytes.to_vec())
    }
}

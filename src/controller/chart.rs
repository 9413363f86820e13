use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use log::{error, info, warn};
use std::collections::HashMap;

use crate::AppState;
use crate::error::AppError;
use crate::model::{Season, SeasonType, ShotChart, Subject};
use crate::render::{decode_thumbnail, render_shot_chart};
use crate::stats::ShotChartQuery;

/// Query string options shared by the player and team charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartParams {
    pub season: Season,
    pub season_type: SeasonType,
    pub json: bool,
}

impl ChartParams {
    /// Missing or blank `season` means the default season.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `season` or `season_type` is malformed
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self, AppError> {
        fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
            query.get(key).map(|s| s.trim()).unwrap_or("")
        }

        let season = match get_param_str(query, "season") {
            "" => Season::default(),
            raw => Season::parse(raw)?,
        };
        let season_type = match get_param_str(query, "season_type") {
            "" => SeasonType::default(),
            raw => SeasonType::parse(raw)?,
        };
        let json = match get_param_str(query, "json") {
            "1" => true,
            "0" => false,
            other => other.parse().unwrap_or(false),
        };

        Ok(Self {
            season,
            season_type,
            json,
        })
    }
}

fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("{what} id '{raw}' is not a positive integer"))),
    }
}

pub async fn player_chart(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let subject = Subject::Player(parse_id(&path, "player")?);
    let params = ChartParams::from_query(&query)?;
    chart_response(&state, subject, params).await
}

pub async fn team_chart(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let subject = Subject::Team(parse_id(&path, "team")?);
    let params = ChartParams::from_query(&query)?;
    chart_response(&state, subject, params).await
}

/// Fetches the shots (and, for images, the thumbnail alongside them) and
/// answers with a PNG or, when asked, the shot data as JSON.
///
/// # Errors
///
/// Will return `Err` if the stats service fails, has no shots for the
/// subject, or the chart cannot be drawn
pub async fn chart_response(
    state: &AppState,
    subject: Subject,
    params: ChartParams,
) -> Result<HttpResponse, AppError> {
    let query = ShotChartQuery {
        subject,
        season: params.season.clone(),
        season_type: params.season_type,
    };

    let shots_fut = state.api.shot_chart(&query);
    let thumbnail_fut = async {
        if params.json {
            None
        } else {
            Some(state.api.thumbnail(subject).await)
        }
    };
    let (shots, thumbnail) = futures::future::join(shots_fut, thumbnail_fut).await;

    let shots = shots.inspect_err(|e| error!("shot chart for {subject} failed: {e}"))?;
    let chart = ShotChart::from_shots(subject, params.season, params.season_type, shots)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "no shots for {subject} in {} {}",
                query.season, query.season_type
            ))
        })?;

    if params.json {
        return Ok(HttpResponse::Ok().json(chart));
    }

    // a missing headshot or logo is not worth failing the chart over
    let thumbnail = match thumbnail {
        Some(Ok(bytes)) => match decode_thumbnail(&bytes) {
            Ok(img) => Some(img),
            Err(e) => {
                warn!("thumbnail for {subject} did not decode: {e}");
                None
            }
        },
        Some(Err(e)) => {
            warn!("thumbnail for {subject} unavailable: {e}");
            None
        }
        None => None,
    };

    let shot_count = chart.shots.len();
    let png = web::block(move || render_shot_chart(&chart, thumbnail.as_ref())).await??;
    info!("rendered {subject} with {shot_count} shots ({} bytes)", png.len());

    Ok(HttpResponse::Ok().content_type("image/png").body(png))
}

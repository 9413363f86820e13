#![allow(dead_code)]

use async_trait::async_trait;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::sync::Mutex;

use shotchart::AppError;
use shotchart::model::{Season, ShotRecord, Subject};
use shotchart::stats::{PlayerListing, ShotChartQuery, StatsApi};

/// What the stub answers for a shot chart request.
#[derive(Clone)]
pub enum ShotReply {
    Shots(Vec<ShotRecord>),
    Fail(AppError),
}

/// In-process stand-in for the stats service. Records every shot chart
/// query so tests can check what the handlers asked for.
pub struct StubStats {
    pub players: Vec<PlayerListing>,
    pub shots: ShotReply,
    pub thumbnail: Result<Vec<u8>, AppError>,
    pub queries: Mutex<Vec<ShotChartQuery>>,
    pub thumbnails_requested: Mutex<Vec<Subject>>,
}

impl StubStats {
    pub fn with_shots(shots: Vec<ShotRecord>) -> Self {
        Self {
            players: sample_players(),
            shots: ShotReply::Shots(shots),
            thumbnail: Ok(thumbnail_png()),
            queries: Mutex::new(Vec::new()),
            thumbnails_requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: AppError) -> Self {
        Self {
            shots: ShotReply::Fail(err),
            ..Self::with_shots(Vec::new())
        }
    }

    pub fn recorded_queries(&self) -> Vec<ShotChartQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn recorded_thumbnails(&self) -> Vec<Subject> {
        self.thumbnails_requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsApi for StubStats {
    async fn player_list(
        &self,
        _season: &Season,
        _only_current: bool,
    ) -> Result<Vec<PlayerListing>, AppError> {
        Ok(self.players.clone())
    }

    async fn shot_chart(&self, query: &ShotChartQuery) -> Result<Vec<ShotRecord>, AppError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.shots {
            ShotReply::Shots(shots) => Ok(shots.clone()),
            ShotReply::Fail(err) => Err(err.clone()),
        }
    }

    async fn thumbnail(&self, subject: Subject) -> Result<Vec<u8>, AppError> {
        self.thumbnails_requested.lock().unwrap().push(subject);
        self.thumbnail.clone()
    }
}

pub fn sample_players() -> Vec<PlayerListing> {
    vec![
        PlayerListing {
            person_id: 201_566,
            display_name: "Russell Westbrook".to_string(),
        },
        PlayerListing {
            person_id: 201_939,
            display_name: "Stephen Curry".to_string(),
        },
        PlayerListing {
            person_id: 2544,
            display_name: "LeBron James".to_string(),
        },
    ]
}

pub fn shot(loc_x: f64, loc_y: f64, shot_made: bool) -> ShotRecord {
    let shot_type = if loc_y > 237.5 {
        "3PT Field Goal"
    } else {
        "2PT Field Goal"
    };
    ShotRecord {
        game_id: "0021600001".to_string(),
        game_event_id: 7,
        player_id: 201_566,
        player_name: "Russell Westbrook".to_string(),
        team_id: 1_610_612_760,
        team_name: "Oklahoma City Thunder".to_string(),
        period: 1,
        action_type: "Jump Shot".to_string(),
        shot_type: shot_type.to_string(),
        shot_zone_basic: "Mid-Range".to_string(),
        shot_distance: 12,
        loc_x,
        loc_y,
        shot_made,
        season: "2016-17".to_string(),
    }
}

pub fn sample_shots() -> Vec<ShotRecord> {
    vec![
        shot(0.0, 0.0, true),
        shot(-120.0, 80.0, false),
        shot(200.0, 150.0, true),
        shot(10.0, 260.0, false),
    ]
}

/// A small solid PNG standing in for a headshot.
pub fn thumbnail_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(23, 18, Rgba([200, 30, 30, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

use serde::{Deserialize, Serialize};
use std::fmt;

use super::season::{Season, SeasonType};

/// Whose shots a chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Subject {
    Player(i64),
    Team(i64),
}

impl Subject {
    #[must_use]
    pub fn id(self) -> i64 {
        match self {
            Subject::Player(id) | Subject::Team(id) => id,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Player(id) => write!(f, "player {id}"),
            Subject::Team(id) => write!(f, "team {id}"),
        }
    }
}

/// One field goal attempt. `loc_x`/`loc_y` are court units with the hoop at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    pub game_id: String,
    pub game_event_id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub team_id: i64,
    pub team_name: String,
    pub period: i64,
    pub action_type: String,
    pub shot_type: String,
    pub shot_zone_basic: String,
    pub shot_distance: i64,
    pub loc_x: f64,
    pub loc_y: f64,
    pub shot_made: bool,
    pub season: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotChart {
    pub subject: Subject,
    pub display_name: String,
    pub season: Season,
    pub season_type: SeasonType,
    pub shots: Vec<ShotRecord>,
}

impl ShotChart {
    /// Player charts are named after the shooter, team charts after the team.
    /// Returns `None` when there are no shots to take a name from.
    #[must_use]
    pub fn from_shots(
        subject: Subject,
        season: Season,
        season_type: SeasonType,
        shots: Vec<ShotRecord>,
    ) -> Option<Self> {
        let first = shots.first()?;
        let display_name = match subject {
            Subject::Player(_) => first.player_name.clone(),
            Subject::Team(_) => first.team_name.clone(),
        };
        Some(Self {
            subject,
            display_name,
            season,
            season_type,
            shots,
        })
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("{} FGA - {}", self.display_name, self.season)
    }

    #[must_use]
    pub fn made_count(&self) -> usize {
        self.shots.iter().filter(|s| s.shot_made).count()
    }
}

/// Splits shots into (made, missed), preserving order within each side.
#[must_use]
pub fn partition_made_missed(shots: &[ShotRecord]) -> (Vec<&ShotRecord>, Vec<&ShotRecord>) {
    shots.iter().partition(|shot| shot.shot_made)
}

#[cfg(test)]
pub(crate) fn sample_shot(loc_x: f64, loc_y: f64, shot_made: bool) -> ShotRecord {
    ShotRecord {
        game_id: "0021600001".to_string(),
        game_event_id: 7,
        player_id: 201_566,
        player_name: "Russell Westbrook".to_string(),
        team_id: 1_610_612_760,
        team_name: "Oklahoma City Thunder".to_string(),
        period: 1,
        action_type: "Jump Shot".to_string(),
        shot_type: "2PT Field Goal".to_string(),
        shot_zone_basic: "Mid-Range".to_string(),
        shot_distance: 15,
        loc_x,
        loc_y,
        shot_made,
        season: "2016-17".to_string(),
    }
}

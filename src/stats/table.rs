//! The stats service answers every endpoint with named tables of
//! `headers` plus positional `rowSet` rows.

use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::model::ShotRecord;
use crate::stats::PlayerListing;

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", alias = "resultSet")]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl StatsResponse {
    /// # Errors
    ///
    /// Will return `Err` if no table carries `name`
    pub fn table(&self, name: &str) -> Result<&ResultSet, AppError> {
        self.result_sets
            .iter()
            .find(|set| set.name == name)
            .ok_or_else(|| AppError::Parse(format!("response has no '{name}' result set")))
    }
}

impl ResultSet {
    /// # Errors
    ///
    /// Will return `Err` if the header is missing
    pub fn column(&self, header: &str) -> Result<usize, AppError> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| AppError::Parse(format!("'{}' has no column '{header}'", self.name)))
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.row_set.iter().enumerate().map(|(index, values)| Row {
            table: &self.name,
            index,
            values,
        })
    }
}

pub struct Row<'a> {
    table: &'a str,
    index: usize,
    values: &'a [Value],
}

impl Row<'_> {
    fn value(&self, column: usize) -> Result<&Value, AppError> {
        self.values.get(column).ok_or_else(|| {
            AppError::Parse(format!(
                "'{}' row {} is shorter than its headers",
                self.table, self.index
            ))
        })
    }

    fn mismatch(&self, column: usize, expected: &str) -> AppError {
        AppError::Parse(format!(
            "'{}' row {} column {column} is not {expected}",
            self.table, self.index
        ))
    }

    /// # Errors
    ///
    /// Will return `Err` if the cell is missing or not an integer
    pub fn int(&self, column: usize) -> Result<i64, AppError> {
        let value = self.value(column)?;
        value
            .as_i64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
            .ok_or_else(|| self.mismatch(column, "an integer"))
    }

    /// # Errors
    ///
    /// Will return `Err` if the cell is missing or not a number
    pub fn float(&self, column: usize) -> Result<f64, AppError> {
        self.value(column)?
            .as_f64()
            .ok_or_else(|| self.mismatch(column, "a number"))
    }

    /// Strings come back as-is; numbers (ids are sometimes sent either way) are stringified.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the cell is missing, null, or not a scalar
    pub fn text(&self, column: usize) -> Result<String, AppError> {
        match self.value(column)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(self.mismatch(column, "a string")),
        }
    }
}

/// # Errors
///
/// Will return `Err` if the `CommonAllPlayers` table is missing or malformed
pub fn parse_player_list(response: &StatsResponse) -> Result<Vec<PlayerListing>, AppError> {
    let table = response.table("CommonAllPlayers")?;
    let person_id = table.column("PERSON_ID")?;
    let display_name = table.column("DISPLAY_FIRST_LAST")?;

    table
        .rows()
        .map(|row| -> Result<PlayerListing, AppError> {
            Ok(PlayerListing {
                person_id: row.int(person_id)?,
                display_name: row.text(display_name)?,
            })
        })
        .collect()
}

/// # Errors
///
/// Will return `Err` if the `Shot_Chart_Detail` table is missing or malformed
pub fn parse_shot_chart(
    response: &StatsResponse,
    season: &str,
) -> Result<Vec<ShotRecord>, AppError> {
    let table = response.table("Shot_Chart_Detail")?;
    let game_id = table.column("GAME_ID")?;
    let game_event_id = table.column("GAME_EVENT_ID")?;
    let player_id = table.column("PLAYER_ID")?;
    let player_name = table.column("PLAYER_NAME")?;
    let team_id = table.column("TEAM_ID")?;
    let team_name = table.column("TEAM_NAME")?;
    let period = table.column("PERIOD")?;
    let action_type = table.column("ACTION_TYPE")?;
    let shot_type = table.column("SHOT_TYPE")?;
    let shot_zone_basic = table.column("SHOT_ZONE_BASIC")?;
    let shot_distance = table.column("SHOT_DISTANCE")?;
    let loc_x = table.column("LOC_X")?;
    let loc_y = table.column("LOC_Y")?;
    let shot_made_flag = table.column("SHOT_MADE_FLAG")?;

    table
        .rows()
        .map(|row| -> Result<ShotRecord, AppError> {
            let shot_made = match row.int(shot_made_flag)? {
                1 => true,
                0 => false,
                other => {
                    return Err(AppError::Parse(format!(
                        "unexpected SHOT_MADE_FLAG value {other}"
                    )));
                }
            };
            Ok(ShotRecord {
                game_id: row.text(game_id)?,
                game_event_id: row.int(game_event_id)?,
                player_id: row.int(player_id)?,
                player_name: row.text(player_name)?,
                team_id: row.int(team_id)?,
                team_name: row.text(team_name)?,
                period: row.int(period)?,
                action_type: row.text(action_type)?,
                shot_type: row.text(shot_type)?,
                shot_zone_basic: row.text(shot_zone_basic)?,
                shot_distance: row.int(shot_distance)?,
                loc_x: row.float(loc_x)?,
                loc_y: row.float(loc_y)?,
                shot_made,
                season: season.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) const SHOT_CHART_HEADERS: [&str; 24] = [
    "GRID_TYPE",
    "GAME_ID",
    "GAME_EVENT_ID",
    "PLAYER_ID",
    "PLAYER_NAME",
    "TEAM_ID",
    "TEAM_NAME",
    "PERIOD",
    "MINUTES_REMAINING",
    "SECONDS_REMAINING",
    "EVENT_TYPE",
    "ACTION_TYPE",
    "SHOT_TYPE",
    "SHOT_ZONE_BASIC",
    "SHOT_ZONE_AREA",
    "SHOT_ZONE_RANGE",
    "SHOT_DISTANCE",
    "LOC_X",
    "LOC_Y",
    "SHOT_ATTEMPTED_FLAG",
    "SHOT_MADE_FLAG",
    "GAME_DATE",
    "HTM",
    "VTM",
];

#[cfg(test)]
pub(crate) fn shot_row(x: i64, y: i64, made: i64) -> Value {
    let event_type = if made == 1 { "Made Shot" } else { "Missed Shot" };
    serde_json::json!([
        "Shot Chart Detail",
        "0021600001",
        12,
        201_566,
        "Russell Westbrook",
        1_610_612_760,
        "Oklahoma City Thunder",
        1,
        10,
        32,
        event_type,
        "Jump Shot",
        "2PT Field Goal",
        "Mid-Range",
        "Left Side(L)",
        "8-16 ft.",
        12,
        x,
        y,
        1,
        made,
        "20161026",
        "PHI",
        "OKC"
    ])
}

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::AppError;

pub const DEFAULT_SEASON: &str = "2016-17";

static SEASON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})$").expect("season pattern is a valid regex")
});

/// A season label such as `2016-17`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Season(String);

impl Season {
    /// # Errors
    ///
    /// Will return `Err` if `raw` is not `YYYY-YY` with the second year following the first
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        let caps = SEASON_RE
            .captures(raw)
            .ok_or_else(|| AppError::BadRequest(format!("season '{raw}' is not YYYY-YY")))?;
        let start: u32 = caps[1]
            .parse()
            .map_err(|_| AppError::BadRequest(format!("season '{raw}' is not YYYY-YY")))?;
        let end: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::BadRequest(format!("season '{raw}' is not YYYY-YY")))?;
        if (start + 1) % 100 != end {
            return Err(AppError::BadRequest(format!(
                "season '{raw}' must span consecutive years"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(DEFAULT_SEASON.to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Season {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeasonType {
    #[default]
    #[serde(rename = "Regular Season")]
    RegularSeason,
    #[serde(rename = "Playoffs")]
    Playoffs,
    #[serde(rename = "Pre Season")]
    PreSeason,
    #[serde(rename = "All Star")]
    AllStar,
}

impl SeasonType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::PreSeason => "Pre Season",
            SeasonType::AllStar => "All Star",
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if `raw` is not one of the stats service's season types
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim() {
            "Regular Season" => Ok(SeasonType::RegularSeason),
            "Playoffs" => Ok(SeasonType::Playoffs),
            "Pre Season" => Ok(SeasonType::PreSeason),
            "All Star" => Ok(SeasonType::AllStar),
            other => Err(AppError::BadRequest(format!(
                "unknown season_type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

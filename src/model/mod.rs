pub mod season;
pub mod shot;

pub use season::{DEFAULT_SEASON, Season, SeasonType};
pub use shot::{ShotChart, ShotRecord, Subject, partition_made_missed};

pub mod chart;
pub mod index;

pub use chart::{player_chart, team_chart};
pub use index::index;

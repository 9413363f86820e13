//! Player name to id lookup, fetched once and kept in `players.json`.

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::model::Season;
use crate::stats::{PlayerListing, StatsApi};

pub const DEFAULT_PLAYERS_FILE: &str = "players.json";

/// Read-only after construction. Serialises as a flat `{"name": id}` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerDirectory {
    players: BTreeMap<String, i64>,
}

impl PlayerDirectory {
    /// A later listing with the same display name replaces an earlier one.
    pub fn from_listings<I>(listings: I) -> Self
    where
        I: IntoIterator<Item = PlayerListing>,
    {
        let players = listings
            .into_iter()
            .map(|listing| (listing.display_name, listing.person_id))
            .collect();
        Self { players }
    }

    /// # Errors
    ///
    /// Will return `Err` if the player list cannot be fetched or parsed
    pub async fn build(
        api: &dyn StatsApi,
        season: &Season,
        only_current: bool,
    ) -> Result<Self, AppError> {
        let listings = api.player_list(season, only_current).await?;
        Ok(Self::from_listings(listings))
    }

    /// Overwrites `path`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be written
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)
            .map_err(|e| AppError::Io(format!("writing {}: {e}", path.display())))?;
        info!("wrote {} players to {}", self.len(), path.display());
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the file is missing or is not a `{"name": id}` object
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("reading {}: {e}", path.display())))?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::Parse(format!("{}: {e}", path.display())))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.players.get(name).copied()
    }

    /// Entries sorted by display name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.players.iter().map(|(name, id)| (name.as_str(), *id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

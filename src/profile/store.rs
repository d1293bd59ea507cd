//! Profile and season storage seam.
//!
//! Persistence lives outside this crate. `ProfileStore` is the interface
//! the core needs from it; `InMemoryProfileStore` backs tests and local
//! play.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameRng, RatingConfig};
use crate::game::{GameMode, MatchEngine, MatchError};
use crate::rating::{rate_ranked_match, RankRecord, RatingUpdate};

/// Season used when none is given.
pub const DEFAULT_SEASON: &str = "pre-season";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("unknown user {0}")]
    UserNotFound(String),

    #[error("no {season} season record for user {user}")]
    SeasonNotFound { user: String, season: String },
}

/// Account-level totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub level: u32,
    pub total_games: u32,
    pub total_wins: u32,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            level: 1,
            total_games: 0,
            total_wins: 0,
        }
    }
}

/// A player's rank records for one season, one per mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeason {
    pub user_id: String,
    pub season_id: String,
    pub ranks: FxHashMap<GameMode, RankRecord>,
}

impl PlayerSeason {
    /// Fresh records for every mode.
    pub fn new(user_id: impl Into<String>, season_id: impl Into<String>) -> Self {
        let ranks = [GameMode::OneVsOne, GameMode::TwoVsTwo]
            .into_iter()
            .map(|mode| (mode, RankRecord::default()))
            .collect();
        Self {
            user_id: user_id.into(),
            season_id: season_id.into(),
            ranks,
        }
    }

    #[must_use]
    pub fn rank(&self, mode: GameMode) -> Option<&RankRecord> {
        self.ranks.get(&mode)
    }
}

/// Storage the core reads profiles from and writes results to.
pub trait ProfileStore {
    fn user_profile(&self, user: &str) -> Result<UserProfile, ProfileError>;

    fn player_season(&self, user: &str, season: &str) -> Result<PlayerSeason, ProfileError>;

    /// Create fresh season records, replacing any that exist.
    fn initialize_season(&mut self, user: &str, season: &str) -> Result<(), ProfileError>;

    fn update_player_rank(
        &mut self,
        user: &str,
        season: &str,
        mode: GameMode,
        record: RankRecord,
    ) -> Result<(), ProfileError>;

    /// Count one game, and one win if `won`.
    fn update_game_stats(&mut self, user: &str, won: bool) -> Result<(), ProfileError>;
}

/// `ProfileStore` held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProfileStore {
    users: FxHashMap<String, UserProfile>,
    seasons: FxHashMap<(String, String), PlayerSeason>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user and open their default season.
    pub fn add_user(&mut self, profile: UserProfile) {
        let season = PlayerSeason::new(profile.id.clone(), DEFAULT_SEASON);
        self.seasons
            .insert((profile.id.clone(), DEFAULT_SEASON.to_string()), season);
        self.users.insert(profile.id.clone(), profile);
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn user_profile(&self, user: &str) -> Result<UserProfile, ProfileError> {
        self.users
            .get(user)
            .cloned()
            .ok_or_else(|| ProfileError::UserNotFound(user.to_string()))
    }

    fn player_season(&self, user: &str, season: &str) -> Result<PlayerSeason, ProfileError> {
        self.seasons
            .get(&(user.to_string(), season.to_string()))
            .cloned()
            .ok_or_else(|| ProfileError::SeasonNotFound {
                user: user.to_string(),
                season: season.to_string(),
            })
    }

    fn initialize_season(&mut self, user: &str, season: &str) -> Result<(), ProfileError> {
        if !self.users.contains_key(user) {
            return Err(ProfileError::UserNotFound(user.to_string()));
        }
        self.seasons.insert(
            (user.to_string(), season.to_string()),
            PlayerSeason::new(user, season),
        );
        Ok(())
    }

    fn update_player_rank(
        &mut self,
        user: &str,
        season: &str,
        mode: GameMode,
        record: RankRecord,
    ) -> Result<(), ProfileError> {
        let entry = self
            .seasons
            .get_mut(&(user.to_string(), season.to_string()))
            .ok_or_else(|| ProfileError::SeasonNotFound {
                user: user.to_string(),
                season: season.to_string(),
            })?;
        entry.ranks.insert(mode, record);
        Ok(())
    }

    fn update_game_stats(&mut self, user: &str, won: bool) -> Result<(), ProfileError> {
        let profile = self
            .users
            .get_mut(user)
            .ok_or_else(|| ProfileError::UserNotFound(user.to_string()))?;
        profile.total_games += 1;
        if won {
            profile.total_wins += 1;
        }
        Ok(())
    }
}

/// What the profile layer needs to know about a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub mode: GameMode,
    pub ranked: bool,
    pub won: bool,
}

impl MatchOutcome {
    /// Outcome for the human seat of `engine`. Fails until the match is over.
    pub fn for_human(engine: &MatchEngine) -> Result<Self, MatchError> {
        if !engine.is_complete() {
            return Err(MatchError::MatchInProgress);
        }
        let state = engine.state();
        Ok(Self {
            mode: state.mode,
            ranked: state.ranked,
            won: engine.human_won(),
        })
    }
}

/// Persist the outcome of a finished match for `user`.
///
/// Game totals are always updated. The rank record is rated and written
/// only for ranked matches; the returned update is the one authoritative
/// computation for this match and should be cached by the caller.
///
/// The user and season are read before anything is written, and totals are
/// written before the rank record. If the totals write fails the rank
/// record is untouched.
pub fn record_match_result<S: ProfileStore + ?Sized>(
    store: &mut S,
    user: &str,
    season: &str,
    outcome: MatchOutcome,
    config: &RatingConfig,
    rng: &mut GameRng,
) -> Result<Option<RatingUpdate>, ProfileError> {
    store.user_profile(user)?;
    let rated = if outcome.ranked {
        let season_data = store.player_season(user, season)?;
        let mut record = season_data.rank(outcome.mode).cloned().unwrap_or_default();
        let update = rate_ranked_match(&mut record, outcome.won, config, rng);
        Some((record, update))
    } else {
        None
    };

    store.update_game_stats(user, outcome.won)?;

    match rated {
        Some((record, update)) => {
            store.update_player_rank(user, season, outcome.mode, record)?;
            Ok(Some(update))
        }
        None => Ok(None),
    }
}

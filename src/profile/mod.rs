//! Player profiles, season rank records and result persistence.

pub mod store;

pub use store::{
    record_match_result, InMemoryProfileStore, MatchOutcome, PlayerSeason, ProfileError, ProfileStore,
    UserProfile, DEFAULT_SEASON,
};

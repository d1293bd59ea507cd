//! Synthetic players.
//!
//! ## Key Types
//!
//! - `OpponentPolicy`: picks the card an AI seat plays
//! - `MatchDriver`: owns a match and plays its AI seats after a
//!   cancelable thinking delay

pub mod driver;
pub mod policy;

pub use driver::{DriverStats, MatchDriver, ScheduledTurn, TickOutcome};
pub use policy::{OpponentPolicy, RandomRegularPolicy, RegularFirstPolicy};

//! Finished-game storage and statistics for BowlVault.
//!
//! The scoring engine hands over a frozen [`bv_core::Snapshot`] when a game
//! ends; this crate turns it into a dated [`GameRecord`], keeps records in a
//! [`GameRepository`], and computes the dashboard numbers over them.

pub mod error;
pub mod json;
pub mod record;
pub mod repository;
pub mod setup;
pub mod stats;

pub use error::{VaultError, VaultResult};
pub use json::JsonVault;
pub use record::{GameEdit, GameRecord, MAX_SCORE, parse_date};
pub use repository::{GameRepository, MemoryVault};
pub use setup::{GameMode, GameSetup, LeagueSize, ModeFilter};
pub use stats::{FrameStats, QuickStats};

//! Ten-pin bowling scoring engine for BowlVault.
//!
//! Holds the ten frames of a single game, records deliveries one at a time
//! under official rules (strikes, spares, the three-ball tenth frame, fouls
//! and misses), and derives the running score on demand. Presentation and
//! storage live elsewhere: the engine only exposes plain data.
//!
//! ```
//! use bv_core::Game;
//!
//! let mut game = Game::new();
//! for _ in 0..12 {
//!     game.add_roll(10, None);
//! }
//! assert!(game.is_complete());
//! assert_eq!(game.score().total, 300);
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod input;
pub mod roll;
pub mod score;

pub use error::{CoreError, CoreResult};
pub use frame::{FRAME_COUNT, Frame, FrameKind, PIN_COUNT};
pub use game::{Cursor, Game, Snapshot};
pub use input::Delivery;
pub use roll::{Mark, Roll};
pub use score::{Score, score, score_frames};

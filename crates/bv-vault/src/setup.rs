//! How a game is being played: mode, equipment, and venue.

use serde::{Deserialize, Serialize};

use crate::error::VaultError;

/// Label recorded when no personal ball was picked.
pub const HOUSE_BALL: &str = "House Ball";

/// Placeholder for an unknown lane or place.
pub const UNKNOWN: &str = "?";

/// Team size of a league night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueSize {
    /// Two bowlers per team.
    #[serde(rename = "2v2")]
    TwoVsTwo,
    /// Three bowlers per team.
    #[serde(rename = "3v3")]
    ThreeVsThree,
    /// Four bowlers per team.
    #[serde(rename = "4v4")]
    FourVsFour,
}

impl std::fmt::Display for LeagueSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TwoVsTwo => write!(f, "2v2"),
            Self::ThreeVsThree => write!(f, "3v3"),
            Self::FourVsFour => write!(f, "4v4"),
        }
    }
}

impl std::str::FromStr for LeagueSize {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2v2" | "2" => Ok(Self::TwoVsTwo),
            "3v3" | "3" => Ok(Self::ThreeVsThree),
            "4v4" | "4" => Ok(Self::FourVsFour),
            _ => Err(VaultError::InvalidLeagueSize(s.to_string())),
        }
    }
}

/// Whether a game was bowled in league or practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Casual practice.
    #[default]
    Practice,
    /// A league game for a team of the given size.
    League(LeagueSize),
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Practice => write!(f, "practice"),
            Self::League(size) => write!(f, "league {size}"),
        }
    }
}

/// Which saved games a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeFilter {
    /// Every game.
    #[default]
    All,
    /// Practice games only.
    Practice,
    /// League games of one team size.
    League(LeagueSize),
}

impl ModeFilter {
    /// Whether a game bowled in `mode` passes the filter.
    pub fn matches(self, mode: GameMode) -> bool {
        match self {
            Self::All => true,
            Self::Practice => mode == GameMode::Practice,
            Self::League(size) => mode == GameMode::League(size),
        }
    }
}

impl std::str::FromStr for ModeFilter {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "practice" => Ok(Self::Practice),
            other => other
                .parse()
                .map(Self::League)
                .map_err(|_| VaultError::InvalidModeFilter(s.to_string())),
        }
    }
}

/// Details recorded alongside a finished game.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    /// League or practice.
    pub mode: GameMode,
    /// Ball names used, if any were picked.
    pub balls: Vec<String>,
    /// Lane number or name.
    pub lane: Option<String>,
    /// Bowling center.
    pub place: Option<String>,
    /// Names of the other bowlers, stored as given.
    pub players: Vec<String>,
}

impl GameSetup {
    /// A practice game.
    pub fn practice() -> Self {
        Self::default()
    }

    /// A league game.
    pub fn league(size: LeagueSize) -> Self {
        Self {
            mode: GameMode::League(size),
            ..Self::default()
        }
    }

    /// Add a ball to the game. Blank names are ignored.
    pub fn with_ball(mut self, ball: impl Into<String>) -> Self {
        let ball = ball.into();
        if !ball.trim().is_empty() {
            self.balls.push(ball.trim().to_string());
        }
        self
    }

    /// Set the lane.
    pub fn with_lane(mut self, lane: impl Into<String>) -> Self {
        self.lane = Some(lane.into());
        self
    }

    /// Set the bowling center.
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Add a player name.
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// The ball label stored on the record: picked balls joined by commas,
    /// or the house ball.
    pub fn ball_label(&self) -> String {
        if self.balls.is_empty() {
            HOUSE_BALL.to_string()
        } else {
            self.balls.join(", ")
        }
    }

    /// Lane, or `?` when not given.
    pub fn lane_label(&self) -> String {
        label_or_unknown(self.lane.as_deref())
    }

    /// Place, or `?` when not given.
    pub fn place_label(&self) -> String {
        label_or_unknown(self.place.as_deref())
    }
}

pub(crate) fn label_or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

//! Dashboard statistics over saved games.

use std::collections::HashMap;

use bv_core::FrameKind;
use serde::Serialize;

use crate::record::GameRecord;
use crate::setup::GameMode;

/// Headline numbers across every saved game.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuickStats {
    /// Number of saved games.
    pub games_played: usize,
    /// Sum of all final scores.
    pub total_pins: u32,
    /// Best game, 0 when there are none.
    pub high_score: u32,
    /// Worst game, 0 when there are none.
    pub low_score: u32,
    /// The most used ball, if any game named one.
    pub favorite_ball: Option<String>,
}

impl QuickStats {
    /// Compute headline numbers from records in save order.
    pub fn from_records(records: &[GameRecord]) -> Self {
        Self {
            games_played: records.len(),
            total_pins: records.iter().map(|r| r.score).sum(),
            high_score: records.iter().map(|r| r.score).max().unwrap_or(0),
            low_score: records.iter().map(|r| r.score).min().unwrap_or(0),
            favorite_ball: favorite_ball(records),
        }
    }
}

#[derive(Default)]
struct BallUsage {
    count: usize,
    best: u32,
    last_used: usize,
}

/// The ball used in the most games. Ties go to the higher best score, then
/// to the more recently used ball. A label naming several balls (split on
/// `,`, `/`, or `&`) counts toward each.
pub fn favorite_ball(records: &[GameRecord]) -> Option<String> {
    let mut usage: HashMap<&str, BallUsage> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        for ball in record
            .ball
            .split([',', '/', '&'])
            .map(str::trim)
            .filter(|b| !b.is_empty())
        {
            let entry = usage.entry(ball).or_default();
            entry.count += 1;
            entry.best = entry.best.max(record.score);
            entry.last_used = index;
        }
    }
    usage
        .into_iter()
        .max_by_key(|(_, u)| (u.count, u.best, u.last_used))
        .map(|(ball, _)| ball.to_string())
}

/// Mean score of the games bowled in `mode`, rounded to one decimal.
/// Zero when no game matches.
pub fn average_score(records: &[GameRecord], mode: GameMode) -> f64 {
    let scores: Vec<u32> = records
        .iter()
        .filter(|r| r.mode == mode)
        .map(|r| r.score)
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    let mean = f64::from(scores.iter().sum::<u32>()) / scores.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// How frames finished across every saved game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// Frames opened with a strike.
    pub strikes: u32,
    /// Frames closed with a spare.
    pub spares: u32,
    /// Frames left open.
    pub opens: u32,
}

impl FrameStats {
    /// Classify every bowled frame of every record.
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut stats = Self::default();
        for kind in records
            .iter()
            .flat_map(|r| r.frames.iter())
            .filter_map(|f| f.kind())
        {
            match kind {
                FrameKind::Strike => stats.strikes += 1,
                FrameKind::Spare => stats.spares += 1,
                FrameKind::Open => stats.opens += 1,
            }
        }
        stats
    }

    /// Number of classified frames.
    pub fn total(&self) -> u32 {
        self.strikes + self.spares + self.opens
    }

    /// Strike frames as a whole percentage.
    pub fn strike_pct(&self) -> u32 {
        self.percent(self.strikes)
    }

    /// Spare frames as a whole percentage.
    pub fn spare_pct(&self) -> u32 {
        self.percent(self.spares)
    }

    /// Open frames as a whole percentage.
    pub fn open_pct(&self) -> u32 {
        self.percent(self.opens)
    }

    fn percent(&self, count: u32) -> u32 {
        match self.total() {
            0 => 0,
            total => (f64::from(count) * 100.0 / f64::from(total)).round() as u32,
        }
    }
}

//! Local top-score table
//!
//! Persisted as JSON on native, tracks the top 10 scores. Acts as the
//! default [`ScoreSink`]: recording a score is fire-and-forget, so a full
//! disk or unwritable path is logged and never stops the next run.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::ScoreSink;

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;
/// Longest stored player name; longer names are truncated
pub const MAX_NAME_LEN: usize = 15;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Top-score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the table. Zero never does.
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a score. The name is trimmed and truncated to
    /// [`MAX_NAME_LEN`]. Returns the rank achieved (1-indexed) or None if
    /// the score didn't qualify.
    pub fn add_score(&mut self, name: &str, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let mut name = name.trim().to_owned();
        if let Some((idx, _)) = name.char_indices().nth(MAX_NAME_LEN) {
            name.truncate(idx);
        }

        let entry = LeaderboardEntry { name, score };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load from a JSON file; a missing or corrupt file starts fresh.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(board) => {
                    log::info!("loaded leaderboard from {}", path.display());
                    board
                }
                Err(err) => {
                    log::warn!("corrupt leaderboard at {}: {err}", path.display());
                    Self::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::new(),
            Err(err) => {
                log::warn!("failed to read {}: {err}", path.display());
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        std::fs::write(path, json)
    }
}

/// [`ScoreSink`] that records runs for one player and persists the table.
#[derive(Debug)]
pub struct LeaderboardSink {
    board: Leaderboard,
    player: String,
    path: Option<PathBuf>,
}

impl LeaderboardSink {
    pub fn new(player: impl Into<String>, path: Option<PathBuf>) -> Self {
        let board = match &path {
            Some(p) => Leaderboard::load(p),
            None => Leaderboard::new(),
        };
        Self {
            board,
            player: player.into(),
            path,
        }
    }

    pub fn board(&self) -> &Leaderboard {
        &self.board
    }
}

impl ScoreSink for LeaderboardSink {
    fn notify(&mut self, final_score: u32) {
        match self.board.add_score(&self.player, final_score) {
            Some(rank) => log::info!("{} scored {final_score}, rank {rank}", self.player),
            None => log::info!("{} scored {final_score} (off the board)", self.player),
        }
        if let Some(path) = &self.path {
            if let Err(err) = self.board.save(path) {
                // Persistence is best-effort; the next run must not be blocked
                log::warn!("failed to save leaderboard: {err}");
            }
        }
    }
}

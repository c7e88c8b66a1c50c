//! Game state: board, turn ownership and phase.
//!
//! ## GameState
//!
//! A plain value (`Copy`, `serde`) holding everything needed to resume a
//! game:
//! - The 12-slot board
//! - The player to move
//! - The current phase
//! - A summary of the most recent move, used by mission evaluation
//!
//! Transitions never mutate a state in place; they return a new one.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::CongklakConfig;
use super::player::Player;
use crate::error::{InvalidBoard, SnapshotError};

/// Interaction phase. Moves are only legal while `Playing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    Playing,
    AwaitingRetryConfirmation,
    AwaitingExitConfirmation,
    ShowingMission,
    /// Terminal until reset or a new mission is chosen.
    MissionComplete,
}

impl Phase {
    /// Kebab-case name, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::AwaitingRetryConfirmation => "awaiting-retry-confirmation",
            Phase::AwaitingExitConfirmation => "awaiting-exit-confirmation",
            Phase::ShowingMission => "showing-mission",
            Phase::MissionComplete => "mission-complete",
        }
    }

    /// Check if moves are accepted in this phase.
    #[must_use]
    pub const fn accepts_moves(self) -> bool {
        matches!(self, Phase::Playing)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of the move that produced a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastMove {
    /// Player who sowed (the player to move *before* the move).
    pub mover: Player,

    /// Pit the seeds were taken from.
    pub source: usize,

    /// Slot that received the last seed.
    pub last_index: usize,

    /// Board as it was before the move.
    pub board_before: Board,
}

/// Complete game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Seed counts.
    pub board: Board,

    /// Player to move.
    pub current_player: Player,

    /// Interaction phase.
    pub phase: Phase,

    /// Most recent move, `None` right after a reset.
    #[serde(default)]
    pub last_move: Option<LastMove>,
}

impl GameState {
    /// The standard starting state: full pits, Player 1 to move, playing.
    #[must_use]
    pub fn initial() -> Self {
        Self::from_board(Board::initial(), Player::One)
    }

    /// Starting state for a configuration.
    #[must_use]
    pub fn from_config(config: &CongklakConfig) -> Self {
        Self::from_board(Board::with_seeds_per_pit(config.seeds_per_pit), Player::One)
    }

    /// A playing state with an arbitrary board, for puzzles and tests.
    #[must_use]
    pub fn from_board(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            phase: Phase::Playing,
            last_move: None,
        }
    }

    /// Return a copy in `phase`.
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Check every board in the state is within the supported seed total.
    ///
    /// Deserialized states are already checked; this covers states built
    /// in code with [`Board::from_pits`].
    pub fn validate(&self) -> Result<(), InvalidBoard> {
        self.board.validate()?;
        if let Some(last) = &self.last_move {
            last.board_before.validate()?;
        }
        Ok(())
    }

    /// Encode to a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a snapshot produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

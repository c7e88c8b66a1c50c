//! Structured error types.

use crate::core::board::MAX_BOARD_SEEDS;
use crate::core::{Phase, Player};
use crate::rules::PhaseAction;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Moves are only accepted while the phase is `playing`.
    NotPlaying(Phase),
    /// A previous sow is still being played back.
    SowingInProgress,
    /// The index is not on the board, or is a store.
    OutOfRange,
    /// The pit belongs to the other player.
    NotOwnPit { player: Player },
    /// The pit has no seeds to sow.
    EmptyPit,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::NotPlaying(phase) => write!(f, "game is {phase}, not playing"),
            IllegalMoveReason::SowingInProgress => write!(f, "a sow is still in progress"),
            IllegalMoveReason::OutOfRange => write!(f, "not a sowing pit"),
            IllegalMoveReason::NotOwnPit { player } => write!(f, "not a pit of {player}"),
            IllegalMoveReason::EmptyPit => write!(f, "pit is empty"),
        }
    }
}

/// A move that failed the legality check. State is never modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("illegal move from pit {pit}: {reason}")]
pub struct IllegalMoveError {
    pub pit: usize,
    pub reason: IllegalMoveReason,
}

impl IllegalMoveError {
    #[must_use]
    pub fn new(pit: usize, reason: IllegalMoveReason) -> Self {
        Self { pit, reason }
    }
}

/// A board holding more seeds than the engine supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("board holds {total} seeds, more than the supported {max}", max = MAX_BOARD_SEEDS)]
pub struct InvalidBoard {
    pub total: u64,
}

/// Errors raised by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),

    #[error(transparent)]
    InvalidBoard(#[from] InvalidBoard),

    #[error("seed total changed during sow: expected {expected}, found {actual}")]
    InvariantViolation { expected: u32, actual: u32 },

    #[error("cannot {action} while {phase}")]
    InvalidTransition { phase: Phase, action: PhaseAction },
}

/// Errors that can occur when validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),

    #[error("saved state rejected: {0}")]
    InvalidState(#[from] InvalidBoard),
}

/// Errors from the binary state codec.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode game state: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode game state: {0}")]
    Decode(#[source] bincode::Error),
}

//! # congklak-engine
//!
//! A deterministic engine for Congklak, the Indonesian Mancala variant played
//! on a 12-slot ring (two stores, five pits per player, seven seeds per pit).
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every rule is a function from a [`GameState`]
//!    to a new `GameState`. Illegal moves leave the input untouched.
//!
//! 2. **No timing in the engine**: a sow returns one snapshot per seed.
//!    Callers animate at their own pace, or not at all.
//!
//! 3. **Plain data**: `GameState` is a small `Copy` value with `serde`
//!    support, so hosts can layer save/load on top.
//!
//! ## Modules
//!
//! - `core`: Players, board, state, configuration, move records
//! - `rules`: Sowing, turn resolution, mission, phase transitions, engine
//! - `session`: One mutable game with playback gating and history
//! - `error`: Structured error types
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, CongklakConfig, GameState, LastMove, MissionConfig, MissionRule, MoveRecord, Phase,
    Player, PIT_COUNT, PLAYER_ONE_STORE, PLAYER_TWO_STORE,
};

pub use crate::error::{
    ConfigError, EngineError, IllegalMoveError, IllegalMoveReason, InvalidBoard, SnapshotError,
};

pub use crate::rules::{
    apply_move, evaluate_mission, is_legal_move, legal_moves, reset_game, BoardSnapshot,
    LegalMoves, MancalaEngine, MoveResult, PhaseAction,
};

pub use crate::session::{GameSession, Playback};

//! Core game types: players, board, state, configuration, move records.
//!
//! These are plain values with no behavior beyond accessors. The rules that
//! move seeds around live in [`crate::rules`].

pub mod player;
pub mod board;
pub mod config;
pub mod action;
pub mod state;

pub use player::{InvalidPlayer, Player};
pub use board::{Board, PIT_COUNT, PLAYER_ONE_STORE, PLAYER_TWO_STORE, INITIAL_SEEDS_PER_PIT, MAX_BOARD_SEEDS, STANDARD_TOTAL_SEEDS};
pub use config::{CongklakConfig, MissionConfig, MissionRule};
pub use action::MoveRecord;
pub use state::{GameState, LastMove, Phase};

//! Game rules.
//!
//! - `sowing`: seed distribution with opponent-store skip
//! - `turn`: extra-turn resolution
//! - `mission`: scripted objective evaluation
//! - `phase`: dialog-driven phase transitions
//! - `engine`: the public move/reset/mission contract

pub mod sowing;
pub mod turn;
pub mod mission;
pub mod phase;
pub mod engine;

pub use sowing::{sow, BoardSnapshot, Sow};
pub use turn::{resolve_turn, TurnOutcome};
pub use phase::{transition, PhaseAction};
pub use engine::{
    apply_move, check_move, evaluate_mission, is_legal_move, legal_moves, reset_game,
    LegalMoves, MancalaEngine, MoveResult,
};

//! The Mancala engine: move legality, move application, reset and mission
//! evaluation.
//!
//! All operations are pure: they read a [`GameState`] and return a new one.
//! [`MancalaEngine`] carries the configuration. The free functions use the
//! standard configuration.
//!
//! ## Implementation Notes
//!
//! - `apply_move` computes the whole sow at once; snapshots are returned for
//!   the caller to animate and the engine never waits between them
//! - The engine has no notion of an in-flight playback; a session layers
//!   that gate on top (see [`crate::session::GameSession`])

use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use super::mission;
use super::phase::{self, PhaseAction};
use super::sowing::{self, BoardSnapshot};
use super::turn::resolve_turn;
use crate::core::{CongklakConfig, GameState, LastMove, Phase, Player};
use crate::error::{EngineError, IllegalMoveError, IllegalMoveReason};

/// Legal source pits. A player never has more than five.
pub type LegalMoves = SmallVec<[usize; 5]>;

/// Everything a caller needs after a successful move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// State after the move, turn resolved and mission checked.
    pub state: GameState,

    /// Player who made the move.
    pub mover: Player,

    /// Source pit.
    pub source: usize,

    /// Slot that received the last seed.
    pub last_index: usize,

    /// The mover keeps the turn.
    pub extra_turn: bool,

    /// The move completed the mission; `state.phase` is `MissionComplete`.
    pub mission_met: bool,

    /// One board per seed placed, in order.
    pub snapshots: Vec<BoardSnapshot>,
}

/// Check a move, reporting why it is illegal.
pub fn check_move(state: &GameState, pit: usize) -> Result<(), IllegalMoveError> {
    let reject = |reason| Err(IllegalMoveError::new(pit, reason));

    if !state.phase.accepts_moves() {
        return reject(IllegalMoveReason::NotPlaying(state.phase));
    }
    let player = state.current_player;
    if !player.owns_pit(pit) {
        if player.other().owns_pit(pit) {
            return reject(IllegalMoveReason::NotOwnPit { player });
        }
        return reject(IllegalMoveReason::OutOfRange);
    }
    if state.board[pit] == 0 {
        return reject(IllegalMoveReason::EmptyPit);
    }
    Ok(())
}

/// Check if the current player may sow from `pit`.
#[must_use]
pub fn is_legal_move(state: &GameState, pit: usize) -> bool {
    check_move(state, pit).is_ok()
}

/// All pits the current player may sow from, ascending.
#[must_use]
pub fn legal_moves(state: &GameState) -> LegalMoves {
    state
        .current_player
        .pits()
        .filter(|&pit| is_legal_move(state, pit))
        .collect()
}

/// Apply a move with the standard configuration.
pub fn apply_move(state: &GameState, pit: usize) -> Result<MoveResult, EngineError> {
    MancalaEngine::default().apply_move(state, pit)
}

/// The standard initial state.
#[must_use]
pub fn reset_game() -> GameState {
    GameState::initial()
}

/// Check the standard mission against the move that produced `state`.
#[must_use]
pub fn evaluate_mission(state: &GameState) -> bool {
    MancalaEngine::default().evaluate_mission(state)
}

/// Engine bound to a configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MancalaEngine {
    config: CongklakConfig,
}

impl MancalaEngine {
    /// Create an engine, validating the configuration.
    pub fn new(config: CongklakConfig) -> Result<Self, crate::error::ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &CongklakConfig {
        &self.config
    }

    /// See [`is_legal_move`].
    #[must_use]
    pub fn is_legal_move(&self, state: &GameState, pit: usize) -> bool {
        is_legal_move(state, pit)
    }

    /// See [`legal_moves`].
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> LegalMoves {
        legal_moves(state)
    }

    /// Sow from `pit`, resolve the turn and check the mission.
    ///
    /// `state` is never modified; on error nothing has changed.
    #[instrument(level = "debug", skip(self, state), fields(player = %state.current_player))]
    pub fn apply_move(&self, state: &GameState, pit: usize) -> Result<MoveResult, EngineError> {
        if let Err(err) = check_move(state, pit) {
            debug!(%err, "move rejected");
            return Err(err.into());
        }

        let mover = state.current_player;
        let sow = sowing::sow(&state.board, pit, mover)?;
        let turn = resolve_turn(mover, sow.last_index);

        let mut next = GameState {
            board: sow.board,
            current_player: turn.next_player,
            phase: state.phase,
            last_move: Some(LastMove {
                mover,
                source: pit,
                last_index: sow.last_index,
                board_before: state.board,
            }),
        };

        let mission_met = self.evaluate_mission(&next);
        if mission_met {
            next.phase = Phase::MissionComplete;
            info!(
                store = next.board.store(self.config.mission.target),
                "mission complete"
            );
        }

        debug!(
            seeds = sow.snapshots.len(),
            last_index = sow.last_index,
            extra_turn = turn.extra_turn,
            next = %turn.next_player,
            "move applied"
        );

        Ok(MoveResult {
            state: next,
            mover,
            source: pit,
            last_index: sow.last_index,
            extra_turn: turn.extra_turn,
            mission_met,
            snapshots: sow.snapshots,
        })
    }

    /// The configured initial state.
    #[must_use]
    pub fn reset_game(&self) -> GameState {
        GameState::from_config(&self.config)
    }

    /// Check the configured mission against the move that produced `state`.
    #[must_use]
    pub fn evaluate_mission(&self, state: &GameState) -> bool {
        mission::evaluate(&self.config.mission, state)
    }

    /// Seeds counted toward the mission by the last move, if it was made by
    /// the mission's target player.
    #[must_use]
    pub fn mission_progress(&self, state: &GameState) -> Option<u32> {
        mission::progress(&self.config.mission, state)
    }

    /// Apply a phase action. See [`phase::transition`].
    #[instrument(level = "debug", skip(self, state), fields(phase = %state.phase))]
    pub fn transition(&self, state: &GameState, action: PhaseAction) -> Result<GameState, EngineError> {
        let next = phase::transition(state, action, &self.config)?;
        if action.resets() {
            info!(%action, "game reset");
        } else {
            debug!(to = %next.phase, "phase changed");
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, MissionConfig, MissionRule};

    #[test]
    fn test_initial_legal_moves() {
        let state = reset_game();
        assert_eq!(legal_moves(&state).as_slice(), &[7, 8, 9, 10, 11]);

        let state = GameState::from_board(Board::initial(), Player::Two);
        assert_eq!(legal_moves(&state).as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_check_move_reasons() {
        let mut state = reset_game();
        state.board[9] = 0;

        assert_eq!(
            check_move(&state, 3).unwrap_err().reason,
            IllegalMoveReason::NotOwnPit { player: Player::One }
        );
        assert_eq!(check_move(&state, 6).unwrap_err().reason, IllegalMoveReason::OutOfRange);
        assert_eq!(check_move(&state, 0).unwrap_err().reason, IllegalMoveReason::OutOfRange);
        assert_eq!(check_move(&state, 12).unwrap_err().reason, IllegalMoveReason::OutOfRange);
        assert_eq!(check_move(&state, 9).unwrap_err().reason, IllegalMoveReason::EmptyPit);
        assert!(check_move(&state, 8).is_ok());

        let paused = state.with_phase(Phase::ShowingMission);
        assert_eq!(
            check_move(&paused, 8).unwrap_err().reason,
            IllegalMoveReason::NotPlaying(Phase::ShowingMission)
        );
    }

    #[test]
    fn test_apply_move_passes_turn() {
        let result = apply_move(&reset_game(), 7).unwrap();

        assert_eq!(result.state.board.pits(), &[0, 8, 8, 8, 7, 7, 0, 0, 8, 8, 8, 8]);
        assert_eq!(result.state.current_player, Player::Two);
        assert_eq!(result.last_index, 3);
        assert!(!result.extra_turn);
        assert!(!result.mission_met);
        assert_eq!(result.snapshots.len(), 7);
        assert_eq!(result.state.phase, Phase::Playing);
    }

    #[test]
    fn test_apply_move_extra_turn() {
        let result = apply_move(&reset_game(), 10).unwrap();

        assert_eq!(result.last_index, 6);
        assert!(result.extra_turn);
        assert_eq!(result.state.current_player, Player::One);
        assert_eq!(result.state.board.store(Player::One), 1);
    }

    #[test]
    fn test_player_two_extra_turn() {
        let state = GameState::from_board(Board::initial(), Player::Two);
        let result = apply_move(&state, 4).unwrap();

        assert_eq!(result.state.board.pits(), &[1, 7, 7, 7, 0, 8, 0, 8, 8, 8, 8, 8]);
        assert_eq!(result.last_index, 0);
        assert_eq!(result.state.current_player, Player::Two);
    }

    #[test]
    fn test_apply_move_records_last_move() {
        let before = reset_game();
        let result = apply_move(&before, 8).unwrap();
        let last = result.state.last_move.unwrap();

        assert_eq!(last.mover, Player::One);
        assert_eq!(last.source, 8);
        assert_eq!(last.last_index, 4);
        assert_eq!(last.board_before, before.board);
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let state = reset_game();
        let copy = state;

        let err = apply_move(&state, 2).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove(_)));
        assert_eq!(state, copy);
    }

    #[test]
    fn test_mission_after_extra_turn() {
        let first = apply_move(&reset_game(), 10).unwrap();
        assert!(!first.mission_met);

        let second = apply_move(&first.state, 11).unwrap();
        assert_eq!(second.state.board.pits(), &[0, 9, 9, 9, 9, 9, 2, 8, 8, 7, 0, 0]);
        assert!(second.mission_met);
        assert_eq!(second.state.phase, Phase::MissionComplete);
        assert_eq!(second.state.current_player, Player::Two);
        assert!(evaluate_mission(&second.state));

        // No further moves until reset.
        assert!(legal_moves(&second.state).is_empty());
    }

    #[test]
    fn test_delta_mission_engine() {
        let config = CongklakConfig::new()
            .with_mission(MissionConfig::default().with_rule(MissionRule::GainedAtLeast));
        let engine = MancalaEngine::new(config).unwrap();

        let mut state = reset_game();
        state.board = Board::from_pits([0, 7, 7, 7, 7, 7, 5, 7, 7, 7, 7, 2]);

        // Adds nothing to H2; the literal rule would fire, the delta rule does not.
        let result = engine.apply_move(&state, 11).unwrap();
        assert!(!result.mission_met);
        assert!(apply_move(&state, 11).unwrap().mission_met);
        assert_eq!(engine.mission_progress(&result.state), Some(0));
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        assert!(MancalaEngine::new(CongklakConfig::new().with_seeds_per_pit(0)).is_err());
    }

    #[test]
    fn test_engine_reset_uses_config() {
        let engine = MancalaEngine::new(CongklakConfig::new().with_seeds_per_pit(3)).unwrap();
        let state = engine.reset_game();
        assert_eq!(state.board.pits(), &[0, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3]);
    }
}

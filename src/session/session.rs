//! A single local play session.

use im::Vector;
use std::time::Duration;
use tracing::{debug, instrument};

use super::playback::Playback;
use crate::core::{Board, CongklakConfig, GameState, MoveRecord, Phase};
use crate::error::{ConfigError, EngineError, IllegalMoveError, IllegalMoveReason};
use crate::rules::{check_move, BoardSnapshot, LegalMoves, MancalaEngine, PhaseAction};

/// Owns the one mutable [`GameState`] of a session.
///
/// On top of the pure engine it adds:
/// - A playback gate: no move is accepted until the previous sow's frames
///   have been consumed (or skipped)
/// - Move history with turn/sequence numbering
/// - Phase actions that clear history on reset
///
/// ## Example
///
/// ```
/// use congklak_engine::session::GameSession;
///
/// let mut session = GameSession::default();
/// session.apply_move(10).unwrap();
///
/// // Animate at the suggested pace, or drain immediately.
/// while let Some(frame) = session.next_frame() {
///     let _ = (frame.pit, session.suggested_step_delay());
/// }
///
/// assert_eq!(session.state().board[6], 1);
/// assert!(session.is_legal_move(11));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: MancalaEngine,
    state: GameState,
    history: Vector<MoveRecord>,
    playback: Option<Playback>,
    turn_number: u32,
    sequence: u32,
}

impl GameSession {
    /// Start a session with a validated configuration.
    pub fn new(config: CongklakConfig) -> Result<Self, ConfigError> {
        let engine = MancalaEngine::new(config)?;
        let state = engine.reset_game();
        Ok(Self::with_engine(engine, state))
    }

    /// Resume a session from a saved state. History starts empty.
    ///
    /// Fails if the configuration is invalid or the state holds a board
    /// larger than the engine supports.
    pub fn resume(config: CongklakConfig, state: GameState) -> Result<Self, ConfigError> {
        let engine = MancalaEngine::new(config)?;
        state.validate()?;
        Ok(Self::with_engine(engine, state))
    }

    fn with_engine(engine: MancalaEngine, state: GameState) -> Self {
        Self {
            engine,
            state,
            history: Vector::new(),
            playback: None,
            turn_number: 1,
            sequence: 0,
        }
    }

    /// Committed game state. During playback this is already the post-move
    /// state; see [`GameSession::displayed_board`].
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the engine.
    #[must_use]
    pub fn engine(&self) -> &MancalaEngine {
        &self.engine
    }

    /// Moves made since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Current turn (starts at 1, advances when the turn passes).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Check if a sow is still being played back.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.playback.as_ref().is_some_and(|p| !p.is_finished())
    }

    /// Check if the mission has been completed.
    #[must_use]
    pub fn mission_complete(&self) -> bool {
        self.state.phase == Phase::MissionComplete
    }

    /// Check a move against the engine rules and the playback gate.
    pub fn check_move(&self, pit: usize) -> Result<(), IllegalMoveError> {
        if self.is_animating() {
            return Err(IllegalMoveError::new(pit, IllegalMoveReason::SowingInProgress));
        }
        check_move(&self.state, pit)
    }

    /// Check if `pit` can be selected right now.
    #[must_use]
    pub fn is_legal_move(&self, pit: usize) -> bool {
        self.check_move(pit).is_ok()
    }

    /// Pits to highlight for the current player. Empty during playback.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        if self.is_animating() {
            return LegalMoves::new();
        }
        self.engine.legal_moves(&self.state)
    }

    /// Sow from `pit` and start playing back its frames.
    ///
    /// The new state is committed immediately; playback only affects what
    /// [`GameSession::displayed_board`] returns.
    #[instrument(level = "debug", skip(self), fields(turn = self.turn_number))]
    pub fn apply_move(&mut self, pit: usize) -> Result<MoveRecord, EngineError> {
        self.check_move(pit)?;

        let origin = self.state.board;
        let result = self.engine.apply_move(&self.state, pit)?;

        let record = MoveRecord {
            player: result.mover,
            pit,
            last_index: result.last_index,
            extra_turn: result.extra_turn,
            turn: self.turn_number,
            sequence: self.sequence,
        };
        self.history.push_back(record);

        if result.extra_turn {
            self.sequence += 1;
        } else {
            self.turn_number += 1;
            self.sequence = 0;
        }

        self.state = result.state;
        self.playback = Some(Playback::new(
            origin,
            result.snapshots,
            self.engine.config().step_delay(),
        ));

        Ok(record)
    }

    /// Next frame of the current sow, or `None` once playback is done.
    pub fn next_frame(&mut self) -> Option<BoardSnapshot> {
        let frame = self.playback.as_mut()?.next();
        if frame.is_none() {
            self.playback = None;
        }
        frame
    }

    /// Drain the current playback, returning how many frames were skipped.
    pub fn finish_playback(&mut self) -> usize {
        let skipped = self.playback.take().map_or(0, |mut p| p.skip_to_end());
        if skipped > 0 {
            debug!(skipped, "playback skipped");
        }
        skipped
    }

    /// Board the presentation layer should draw now.
    #[must_use]
    pub fn displayed_board(&self) -> Board {
        self.playback
            .as_ref()
            .map_or(self.state.board, |p| p.current_board())
    }

    /// Suggested delay between playback frames.
    #[must_use]
    pub fn suggested_step_delay(&self) -> Duration {
        self.engine.config().step_delay()
    }

    /// Apply a phase action. Resetting actions also clear history and any
    /// playback in flight.
    pub fn perform(&mut self, action: PhaseAction) -> Result<(), EngineError> {
        self.state = self.engine.transition(&self.state, action)?;
        if action.resets() {
            self.clear();
        }
        Ok(())
    }

    /// Restart from the configured initial state.
    pub fn reset(&mut self) {
        self.state = self.engine.reset_game();
        self.clear();
        debug!("session reset");
    }

    fn clear(&mut self) {
        self.history = Vector::new();
        self.playback = None;
        self.turn_number = 1;
        self.sequence = 0;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        let engine = MancalaEngine::default();
        let state = engine.reset_game();
        Self::with_engine(engine, state)
    }
}

//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{board, CongklakConfig, GameState, MissionConfig, MissionRule, Player};
use crate::rules::PhaseAction;
use crate::session::GameSession;

/// A single seed placement, as seen by Python.
#[pyclass(name = "Frame")]
#[derive(Clone, Debug)]
pub struct PyFrame {
    #[pyo3(get)]
    step: usize,
    #[pyo3(get)]
    pit: usize,
    #[pyo3(get)]
    remaining: u32,
    #[pyo3(get)]
    board: Vec<u32>,
}

#[pymethods]
impl PyFrame {
    fn __repr__(&self) -> String {
        format!(
            "Frame(step={}, pit={}, remaining={})",
            self.step, self.pit, self.remaining
        )
    }
}

/// Python wrapper for GameSession.
///
/// A local two-player Congklak game.
#[pyclass(name = "Congklak")]
pub struct PyCongklak {
    session: GameSession,
}

fn parse_action(name: &str) -> PyResult<PhaseAction> {
    let action = match name {
        "request_retry" => PhaseAction::RequestRetry,
        "confirm_retry" => PhaseAction::ConfirmRetry,
        "request_exit" => PhaseAction::RequestExit,
        "confirm_exit" => PhaseAction::ConfirmExit,
        "show_mission" => PhaseAction::ShowMission,
        "cancel" => PhaseAction::Cancel,
        "next_mission" => PhaseAction::NextMission,
        "other_games" => PhaseAction::OtherGames,
        "reset" => PhaseAction::Reset,
        other => {
            return Err(PyValueError::new_err(format!("unknown action '{other}'")));
        }
    };
    Ok(action)
}

fn build_config(
    seeds_per_pit: u32,
    mission_threshold: u32,
    mission_delta: bool,
    step_delay_ms: u64,
) -> CongklakConfig {
    let rule = if mission_delta {
        MissionRule::GainedAtLeast
    } else {
        MissionRule::StoreAtLeast
    };
    CongklakConfig {
        seeds_per_pit,
        mission: MissionConfig::new(Player::One, mission_threshold).with_rule(rule),
        step_delay_ms,
    }
}

#[pymethods]
impl PyCongklak {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seeds_per_pit: Seeds in each sowing pit at start
    /// - mission_threshold: Seeds Player 1's store must reach
    /// - mission_delta: Count seeds added by the move instead of the store total
    /// - step_delay_ms: Suggested animation delay between seeds
    #[new]
    #[pyo3(signature = (
        seeds_per_pit = 7,
        mission_threshold = 2,
        mission_delta = false,
        step_delay_ms = 200
    ))]
    fn new(
        seeds_per_pit: u32,
        mission_threshold: u32,
        mission_delta: bool,
        step_delay_ms: u64,
    ) -> PyResult<Self> {
        let config = build_config(seeds_per_pit, mission_threshold, mission_delta, step_delay_ms);
        let session =
            GameSession::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { session })
    }

    /// Resume a game from a snapshot produced by `to_bytes`.
    ///
    /// Takes the same configuration arguments as the constructor. History
    /// starts empty. Raises ValueError on a corrupt or oversized snapshot.
    #[staticmethod]
    #[pyo3(signature = (
        data,
        seeds_per_pit = 7,
        mission_threshold = 2,
        mission_delta = false,
        step_delay_ms = 200
    ))]
    fn from_bytes(
        data: &[u8],
        seeds_per_pit: u32,
        mission_threshold: u32,
        mission_delta: bool,
        step_delay_ms: u64,
    ) -> PyResult<Self> {
        let state = GameState::from_bytes(data).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let config = build_config(seeds_per_pit, mission_threshold, mission_delta, step_delay_ms);
        let session = GameSession::resume(config, state)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { session })
    }

    /// Seed counts for all 12 slots.
    #[getter]
    fn board(&self) -> Vec<u32> {
        self.session.state().board.pits().to_vec()
    }

    /// Board to draw right now (follows playback).
    #[getter]
    fn displayed_board(&self) -> Vec<u32> {
        self.session.displayed_board().pits().to_vec()
    }

    /// Player to move (1 or 2).
    #[getter]
    fn current_player(&self) -> u8 {
        self.session.state().current_player.number()
    }

    /// Current phase name.
    #[getter]
    fn phase(&self) -> &'static str {
        self.session.state().phase.as_str()
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.session.turn_number()
    }

    #[getter]
    fn step_delay_ms(&self) -> u64 {
        self.session.engine().config().step_delay_ms
    }

    /// Pits the current player may sow from.
    fn legal_moves(&self) -> Vec<usize> {
        self.session.legal_moves().to_vec()
    }

    fn is_legal_move(&self, pit: usize) -> bool {
        self.session.is_legal_move(pit)
    }

    /// Sow from a pit. Raises ValueError on an illegal move.
    ///
    /// Returns True if the mover keeps the turn.
    fn apply_move(&mut self, pit: usize) -> PyResult<bool> {
        self.session
            .apply_move(pit)
            .map(|record| record.extra_turn)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Next playback frame, or None when the sow has been fully shown.
    fn next_frame(&mut self) -> Option<PyFrame> {
        self.session.next_frame().map(|frame| PyFrame {
            step: frame.step,
            pit: frame.pit,
            remaining: frame.remaining,
            board: frame.board.pits().to_vec(),
        })
    }

    /// Skip the rest of the current playback.
    fn finish_playback(&mut self) -> usize {
        self.session.finish_playback()
    }

    /// Apply a phase action by name, e.g. "request_retry" or "cancel".
    fn perform(&mut self, action: &str) -> PyResult<()> {
        let action = parse_action(action)?;
        self.session
            .perform(action)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn reset(&mut self) {
        self.session.reset();
    }

    #[getter]
    fn mission_complete(&self) -> bool {
        self.session.mission_complete()
    }

    /// Display label of a slot, e.g. "B1".
    #[staticmethod]
    fn label(pit: usize) -> Option<&'static str> {
        board::label(pit)
    }

    /// Serialized state snapshot. Load it with `Congklak.from_bytes`.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.session
            .state()
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "Congklak(turn={}, to_move=P{}, phase={})",
            self.session.turn_number(),
            state.current_player.number(),
            state.phase
        )
    }
}

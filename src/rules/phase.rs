//! Phase transitions driven by the surrounding dialogs.
//!
//! ```text
//!             RequestRetry / RequestExit / ShowMission
//!   Playing ─────────────────────────────────────────▶ (dialog phase)
//!      ▲                      Cancel                        │
//!      ├────────────────────────────────────────────────────┘
//!      │   ConfirmRetry / ConfirmExit            (reset)
//!      ├──────────────────────────────────────────────────
//!      │   NextMission / OtherGames from MissionComplete  (reset)
//!      └──────────────────────────────────────────────────
//! ```
//!
//! `MissionComplete` is entered by a move, never by an action here.

use serde::{Deserialize, Serialize};

use crate::core::{CongklakConfig, GameState, Phase};
use crate::error::EngineError;

/// A request from the presentation layer to change phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseAction {
    RequestRetry,
    ConfirmRetry,
    RequestExit,
    ConfirmExit,
    ShowMission,
    /// Dismiss a confirmation prompt or the mission panel.
    Cancel,
    /// Move on from a completed mission. Content selection is external.
    NextMission,
    OtherGames,
    /// Unconditional restart from any phase.
    Reset,
}

impl PhaseAction {
    /// Check if this action restarts the game.
    #[must_use]
    pub const fn resets(self) -> bool {
        matches!(
            self,
            PhaseAction::ConfirmRetry
                | PhaseAction::ConfirmExit
                | PhaseAction::NextMission
                | PhaseAction::OtherGames
                | PhaseAction::Reset
        )
    }
}

impl std::fmt::Display for PhaseAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhaseAction::RequestRetry => "request retry",
            PhaseAction::ConfirmRetry => "confirm retry",
            PhaseAction::RequestExit => "request exit",
            PhaseAction::ConfirmExit => "confirm exit",
            PhaseAction::ShowMission => "show mission",
            PhaseAction::Cancel => "cancel",
            PhaseAction::NextMission => "start next mission",
            PhaseAction::OtherGames => "switch games",
            PhaseAction::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// Apply `action` to `state`.
///
/// Resetting actions return the configured initial state. Any action not
/// allowed from the current phase fails with
/// [`EngineError::InvalidTransition`].
pub fn transition(
    state: &GameState,
    action: PhaseAction,
    config: &CongklakConfig,
) -> Result<GameState, EngineError> {
    use Phase::*;
    use PhaseAction::*;

    let allowed = match (state.phase, action) {
        (_, Reset) => true,
        (Playing, RequestRetry | RequestExit | ShowMission) => true,
        (AwaitingRetryConfirmation, ConfirmRetry | Cancel) => true,
        (AwaitingExitConfirmation, ConfirmExit | Cancel) => true,
        (ShowingMission, Cancel) => true,
        (MissionComplete, NextMission | OtherGames) => true,
        _ => false,
    };
    if !allowed {
        return Err(EngineError::InvalidTransition {
            phase: state.phase,
            action,
        });
    }

    if action.resets() {
        return Ok(GameState::from_config(config));
    }

    let phase = match action {
        RequestRetry => AwaitingRetryConfirmation,
        RequestExit => AwaitingExitConfirmation,
        ShowMission => ShowingMission,
        _ => Playing,
    };
    Ok(state.with_phase(phase))
}

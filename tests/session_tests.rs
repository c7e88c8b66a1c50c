//! Session integration tests: playback gating, dialogs, history and
//! seeded random playouts.

use congklak_engine::core::{GameState, Phase, Player};
use congklak_engine::rules::PhaseAction;
use congklak_engine::session::GameSession;
use congklak_engine::{
    CongklakConfig, EngineError, IllegalMoveError, IllegalMoveReason, MissionConfig,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn endless_config() -> CongklakConfig {
    CongklakConfig::new().with_mission(MissionConfig::new(Player::One, u32::MAX))
}

/// Play random legal moves, consuming every frame, and return the session.
fn random_playout(seed: u64, max_moves: usize) -> GameSession {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = GameSession::new(endless_config()).unwrap();

    for _ in 0..max_moves {
        let moves = session.legal_moves();
        let Some(&pit) = moves.choose(&mut rng) else {
            break;
        };
        session.apply_move(pit).unwrap();
        while session.next_frame().is_some() {}
    }
    session
}

// =============================================================================
// Playback
// =============================================================================

/// Frames replay the sow seed by seed and end on the committed board.
#[test]
fn test_frames_end_on_committed_board() {
    let mut session = GameSession::default();
    session.apply_move(8).unwrap();

    let mut last = None;
    let mut steps = Vec::new();
    while let Some(frame) = session.next_frame() {
        assert_eq!(session.displayed_board(), frame.board);
        steps.push(frame.step);
        last = Some(frame.board);
    }

    assert_eq!(steps, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(last, Some(session.state().board));
}

/// A second move is refused until the first playback is consumed.
#[test]
fn test_overlapping_moves_are_refused() {
    let mut session = GameSession::default();
    session.apply_move(10).unwrap();

    // Extra turn, but the sow is still on screen.
    assert_eq!(session.state().current_player, Player::One);
    assert_eq!(
        session.check_move(11),
        Err(IllegalMoveError::new(11, IllegalMoveReason::SowingInProgress))
    );
    let state_before = *session.state();
    assert!(session.apply_move(11).is_err());
    assert_eq!(session.state(), &state_before);

    session.finish_playback();
    assert!(session.apply_move(11).is_ok());
}

/// The suggested delay is advisory and comes from the configuration.
#[test]
fn test_step_delay_from_config() {
    let config = CongklakConfig::new().with_step_delay(std::time::Duration::from_millis(75));
    let session = GameSession::new(config).unwrap();
    assert_eq!(session.suggested_step_delay().as_millis(), 75);
    assert_eq!(GameSession::default().suggested_step_delay().as_millis(), 200);
}

// =============================================================================
// Dialogs and mission
// =============================================================================

/// Retry prompt: cancel keeps the game, confirm restarts it.
#[test]
fn test_retry_flow() {
    let mut session = GameSession::default();
    session.apply_move(7).unwrap();
    session.finish_playback();
    let mid_game = *session.state();

    session.perform(PhaseAction::RequestRetry).unwrap();
    assert_eq!(session.state().phase, Phase::AwaitingRetryConfirmation);
    assert!(!session.is_legal_move(1));

    session.perform(PhaseAction::Cancel).unwrap();
    assert_eq!(session.state(), &mid_game);
    assert_eq!(session.history().len(), 1);

    session.perform(PhaseAction::RequestRetry).unwrap();
    session.perform(PhaseAction::ConfirmRetry).unwrap();
    assert_eq!(session.state(), &GameState::initial());
    assert!(session.history().is_empty());
}

/// Exit prompt mirrors retry.
#[test]
fn test_exit_flow() {
    let mut session = GameSession::default();
    session.apply_move(9).unwrap();

    session.perform(PhaseAction::RequestExit).unwrap();
    assert_eq!(session.state().phase, Phase::AwaitingExitConfirmation);
    session.perform(PhaseAction::ConfirmExit).unwrap();

    assert_eq!(session.state(), &GameState::initial());
    assert!(!session.is_animating());
}

/// Completing the mission locks the board until the player moves on.
#[test]
fn test_mission_complete_flow() {
    let mut session = GameSession::default();
    session.apply_move(10).unwrap();
    session.finish_playback();
    session.apply_move(11).unwrap();
    session.finish_playback();

    assert!(session.mission_complete());
    assert!(session.legal_moves().is_empty());

    let err = session.perform(PhaseAction::RequestRetry).unwrap_err();
    assert!(matches!(err, EngineError::InvalidTransition { .. }));

    session.perform(PhaseAction::NextMission).unwrap();
    assert_eq!(session.state(), &GameState::initial());
    assert!(!session.mission_complete());
}

// =============================================================================
// Random playouts
// =============================================================================

/// Long random games conserve seeds and keep history consistent.
#[test]
fn test_random_playouts_conserve_seeds() {
    for seed in 0..50 {
        let session = random_playout(seed, 300);
        let state = session.state();

        assert_eq!(state.board.total(), 70, "seed {seed}");
        assert_eq!(state.phase, Phase::Playing);

        let mut turn = 1;
        for record in session.history() {
            assert_eq!(record.turn, turn, "seed {seed}");
            if !record.extra_turn {
                turn += 1;
            }
        }
        assert_eq!(session.turn_number(), turn);
    }
}

/// Same seed, same game.
#[test]
fn test_random_playouts_are_deterministic() {
    let a = random_playout(7, 120);
    let b = random_playout(7, 120);
    assert_eq!(a.state(), b.state());
    assert_eq!(a.history(), b.history());
}

/// Replaying a session's history from the opening reproduces its state.
#[test]
fn test_history_replays() {
    let played = random_playout(11, 80);

    let mut replay = GameSession::new(endless_config()).unwrap();
    for record in played.history() {
        assert_eq!(replay.state().current_player, record.player);
        replay.apply_move(record.pit).unwrap();
        replay.finish_playback();
    }
    assert_eq!(replay.state(), played.state());
}

/// Saved state survives a JSON round trip through the host.
#[test]
fn test_state_json_resume() {
    let played = random_playout(3, 25);
    let json = serde_json::to_string(played.state()).unwrap();

    let state: GameState = serde_json::from_str(&json).unwrap();
    let resumed = GameSession::resume(endless_config(), state).unwrap();
    assert_eq!(resumed.state(), played.state());
    assert_eq!(resumed.legal_moves(), played.legal_moves());
}

/// A binary snapshot taken mid-game resumes and the game carries on.
#[test]
fn test_binary_snapshot_resume_continues() {
    let mut played = GameSession::new(endless_config()).unwrap();
    played.apply_move(10).unwrap();
    let bytes = played.state().to_bytes().unwrap();

    let state = GameState::from_bytes(&bytes).unwrap();
    let mut resumed = GameSession::resume(endless_config(), state).unwrap();
    assert_eq!(resumed.state(), played.state());

    // Extra turn from B4 survives the round trip.
    assert_eq!(resumed.state().current_player, Player::One);
    let record = resumed.apply_move(7).unwrap();
    resumed.finish_playback();
    assert_eq!(record.player, Player::One);
    assert_eq!(resumed.state().current_player, Player::Two);
    assert_eq!(resumed.state().board.total(), 70);
    assert_eq!(resumed.history().len(), 1);
}

/// Corrupt snapshots are refused rather than resumed.
#[test]
fn test_corrupt_snapshot_is_refused() {
    let mut bytes = GameSession::default().state().to_bytes().unwrap();
    bytes[0..4].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(GameState::from_bytes(&bytes).is_err());
}

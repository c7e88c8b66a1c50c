//! Turn resolution after a sow.

use crate::core::Player;

/// Who moves next, and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub next_player: Player,
    /// The mover's last seed landed in their own store.
    pub extra_turn: bool,
}

/// Resolve the turn after `mover`'s last seed landed on `last_index`.
#[must_use]
pub fn resolve_turn(mover: Player, last_index: usize) -> TurnOutcome {
    let extra_turn = last_index == mover.store();
    TurnOutcome {
        next_player: if extra_turn { mover } else { mover.other() },
        extra_turn,
    }
}

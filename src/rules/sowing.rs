//! Seed distribution.
//!
//! Sowing empties the source pit and drops its seeds one at a time into the
//! following slots of the ring, never into the opponent's store. Every seed
//! placed produces a [`BoardSnapshot`] so a caller can step through the
//! distribution at its own pace.

use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use crate::core::board::{next_index, PIT_COUNT};
use crate::core::{Board, Player};
use crate::error::{EngineError, IllegalMoveError, IllegalMoveReason};

/// Board as it looked right after one seed was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// 1-based position of this seed in the sow.
    pub step: usize,

    /// Slot that received the seed.
    pub pit: usize,

    /// Seeds still to be placed after this one.
    pub remaining: u32,

    /// Full board after placing the seed.
    pub board: Board,
}

/// Result of sowing one pit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sow {
    /// Board after the last seed was placed.
    pub board: Board,

    /// Slot that received the last seed. Equals the source when it was empty.
    pub last_index: usize,

    /// One snapshot per seed, in placement order.
    pub snapshots: Vec<BoardSnapshot>,
}

impl Sow {
    /// Number of seeds that were sown.
    #[must_use]
    pub fn seeds(&self) -> usize {
        self.snapshots.len()
    }
}

/// Sow the seeds of `source` on behalf of `mover`.
///
/// Does not check move legality beyond the index being on the ring; see
/// [`crate::rules::check_move`]. Fails with [`EngineError::InvalidBoard`]
/// if `board` holds more than [`MAX_BOARD_SEEDS`](crate::core::MAX_BOARD_SEEDS) seeds, and with
/// [`EngineError::InvariantViolation`] if the seed total is not conserved.
/// `board` is never modified.
pub fn sow(board: &Board, source: usize, mover: Player) -> Result<Sow, EngineError> {
    if source >= PIT_COUNT {
        return Err(IllegalMoveError::new(source, IllegalMoveReason::OutOfRange).into());
    }
    board.validate()?;

    let skip = mover.opponent_store();
    let expected = board.total();

    let mut next = *board;
    let mut in_hand = next.take(source);
    let mut current = source;
    let mut snapshots = Vec::with_capacity(in_hand as usize);

    while in_hand > 0 {
        current = next_index(current);
        if current == skip {
            current = next_index(current);
        }
        next[current] += 1;
        in_hand -= 1;

        trace!(pit = current, remaining = in_hand, "seed placed");
        snapshots.push(BoardSnapshot {
            step: snapshots.len() + 1,
            pit: current,
            remaining: in_hand,
            board: next,
        });
    }

    let actual = next.total();
    if actual != expected {
        error!(expected, actual, source, "seed total not conserved");
        return Err(EngineError::InvariantViolation { expected, actual });
    }

    Ok(Sow {
        board: next,
        last_index: current,
        snapshots,
    })
}

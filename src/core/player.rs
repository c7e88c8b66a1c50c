//! Player identification and board ownership.
//!
//! ## Player
//!
//! Congklak is strictly two-player. Players are numbered `1` and `2` to match
//! the labels the surrounding application shows, and serialize as those
//! integers.
//!
//! Ownership on the ring:
//! - Player 1: store `H2` (index 6), pits `B1..B5` (indices 7..=11)
//! - Player 2: store `H1` (index 0), pits `A1..A5` (indices 1..=5)

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::board::{PLAYER_ONE_STORE, PLAYER_TWO_STORE};

/// Error returned when converting an integer that is not `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid player number {0} (expected 1 or 2)")]
pub struct InvalidPlayer(pub u8);

/// One of the two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    /// Bottom row, moves first.
    #[default]
    One,
    /// Top row.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The player's number (`1` or `2`).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index of this player's own store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::One => PLAYER_ONE_STORE,
            Player::Two => PLAYER_TWO_STORE,
        }
    }

    /// Index of the store this player must skip while sowing.
    #[must_use]
    pub const fn opponent_store(self) -> usize {
        self.other().store()
    }

    /// Indices of the five pits this player may sow from.
    #[must_use]
    pub const fn pits(self) -> RangeInclusive<usize> {
        match self {
            Player::One => 7..=11,
            Player::Two => 1..=5,
        }
    }

    /// Check if `pit` is one of this player's sowing pits.
    #[must_use]
    pub fn owns_pit(self, pit: usize) -> bool {
        self.pits().contains(&pit)
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayer;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(InvalidPlayer(other)),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

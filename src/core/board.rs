//! The 12-pit Congklak ring.
//!
//! Indices run counter-clockwise from Player 2's store:
//!
//! ```text
//!        A1  A2  A3  A4  A5
//!   H1 [ 1 | 2 | 3 | 4 | 5 ] H2
//!   0  [11 |10 | 9 | 8 | 7 ] 6
//!        B5  B4  B3  B2  B1
//! ```
//!
//! Sowing always advances to the next index modulo [`PIT_COUNT`].

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::Player;
use crate::error::InvalidBoard;

/// Number of slots on the ring, stores included.
pub const PIT_COUNT: usize = 12;

/// Player 2's store (`H1`).
pub const PLAYER_TWO_STORE: usize = 0;

/// Player 1's store (`H2`).
pub const PLAYER_ONE_STORE: usize = 6;

/// Seeds placed in every sowing pit at the start of a game.
pub const INITIAL_SEEDS_PER_PIT: u32 = 7;

/// Total seeds on a standard board.
pub const STANDARD_TOTAL_SEEDS: u32 = INITIAL_SEEDS_PER_PIT * 10;

/// Largest seed total a board may hold.
///
/// Every seed sown produces a snapshot, so this also bounds the size of a
/// single sow.
pub const MAX_BOARD_SEEDS: u32 = 100_000;

const LABELS: [&str; PIT_COUNT] = [
    "H1", "A1", "A2", "A3", "A4", "A5", "H2", "B1", "B2", "B3", "B4", "B5",
];

/// Index of the slot after `index` on the ring.
#[must_use]
pub const fn next_index(index: usize) -> usize {
    (index + 1) % PIT_COUNT
}

/// Check if `index` is one of the two stores.
#[must_use]
pub const fn is_store(index: usize) -> bool {
    index == PLAYER_ONE_STORE || index == PLAYER_TWO_STORE
}

/// The player owning `index` (its store or one of its pits).
///
/// Returns `None` for indices outside the ring.
#[must_use]
pub fn owner_of(index: usize) -> Option<Player> {
    match index {
        0..=5 => Some(Player::Two),
        6..=11 => Some(Player::One),
        _ => None,
    }
}

/// Display label of a slot (`H1`, `A1`..`A5`, `H2`, `B1`..`B5`).
#[must_use]
pub fn label(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}

/// Parse a display label back into its index. Case-insensitive.
#[must_use]
pub fn index_of_label(label: &str) -> Option<usize> {
    LABELS.iter().position(|l| l.eq_ignore_ascii_case(label.trim()))
}

/// Seed counts for every slot on the ring.
///
/// Deserialization rejects boards holding more than [`MAX_BOARD_SEEDS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u32; PIT_COUNT]", into = "[u32; PIT_COUNT]")]
pub struct Board {
    pits: [u32; PIT_COUNT],
}

impl Board {
    /// The standard starting board: seven seeds per pit, empty stores.
    #[must_use]
    pub fn initial() -> Self {
        Self::with_seeds_per_pit(INITIAL_SEEDS_PER_PIT)
    }

    /// A starting board with `seeds` in every sowing pit.
    #[must_use]
    pub fn with_seeds_per_pit(seeds: u32) -> Self {
        let mut pits = [seeds; PIT_COUNT];
        pits[PLAYER_ONE_STORE] = 0;
        pits[PLAYER_TWO_STORE] = 0;
        Self { pits }
    }

    /// Build a board from raw counts. Unchecked; see [`Board::validate`].
    #[must_use]
    pub const fn from_pits(pits: [u32; PIT_COUNT]) -> Self {
        Self { pits }
    }

    /// Raw counts, indexed by slot.
    #[must_use]
    pub const fn pits(&self) -> &[u32; PIT_COUNT] {
        &self.pits
    }

    /// Seeds in a slot, or `None` if `index` is off the ring.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.pits.get(index).copied()
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.pits[player.store()]
    }

    /// Seeds still in play on a player's side (stores excluded).
    #[must_use]
    pub fn row_total(&self, player: Player) -> u32 {
        self.pits[player.pits()]
            .iter()
            .fold(0, |acc: u32, &seeds| acc.saturating_add(seeds))
    }

    /// Total seeds on the board, stores included. Saturates at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.seed_count()).unwrap_or(u32::MAX)
    }

    /// Exact seed total, without overflow.
    #[must_use]
    pub fn seed_count(&self) -> u64 {
        self.pits.iter().map(|&seeds| u64::from(seeds)).sum()
    }

    /// Check the board holds at most [`MAX_BOARD_SEEDS`] seeds.
    pub fn validate(&self) -> Result<(), InvalidBoard> {
        let total = self.seed_count();
        if total > u64::from(MAX_BOARD_SEEDS) {
            return Err(InvalidBoard { total });
        }
        Ok(())
    }

    /// Iterate over `(index, seeds)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.pits.iter().copied().enumerate()
    }

    /// Empty a slot, returning how many seeds it held.
    pub(crate) fn take(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.pits[index])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl TryFrom<[u32; PIT_COUNT]> for Board {
    type Error = InvalidBoard;

    fn try_from(pits: [u32; PIT_COUNT]) -> Result<Self, Self::Error> {
        let board = Self { pits };
        board.validate()?;
        Ok(board)
    }
}

impl From<Board> for [u32; PIT_COUNT] {
    fn from(board: Board) -> Self {
        board.pits
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pits[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.pits[index]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let top: Vec<String> = (1..=5).map(|i| format!("{:>2}", self.pits[i])).collect();
        let bottom: Vec<String> = (7..=11).rev().map(|i| format!("{:>2}", self.pits[i])).collect();
        writeln!(f, "     [{}]", top.join(" "))?;
        writeln!(
            f,
            "{:>3}                  {:<3}",
            self.pits[PLAYER_TWO_STORE], self.pits[PLAYER_ONE_STORE]
        )?;
        write!(f, "     [{}]", bottom.join(" "))
    }
}

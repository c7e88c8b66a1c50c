//! Move history records.
//!
//! A move is identified solely by its source pit. `MoveRecord` adds the
//! metadata a session keeps for replay and display.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A recorded move with metadata for history tracking.
///
/// Used for:
/// - Move lists in the presentation layer
/// - Replaying a session from the initial state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who sowed.
    pub player: Player,

    /// Source pit.
    pub pit: usize,

    /// Slot that received the last seed.
    pub last_index: usize,

    /// Whether the mover kept the turn.
    pub extra_turn: bool,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord {
            player: Player::One,
            pit: 10,
            last_index: 6,
            extra_turn: true,
            turn: 1,
            sequence: 0,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
        assert!(json.contains("\"player\":1"));
    }
}

//! Step-through playback of a sow.
//!
//! A `Playback` hands out the snapshots of one move in order. The caller
//! decides the pace: wait [`Playback::step_delay`] between frames to animate,
//! or drain it at once.

use std::time::Duration;

use crate::core::Board;
use crate::rules::BoardSnapshot;

/// Iterator over the frames of one sow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playback {
    origin: Board,
    frames: Vec<BoardSnapshot>,
    cursor: usize,
    step_delay: Duration,
}

impl Playback {
    /// Create a playback starting from `origin`, the board before the move.
    #[must_use]
    pub fn new(origin: Board, frames: Vec<BoardSnapshot>, step_delay: Duration) -> Self {
        Self {
            origin,
            frames,
            cursor: 0,
            step_delay,
        }
    }

    /// Total frames, including those already yielded.
    #[must_use]
    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    /// Frames not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len() - self.cursor
    }

    /// Check if every frame has been yielded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    /// Suggested wait before showing the next frame.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Board to draw right now: the last yielded frame, or the origin if
    /// playback has not started.
    #[must_use]
    pub fn current_board(&self) -> Board {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.frames.get(i))
            .map_or(self.origin, |frame| frame.board)
    }

    /// Skip to the end, returning how many frames were skipped.
    pub fn skip_to_end(&mut self) -> usize {
        let skipped = self.remaining();
        self.cursor = self.frames.len();
        skipped
    }
}

impl Iterator for Playback {
    type Item = BoardSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frames.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Playback {}

//! Interactive session: the current cube, a queue of moves being played one
//! at a time, and an undo history.
//!
//! A queued formula plays back at whatever pace the caller steps it. While it
//! is running, direct moves are refused so user input cannot interleave with
//! the sequence; canceling drops the remaining moves but never half-applies
//! one.

use std::collections::VecDeque;

use thiserror::Error;

use crate::cube::CubeState;
use crate::engine::{apply_move, apply_moves};
use crate::moves::{parse_formula, Move};
use crate::scramble::Scrambler;

/// Maximum number of snapshots kept for undo.
pub const MAX_HISTORY: usize = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A queued sequence is still playing.
    #[error("a move sequence is still running")]
    Busy,
    /// The history is empty.
    #[error("nothing to undo")]
    NothingToUndo,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: CubeState,
    pending: VecDeque<Move>,
    history: VecDeque<CubeState>,
}

impl Session {
    /// Constructs a session with a solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the cube.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Returns whether a queued sequence is still playing.
    pub fn is_running(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Moves not yet played, in order.
    pub fn pending(&self) -> impl Iterator<Item = &Move> {
        self.pending.iter()
    }

    /// Number of snapshots that [`Session::undo`] can restore.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn commit(&mut self, new_state: CubeState) {
        let old_state = std::mem::replace(&mut self.state, new_state);
        if self.history.len() == MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(old_state);
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if self.is_running() {
            Err(SessionError::Busy)
        } else {
            Ok(())
        }
    }

    /// Applies a move immediately.
    pub fn apply(&mut self, mv: Move) -> Result<(), SessionError> {
        self.ensure_idle()?;
        let new_state = apply_move(&self.state, mv);
        self.commit(new_state);
        Ok(())
    }

    /// Queues the moves of a formula for playback, skipping anything that is
    /// not a move. Returns the number of moves queued.
    pub fn queue_formula(&mut self, formula: &str) -> Result<usize, SessionError> {
        self.queue(parse_formula(formula))
    }

    /// Queues moves for playback. Returns the number of moves queued.
    pub fn queue(&mut self, moves: impl IntoIterator<Item = Move>) -> Result<usize, SessionError> {
        self.ensure_idle()?;
        self.pending.extend(moves);
        log::info!("queued {} moves", self.pending.len());
        Ok(self.pending.len())
    }

    /// Plays the next queued move, if any, and returns it.
    pub fn step(&mut self) -> Option<Move> {
        let mv = self.pending.pop_front()?;
        let new_state = apply_move(&self.state, mv);
        self.commit(new_state);
        if self.pending.is_empty() {
            log::info!("sequence finished");
        }
        Some(mv)
    }

    /// Plays every queued move.
    pub fn finish(&mut self) {
        while self.step().is_some() {}
    }

    /// Drops the queued moves without touching the cube. Returns how many
    /// were dropped.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        if dropped > 0 {
            log::info!("canceled {dropped} queued moves");
        }
        dropped
    }

    /// Cancels any running sequence and returns to the solved cube.
    pub fn reset(&mut self) {
        self.cancel();
        self.commit(CubeState::solved());
    }

    /// Scrambles the cube from solved, returning the scramble.
    pub fn shuffle(&mut self, scrambler: &mut Scrambler) -> Result<Vec<Move>, SessionError> {
        self.ensure_idle()?;
        let moves = scrambler.next_scramble();
        let new_state = apply_moves(&CubeState::solved(), &moves);
        self.commit(new_state);
        Ok(moves)
    }

    /// Restores the state before the last change.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.state = self
            .history
            .pop_back()
            .ok_or(SessionError::NothingToUndo)?;
        Ok(())
    }
}

use crate::error::CubeError;
use crate::history::History;
use crate::moves::{Direction, Face, Move};
use crate::state::{CubeState, Grid};
use log::{debug, info};
use std::fmt;

/// A cube session: the sticker state plus the moves recorded against it. Stickers are only
/// ever changed by face turns; callers get shared references to the grids.
#[derive(Debug, Clone, Default)]
pub struct Cube {
    state: CubeState,
    history: History,
}

impl Cube {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn face(&self, face: Face) -> &Grid {
        self.state.face(face)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// A user-initiated turn, recorded in history.
    pub fn rotate_face(&mut self, face: Face, direction: Direction) {
        self.rotate(Move::new(face, direction), true);
    }

    /// Parses a move token such as `F` or `R'` and applies it as a recorded turn. Nothing
    /// changes if the token is invalid.
    pub fn apply_notation(&mut self, notation: &str) -> Result<Move, CubeError> {
        let mv: Move = notation.trim().parse()?;
        self.rotate(mv, true);
        Ok(mv)
    }

    pub(crate) fn rotate(&mut self, mv: Move, record: bool) {
        debug!("rotate {mv} (record: {record})");
        self.state.apply(mv);
        if record {
            self.history.push(mv);
        }
    }

    /// Pops the most recent move and applies its inverse without recording it.
    pub(crate) fn revert_last(&mut self) -> Option<Move> {
        let mv = self.history.last()?;
        self.rotate(mv.inverse(), false);
        self.history.pop();
        Some(mv)
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.history.clear();
        info!("cube reset");
    }

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.revert_last() {
            Some(mv) => {
                debug!("undid {mv}");
                true
            }
            None => {
                debug!("nothing to undo");
                false
            }
        }
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_turn_grows_history() {
        let mut cube = Cube::new();
        cube.rotate_face(Face::Front, Direction::Clockwise);
        assert_eq!(cube.history().moves(), &[Move::cw(Face::Front)]);
        assert!(!cube.is_solved());
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut cube = Cube::new();
        assert!(!cube.undo());
        assert!(cube.is_solved());
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut cube = Cube::new();
        cube.rotate_face(Face::Right, Direction::Clockwise);
        let before = cube.state().clone();
        cube.rotate_face(Face::Up, Direction::CounterClockwise);
        assert!(cube.undo());
        assert_eq!(cube.state(), &before);
        assert_eq!(cube.history().len(), 1);
    }

    #[test]
    fn invalid_notation_leaves_cube_untouched() {
        let mut cube = Cube::new();
        cube.rotate_face(Face::Left, Direction::Clockwise);
        let before = cube.state().clone();
        assert_eq!(cube.apply_notation("Q"), Err(CubeError::InvalidFace('Q')));
        assert!(cube.apply_notation("L2").is_err());
        assert_eq!(cube.state(), &before);
        assert_eq!(cube.history().len(), 1);
    }

    #[test]
    fn notation_applies_recorded_turn() {
        let mut cube = Cube::new();
        assert_eq!(cube.apply_notation(" D' "), Ok(Move::ccw(Face::Down)));
        assert_eq!(cube.history().notation_tail(18), "D'");
    }

    #[test]
    fn reset_clears_history() {
        let mut cube = Cube::new();
        cube.rotate_face(Face::Back, Direction::Clockwise);
        cube.reset();
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
    }
}

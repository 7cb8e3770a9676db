use crate::moves::Move;

/// Recorded moves since the last reset, oldest first.
///
/// The redo buffer is cleared whenever history changes but nothing ever fills it, so
/// `can_redo` stays false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<Move>,
    redo: Vec<Move>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move. Clears the redo buffer.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
        self.redo.clear();
    }

    pub fn pop(&mut self) -> Option<Move> {
        let mv = self.moves.pop();
        self.redo.clear();
        mv
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.redo.clear();
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Moves that undo the whole history: most recent first, each direction flipped.
    pub fn inverse_sequence(&self) -> Vec<Move> {
        self.moves.iter().rev().map(Move::inverse).collect()
    }

    /// The last `count` moves in canonical notation, separated by spaces.
    pub fn notation_tail(&self, count: usize) -> String {
        let start = self.moves.len().saturating_sub(count);
        self.moves[start..]
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

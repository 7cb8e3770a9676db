use crate::moves::{Direction, Face, Move, Sticker};
use crate::strip::{adjacent_strips, read_strip, write_strip, Strip};
use log::trace;
use std::fmt;

/// A face's 3x3 sticker grid, indexed `[row][col]`.
pub type Grid = [[Sticker; 3]; 3];

/// Sticker colours of all six faces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    faces: [Grid; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// A solved cube: every face filled with its own symbol.
    pub fn new() -> Self {
        Self {
            faces: Face::ALL.map(|face| [[face; 3]; 3]),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn face(&self, face: Face) -> &Grid {
        &self.faces[face.index()]
    }

    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.face(face).iter().flatten().all(|&sticker| sticker == face))
    }

    /// Number of stickers of each symbol, indexed by `Face::index`.
    pub fn sticker_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for sticker in self.faces.iter().flatten().flatten() {
            counts[sticker.index()] += 1;
        }
        counts
    }

    pub fn apply(&mut self, mv: Move) {
        self.rotate(mv.face, mv.direction);
    }

    /// Turns one face a quarter turn: the face's own grid rotates, then its four bordering
    /// strips shift one slot along the adjacency cycle.
    pub fn rotate(&mut self, face: Face, direction: Direction) {
        let grid = &mut self.faces[face.index()];
        *grid = rotate_grid(grid, direction);

        let slots = adjacent_strips(face);
        let mut strips: [Strip; 4] =
            slots.map(|(adj, selector)| read_strip(&self.faces[adj.index()], selector));
        trace!("{face} {direction:?} strips before: {strips:?}");

        match direction {
            Direction::Clockwise => strips.rotate_right(1),
            Direction::CounterClockwise => strips.rotate_left(1),
        }

        for ((adj, selector), strip) in slots.into_iter().zip(strips) {
            write_strip(&mut self.faces[adj.index()], selector, strip);
        }
    }
}

fn rotate_grid(grid: &Grid, direction: Direction) -> Grid {
    let mut rotated = *grid;
    for row in 0..3 {
        for col in 0..3 {
            rotated[row][col] = match direction {
                Direction::Clockwise => grid[2 - col][row],
                Direction::CounterClockwise => grid[col][2 - row],
            };
        }
    }
    rotated
}

/// Where each face sits in the unfolded net, in (grid row, grid column) blocks of three.
pub const NET_LAYOUT: [(Face, usize, usize); 6] = [
    (Face::Up, 0, 1),
    (Face::Left, 1, 0),
    (Face::Front, 1, 1),
    (Face::Right, 1, 2),
    (Face::Back, 1, 3),
    (Face::Down, 2, 1),
];

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = [[' '; 12]; 9];
        for (face, block_row, block_col) in NET_LAYOUT {
            for (row, stickers) in self.face(face).iter().enumerate() {
                for (col, sticker) in stickers.iter().enumerate() {
                    lines[block_row * 3 + row][block_col * 3 + col] = sticker.letter();
                }
            }
        }
        for line in lines {
            let line: String = line.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Face::*;

    #[test]
    fn new_state_is_solved() {
        let state = CubeState::new();
        assert!(state.is_solved());
        assert_eq!(state.sticker_counts(), [9; 6]);
        assert_eq!(state.face(Front), &[[Front; 3]; 3]);
    }

    #[test]
    fn clockwise_grid_reads_columns_bottom_to_top() {
        let grid = [
            [Up, Down, Front],
            [Back, Left, Right],
            [Front, Up, Down],
        ];
        let rotated = rotate_grid(&grid, Direction::Clockwise);
        assert_eq!(rotated[0], [Front, Back, Up]);
        assert_eq!(rotated[1], [Up, Left, Down]);
        assert_eq!(rotated[2], [Down, Right, Front]);
        assert_eq!(rotate_grid(&rotated, Direction::CounterClockwise), grid);
    }

    #[test]
    fn front_turn_moves_up_bottom_row_onto_right() {
        let mut state = CubeState::new();
        state.rotate(Front, Direction::Clockwise);
        assert_eq!(state.face(Up)[2], [Left; 3]);
        assert_eq!(read_strip(state.face(Right), crate::strip::Selector::LeftCol), [Up; 3]);
        assert_eq!(state.face(Down)[0], [Right; 3]);
        assert_eq!(read_strip(state.face(Left), crate::strip::Selector::RightCol), [Down; 3]);
        assert_eq!(state.face(Back), &[[Back; 3]; 3]);
    }

    #[test]
    fn reset_restores_solved() {
        let mut state = CubeState::new();
        state.rotate(Right, Direction::CounterClockwise);
        state.rotate(Down, Direction::Clockwise);
        assert!(!state.is_solved());
        state.reset();
        assert!(state.is_solved());
    }

    #[test]
    fn renders_unfolded_net() {
        let rendered = CubeState::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   UUU");
        assert_eq!(lines[4], "LLLFFFRRRBBB");
        assert_eq!(lines[8], "   DDD");
    }
}

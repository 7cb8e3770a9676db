use crate::moves::{Face, Sticker};
use crate::state::Grid;

/// Three border stickers of a face, in selector order.
pub type Strip = [Sticker; 3];

/// Which border of a face a strip is taken from.
///
/// The reversed column selectors walk rows 2, 1, 0. They are needed where the adjacent face
/// is mirrored relative to the turning face's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    TopRow,
    BottomRow,
    LeftCol,
    RightCol,
    LeftColReversed,
    RightColReversed,
}

impl Selector {
    /// Grid coordinates visited by this selector, in order.
    pub fn cells(&self) -> [(usize, usize); 3] {
        match self {
            Selector::TopRow => [(0, 0), (0, 1), (0, 2)],
            Selector::BottomRow => [(2, 0), (2, 1), (2, 2)],
            Selector::LeftCol => [(0, 0), (1, 0), (2, 0)],
            Selector::RightCol => [(0, 2), (1, 2), (2, 2)],
            Selector::LeftColReversed => [(2, 0), (1, 0), (0, 0)],
            Selector::RightColReversed => [(2, 2), (1, 2), (0, 2)],
        }
    }
}

pub fn read_strip(grid: &Grid, selector: Selector) -> Strip {
    selector.cells().map(|(row, col)| grid[row][col])
}

pub fn write_strip(grid: &mut Grid, selector: Selector, strip: Strip) {
    for ((row, col), sticker) in selector.cells().into_iter().zip(strip) {
        grid[row][col] = sticker;
    }
}

/// The four border strips touched by a turn of `face`, in cyclic order.
pub fn adjacent_strips(face: Face) -> [(Face, Selector); 4] {
    use Face::*;
    use Selector::*;

    match face {
        Up => [(Back, TopRow), (Right, TopRow), (Front, TopRow), (Left, TopRow)],
        Down => [
            (Front, BottomRow),
            (Right, BottomRow),
            (Back, BottomRow),
            (Left, BottomRow),
        ],
        Front => [(Up, BottomRow), (Right, LeftCol), (Down, TopRow), (Left, RightCol)],
        Back => [(Up, TopRow), (Left, LeftCol), (Down, BottomRow), (Right, RightCol)],
        Left => [
            (Up, LeftCol),
            (Front, LeftCol),
            (Down, LeftCol),
            (Back, RightColReversed),
        ],
        Right => [
            (Up, RightCol),
            (Back, LeftColReversed),
            (Down, RightCol),
            (Front, RightCol),
        ],
    }
}

use crate::error::CubeError;
use std::fmt;
use std::str::FromStr;

/// One of the six faces. Also used as the sticker symbol, since a sticker is only ever
/// identified by the face it belongs to when solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

pub type Sticker = Face;

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn letter(&self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Left => "Left",
            Face::Right => "Right",
        }
    }

    pub fn from_letter(letter: char) -> Result<Self, CubeError> {
        match letter {
            'U' => Ok(Face::Up),
            'D' => Ok(Face::Down),
            'F' => Ok(Face::Front),
            'B' => Ok(Face::Back),
            'L' => Ok(Face::Left),
            'R' => Ok(Face::Right),
            other => Err(CubeError::InvalidFace(other)),
        }
    }
}

impl TryFrom<char> for Face {
    type Error = CubeError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Face::from_letter(letter)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A single quarter turn of one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// Every face in both directions: the scrambler's move set.
    pub const ALL: [Move; 12] = [
        Move::cw(Face::Up),
        Move::cw(Face::Down),
        Move::cw(Face::Front),
        Move::cw(Face::Back),
        Move::cw(Face::Left),
        Move::cw(Face::Right),
        Move::ccw(Face::Up),
        Move::ccw(Face::Down),
        Move::ccw(Face::Front),
        Move::ccw(Face::Back),
        Move::ccw(Face::Left),
        Move::ccw(Face::Right),
    ];

    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    pub const fn cw(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    pub const fn ccw(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    pub fn inverse(&self) -> Self {
        Self::new(self.face, self.direction.opposite())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = match chars.next() {
            Some(letter) => Face::from_letter(letter)?,
            None => return Err(CubeError::InvalidMove(s.to_string())),
        };
        let direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" => Direction::CounterClockwise,
            _ => return Err(CubeError::InvalidMove(s.to_string())),
        };
        Ok(Move::new(face, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_uses_prime_for_counterclockwise() {
        assert_eq!(Move::cw(Face::Right).to_string(), "R");
        assert_eq!(Move::ccw(Face::Back).to_string(), "B'");
    }

    #[test]
    fn parses_every_move_in_the_move_set() {
        for mv in Move::ALL {
            assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
        }
    }

    #[test]
    fn rejects_unknown_face_letter() {
        assert!(matches!("X".parse::<Move>(), Err(CubeError::InvalidFace('X'))));
        assert!(matches!("u".parse::<Move>(), Err(CubeError::InvalidFace('u'))));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!("".parse::<Move>(), Err(CubeError::InvalidMove(_))));
        assert!(matches!("U2".parse::<Move>(), Err(CubeError::InvalidMove(_))));
        assert!(matches!("F''".parse::<Move>(), Err(CubeError::InvalidMove(_))));
    }

    #[test]
    fn inverse_flips_direction_only() {
        let mv = Move::cw(Face::Left);
        assert_eq!(mv.inverse(), Move::ccw(Face::Left));
        assert_eq!(mv.inverse().inverse(), mv);
    }
}

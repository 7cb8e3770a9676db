pub mod config;
pub mod cube;
pub mod error;
pub mod history;
pub mod moves;
pub mod scramble;
pub mod solver;
pub mod state;
pub mod strip;
pub mod terminal;

pub use cube::Cube;
pub use error::CubeError;
pub use history::History;
pub use moves::{Direction, Face, Move, Sticker};
pub use solver::SolveAnimation;
pub use state::{CubeState, Grid};

use crate::scramble::DEFAULT_SCRAMBLE_LENGTH;
use crate::solver::DEFAULT_SOLVE_SPEED;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Sticker-grid Rubik's cube in the terminal")]
pub struct Config {
    /// Number of random moves applied by a scramble
    #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
    pub scramble_length: usize,

    /// Moves per second while animating a solve
    #[arg(long, default_value_t = DEFAULT_SOLVE_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    pub solve_speed: u32,

    /// Seed for reproducible scrambles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scramble once, print the net and the solution, then exit
    #[arg(long)]
    pub plain: bool,
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

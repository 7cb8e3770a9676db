use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid face '{0}', expected one of U, D, F, B, L, R")]
    InvalidFace(char),
    #[error("Invalid move \"{0}\", expected a face letter optionally followed by '")]
    InvalidMove(String),
}

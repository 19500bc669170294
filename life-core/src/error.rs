use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("grid of size {width}x{height} has no cells")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid of size {width}x{height} is too large")]
    GridTooLarge { width: usize, height: usize },
    #[error("{name} must be positive")]
    ZeroInterval { name: &'static str },
    #[error("seed density {0} is not within [0, 1]")]
    InvalidDensity(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

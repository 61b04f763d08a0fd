use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid distance {0}: path-loss law requires distances > 0")]
    InvalidDistance(f64),

    #[error("Invalid {name}: must be at least 1, got {value}")]
    InvalidCount { name: &'static str, value: usize },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Reader at ({x:.2}, {y:.2}) outside room {width:.1} x {height:.1}")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SimError>;

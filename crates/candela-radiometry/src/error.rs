use thiserror::Error;

/// Errors produced by the radiometry operations.
#[derive(Error, Debug)]
pub enum RadiometryError {
    #[error("{name} must be positive and finite, got {value}")]
    Domain { name: &'static str, value: f64 },
    #[error("paired inputs differ in length: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },
}

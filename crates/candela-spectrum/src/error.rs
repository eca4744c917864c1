use candela_radiometry::RadiometryError;
use thiserror::Error;

/// Errors produced when constructing sampled spectra.
#[derive(Error, Debug)]
pub enum SpectrumError {
    #[error(transparent)]
    Radiometry(#[from] RadiometryError),
    #[error("wavelength range is empty: {min} to {max}")]
    EmptyRange { min: f64, max: f64 },
    #[error("wavelengths must be strictly ascending, violated at index {index}")]
    NotAscending { index: usize },
    #[error("at least two samples are required, got {len}")]
    TooFewSamples { len: usize },
    #[error("spectrum values must be finite and non-negative, got {value} at index {index}")]
    InvalidValue { index: usize, value: f64 },
}

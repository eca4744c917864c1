//! Spectral distributions built on the black-body radiometry kernel.

pub mod black_body;
pub use black_body::*;
pub mod constant;
pub use constant::*;
pub mod error;
pub use error::*;
pub mod measured;
pub use measured::*;
pub mod tabulated;
pub use tabulated::*;

/// A spectral distribution over wavelength.
pub trait Spectrum {
    /// Value of the distribution at `wavelength` (meters).
    fn eval(&self, wavelength: f64) -> f64;

    /// Upper bound of the distribution over all wavelengths.
    fn max_value(&self) -> f64;
}

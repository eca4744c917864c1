//! Black-body radiometry: Planck's law in wavelength and frequency form,
//! with strict domain validation and element-wise slice application.

pub mod constants;
pub use constants::*;
pub mod error;
pub use error::*;
pub mod planck;
pub use planck::*;

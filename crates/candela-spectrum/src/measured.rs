use candela_radiometry::RadiometryError;

use crate::{Spectrum, SpectrumError};

/// A spectrum defined by measured `(wavelength, value)` pairs on an
/// irregular grid, interpolated linearly between neighbours.
///
/// Outside the measured range the distribution is zero.
#[derive(Debug, Clone)]
pub struct MeasuredSpectrum {
    wavelengths: Vec<f64>,
    values: Vec<f64>,
    max_value: f64,
}

impl MeasuredSpectrum {
    /// Builds a spectrum from paired samples. Wavelengths must be strictly
    /// ascending, positive and finite; values must be finite and non-negative.
    pub fn from_points(wavelengths: Vec<f64>, values: Vec<f64>) -> Result<Self, SpectrumError> {
        if wavelengths.len() != values.len() {
            return Err(RadiometryError::ShapeMismatch {
                left: wavelengths.len(),
                right: values.len(),
            }
            .into());
        }
        if wavelengths.len() < 2 {
            return Err(SpectrumError::TooFewSamples {
                len: wavelengths.len(),
            });
        }
        for (i, &w) in wavelengths.iter().enumerate() {
            if !(w > 0.0 && w.is_finite()) {
                return Err(RadiometryError::Domain {
                    name: "wavelength",
                    value: w,
                }
                .into());
            }
            if i > 0 && w <= wavelengths[i - 1] {
                return Err(SpectrumError::NotAscending { index: i });
            }
        }
        for (i, &v) in values.iter().enumerate() {
            if !(v >= 0.0 && v.is_finite()) {
                return Err(SpectrumError::InvalidValue { index: i, value: v });
            }
        }

        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            wavelengths,
            values,
            max_value,
        })
    }
}

impl Spectrum for MeasuredSpectrum {
    fn eval(&self, wavelength: f64) -> f64 {
        let n = self.wavelengths.len();
        if !(wavelength >= self.wavelengths[0]) || wavelength > self.wavelengths[n - 1] {
            return 0.0;
        }
        if wavelength == self.wavelengths[n - 1] {
            return self.values[n - 1];
        }

        let hi = self.wavelengths.partition_point(|&w| w <= wavelength);
        let lo = hi - 1;
        let t = (wavelength - self.wavelengths[lo])
            / (self.wavelengths[hi] - self.wavelengths[lo]);
        self.values[lo] + (self.values[hi] - self.values[lo]) * t
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }
}

use candela_radiometry::RadiometryError;

use crate::{Spectrum, SpectrumError};

/// A spectrum sampled at a fixed wavelength step over `[lambda_min, lambda_max)`.
///
/// Evaluation returns the nearest stored sample; wavelengths more than half a
/// step outside the sampled range evaluate to 0.
#[derive(Debug, Clone)]
pub struct TabulatedSpectrum {
    lambda_min: f64,
    step: f64,
    samples: Vec<f64>,
    max_value: f64,
}

impl TabulatedSpectrum {
    /// Samples `spectrum` every `step` meters from `lambda_min` (inclusive)
    /// up to `lambda_max` (exclusive).
    pub fn tabulate(
        spectrum: &dyn Spectrum,
        lambda_min: f64,
        lambda_max: f64,
        step: f64,
    ) -> Result<Self, SpectrumError> {
        if !(lambda_min > 0.0 && lambda_min.is_finite()) {
            return Err(RadiometryError::Domain {
                name: "lambda_min",
                value: lambda_min,
            }
            .into());
        }
        if !(step > 0.0 && step.is_finite()) {
            return Err(RadiometryError::Domain {
                name: "step",
                value: step,
            }
            .into());
        }
        if !(lambda_max > lambda_min && lambda_max.is_finite()) {
            return Err(SpectrumError::EmptyRange {
                min: lambda_min,
                max: lambda_max,
            });
        }

        let count = ((lambda_max - lambda_min) / step).ceil() as usize;
        let samples: Vec<f64> = (0..count)
            .map(|i| spectrum.eval(lambda_min + i as f64 * step))
            .collect();
        let max_value = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        log::debug!(
            "Tabulated {} spectral samples over [{:.3e}, {:.3e}) m.",
            samples.len(),
            lambda_min,
            lambda_max
        );

        Ok(Self {
            lambda_min,
            step,
            samples,
            max_value,
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Spectrum for TabulatedSpectrum {
    fn eval(&self, wavelength: f64) -> f64 {
        let i = ((wavelength - self.lambda_min) / self.step).round();
        if i >= 0.0 && i < self.samples.len() as f64 {
            self.samples[i as usize]
        } else {
            0.0
        }
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }
}

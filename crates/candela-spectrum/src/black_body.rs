use candela_radiometry::{planck_wave, wien_peak, RadiometryError};

use crate::Spectrum;

/// Emission spectrum of a black body at a fixed temperature, normalized so
/// the Wien-peak value is 1.
///
/// Construction validates the temperature; evaluation is infallible, with
/// out-of-domain wavelengths contributing 0.
#[derive(Debug, Clone, Copy)]
pub struct BlackBodySpectrum {
    temperature: f64,
    normalization: f64,
}

impl BlackBodySpectrum {
    pub fn new(temperature: f64) -> Result<Self, RadiometryError> {
        let peak = wien_peak(temperature)?;
        let normalization = 1.0 / planck_wave(peak, temperature)?;

        Ok(Self {
            temperature,
            normalization,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl Spectrum for BlackBodySpectrum {
    fn eval(&self, wavelength: f64) -> f64 {
        planck_wave(wavelength, self.temperature).unwrap_or(0.0) * self.normalization
    }

    fn max_value(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_normalization() {
        let s = BlackBodySpectrum::new(5778.0).unwrap();
        let peak = wien_peak(5778.0).unwrap();

        assert_relative_eq!(s.eval(peak), 1.0, max_relative = 1e-12);
        assert_eq!(s.max_value(), 1.0);
        assert!(s.eval(500e-9) < 1.0);
        assert!(s.eval(1000e-9) < 1.0);
    }

    #[test]
    fn test_shape_around_peak() {
        let s = BlackBodySpectrum::new(5778.0).unwrap();
        // Rising below the peak, falling past it.
        assert!(s.eval(450e-9) < s.eval(500e-9));
        assert!(s.eval(1000e-9) < s.eval(600e-9));
    }

    #[test]
    fn test_out_of_domain_contributes_nothing() {
        let s = BlackBodySpectrum::new(3000.0).unwrap();
        assert_eq!(s.eval(0.0), 0.0);
        assert_eq!(s.eval(-1e-6), 0.0);
        assert_eq!(s.eval(f64::NAN), 0.0);
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        assert!(matches!(
            BlackBodySpectrum::new(0.0),
            Err(RadiometryError::Domain {
                name: "temperature",
                ..
            })
        ));
        assert!(matches!(
            BlackBodySpectrum::new(-100.0),
            Err(RadiometryError::Domain { .. })
        ));

        let s = BlackBodySpectrum::new(3000.0).unwrap();
        assert_eq!(s.temperature(), 3000.0);
    }
}

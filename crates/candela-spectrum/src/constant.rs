use crate::Spectrum;

/// Spectrum with the same value at every wavelength.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSpectrum {
    value: f64,
}

impl ConstantSpectrum {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Spectrum for ConstantSpectrum {
    fn eval(&self, _wavelength: f64) -> f64 {
        self.value
    }

    fn max_value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_everywhere() {
        let s = ConstantSpectrum::new(3.5);
        assert_eq!(s.eval(500e-9), 3.5);
        assert_eq!(s.eval(1.0), 3.5);
        assert_eq!(s.max_value(), 3.5);
    }
}

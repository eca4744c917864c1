use std::f64::consts::PI;

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::constants::{C, C1L, C2, H, KB, WIEN_B};
use crate::error::RadiometryError;

fn ensure_positive_finite(name: &'static str, value: f64) -> Result<(), RadiometryError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(RadiometryError::Domain { name, value })
    }
}

/// Spectral radiance per unit wavelength of a black body (W·sr⁻¹·m⁻³).
///
/// `wavelength` is in meters, `temperature` in kelvin; both must be positive
/// and finite. Deep in the Wien tail the radiance underflows to 0.0.
pub fn planck_wave(wavelength: f64, temperature: f64) -> Result<f64, RadiometryError> {
    ensure_positive_finite("wavelength", wavelength)?;
    ensure_positive_finite("temperature", temperature)?;

    let x = C2 / (wavelength * temperature);
    let radiance = C1L / (wavelength.powi(5) * x.exp_m1());

    // A NaN here is 0·∞ from past the ends of the f64 range, where the
    // curve has vanished.
    Ok(if radiance.is_nan() { 0.0 } else { radiance })
}

/// Spectral radiance per unit frequency of a black body (W·sr⁻¹·m⁻²·Hz⁻¹).
///
/// `frequency` is in hertz, `temperature` in kelvin; both must be positive
/// and finite.
pub fn planck_freq(frequency: f64, temperature: f64) -> Result<f64, RadiometryError> {
    ensure_positive_finite("frequency", frequency)?;
    ensure_positive_finite("temperature", temperature)?;

    let x = H * frequency / (KB * temperature);
    let radiance = (2.0 * H * frequency.powi(3)) / (C * C * x.exp_m1());

    Ok(if radiance.is_nan() { 0.0 } else { radiance })
}

/// Spectral radiant exitance per unit wavelength of a Lambertian black body
/// (W·m⁻³): π times the radiance, equal to c1/(λ⁵·expm1(c2/(λT))).
pub fn planck_wave_exitance(wavelength: f64, temperature: f64) -> Result<f64, RadiometryError> {
    Ok(PI * planck_wave(wavelength, temperature)?)
}

/// Spectral radiant exitance per unit frequency of a Lambertian black body
/// (W·m⁻²·Hz⁻¹).
pub fn planck_freq_exitance(frequency: f64, temperature: f64) -> Result<f64, RadiometryError> {
    Ok(PI * planck_freq(frequency, temperature)?)
}

/// Wavelength of peak black-body emission per Wien's displacement law (m).
pub fn wien_peak(temperature: f64) -> Result<f64, RadiometryError> {
    ensure_positive_finite("temperature", temperature)?;

    Ok(WIEN_B / temperature)
}

fn paired<F>(left: &[f64], right: &[f64], f: F) -> Result<Vec<f64>, RadiometryError>
where
    F: Fn(f64, f64) -> Result<f64, RadiometryError>,
{
    if left.len() != right.len() {
        return Err(RadiometryError::ShapeMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    left.iter().zip(right).map(|(&a, &b)| f(a, b)).collect()
}

fn par_paired<F>(left: &[f64], right: &[f64], f: F) -> Result<Vec<f64>, RadiometryError>
where
    F: Fn(f64, f64) -> Result<f64, RadiometryError> + Sync,
{
    if left.len() != right.len() {
        return Err(RadiometryError::ShapeMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    left.par_iter()
        .zip(right.par_iter())
        .map(|(&a, &b)| f(a, b))
        .collect()
}

/// Applies [`planck_wave`] to paired slices of wavelengths and temperatures.
///
/// The slices must have equal length; output preserves input order.
pub fn planck_wave_slice(
    wavelengths: &[f64],
    temperatures: &[f64],
) -> Result<Vec<f64>, RadiometryError> {
    paired(wavelengths, temperatures, planck_wave)
}

/// Parallel version of [`planck_wave_slice`]; returns identical output.
pub fn par_planck_wave_slice(
    wavelengths: &[f64],
    temperatures: &[f64],
) -> Result<Vec<f64>, RadiometryError> {
    par_paired(wavelengths, temperatures, planck_wave)
}

/// Applies [`planck_freq`] to paired slices of frequencies and temperatures.
///
/// The slices must have equal length; output preserves input order.
pub fn planck_freq_slice(
    frequencies: &[f64],
    temperatures: &[f64],
) -> Result<Vec<f64>, RadiometryError> {
    paired(frequencies, temperatures, planck_freq)
}

/// Parallel version of [`planck_freq_slice`]; returns identical output.
pub fn par_planck_freq_slice(
    frequencies: &[f64],
    temperatures: &[f64],
) -> Result<Vec<f64>, RadiometryError> {
    par_paired(frequencies, temperatures, planck_freq)
}

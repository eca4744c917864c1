use std::f64::consts::PI;

/// Speed of light (m/s)
pub const C: f64 = 299_792_458.0;

/// Planck's constant (J·s)
pub const H: f64 = 6.626_070_04e-34;

/// Boltzmann's constant (J/K)
pub const KB: f64 = 1.380_648_52e-23;

/// First radiation constant 2πhc² (W·m²)
pub const C1: f64 = 3.741_771_790_075_259e-16;

/// First radiation constant for spectral radiance c1/π = 2hc² (W·m²·sr⁻¹)
pub const C1L: f64 = C1 / PI;

/// Second radiation constant hc/k_B (m·K)
pub const C2: f64 = 1.438_777_353_827_72e-2;

/// Wien displacement constant (m·K)
pub const WIEN_B: f64 = 2.897_772_9e-3;

use crate::{FieldError, Result};

/// Symmetric logarithmic normalization around zero.
///
/// Magnitudes up to `linear_threshold` are mapped linearly; beyond it the
/// mapping grows with `log10`. `linear_scale` stretches the linear region
/// relative to one decade of the logarithmic part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymLogNorm {
    linear_threshold: f64,
    linear_scale: f64,
    linear_slope: f64,
}

impl SymLogNorm {
    const BASE: f64 = 10.0;

    pub fn new(linear_threshold: f64, linear_scale: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(linear_threshold) && valid(linear_scale)) {
            return Err(FieldError::InvalidNormalization {
                linear_threshold,
                linear_scale,
            });
        }
        Ok(Self {
            linear_threshold,
            linear_scale,
            linear_slope: linear_scale / (1.0 - Self::BASE.recip()),
        })
    }

    pub fn linear_threshold(&self) -> f64 {
        self.linear_threshold
    }

    pub fn linear_scale(&self) -> f64 {
        self.linear_scale
    }

    /// Odd, monotonic transform of a raw value.
    pub fn transform(&self, value: f64) -> f64 {
        let magnitude = value.abs();
        if magnitude <= self.linear_threshold {
            value * self.linear_slope
        } else {
            value.signum()
                * self.linear_threshold
                * (self.linear_slope + (magnitude / self.linear_threshold).log10())
        }
    }

    /// Map `value` in `[-scale, scale]` to `[0, 1]`, with zero at `0.5`.
    ///
    /// Values outside the range are clamped first and NaN maps to the
    /// center. `scale` must be positive and finite.
    pub fn normalize(&self, value: f64, scale: f64) -> f64 {
        if value.is_nan() {
            return 0.5;
        }
        let clamped = value.clamp(-scale, scale);
        let normalized = 0.5 + 0.5 * self.transform(clamped) / self.transform(scale);
        normalized.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm() -> SymLogNorm {
        SymLogNorm::new(8e4, 0.03).unwrap()
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(SymLogNorm::new(0.0, 0.03).is_err());
        assert!(SymLogNorm::new(8e4, -1.0).is_err());
        assert!(SymLogNorm::new(f64::NAN, 0.03).is_err());
        assert!(SymLogNorm::new(8e4, f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_is_centered() {
        assert_eq!(norm().normalize(0.0, 1e9), 0.5);
        assert_eq!(norm().normalize(0.0, 1.0), 0.5);
    }

    #[test]
    fn test_extremes() {
        let norm = norm();
        assert_eq!(norm.normalize(1e9, 1e9), 1.0);
        assert_eq!(norm.normalize(-1e9, 1e9), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let norm = norm();
        let scale = 3.6e9;
        for value in [1.0, 5e3, 8e4, 2.5e5, 7e7, 3.6e9] {
            let pos = norm.normalize(value, scale);
            let neg = norm.normalize(-value, scale);
            assert!((pos + neg - 1.0).abs() < 1e-12, "{value}: {pos} {neg}");
            assert_eq!(norm.transform(-value), -norm.transform(value));
        }
    }

    #[test]
    fn test_monotonic() {
        let norm = norm();
        let scale = 1e10;
        let mut previous = norm.normalize(-scale, scale);
        let mut value = -scale;
        while value < scale {
            value += scale / 500.0;
            let current = norm.normalize(value, scale);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_linear_region() {
        let norm = norm();
        let slope = 0.03 / 0.9;
        assert!((norm.transform(4e4) - 4e4 * slope).abs() < 1e-9);
        assert!((norm.transform(-8e4) + 8e4 * slope).abs() < 1e-9);

        // continuous at the threshold
        let below = norm.transform(8e4);
        let above = norm.transform(8e4 * (1.0 + 1e-12));
        assert!((above - below).abs() < 1e-6);
    }

    #[test]
    fn test_log_region() {
        let norm = norm();
        let one_decade = norm.transform(8e5) - norm.transform(8e4);
        let two_decades = norm.transform(8e6) - norm.transform(8e4);
        assert!((one_decade - 8e4).abs() < 1e-6);
        assert!((two_decades - 1.6e5).abs() < 1e-6);
    }

    #[test]
    fn test_scale_below_threshold_is_linear() {
        let norm = norm();
        assert!((norm.normalize(50.0, 100.0) - 0.75).abs() < 1e-12);
        assert!((norm.normalize(-25.0, 100.0) - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_clamping() {
        let norm = norm();
        assert_eq!(norm.normalize(5e9, 1e9), 1.0);
        assert_eq!(norm.normalize(-5e9, 1e9), 0.0);
        assert_eq!(norm.normalize(f64::INFINITY, 1e9), 1.0);
        assert_eq!(norm.normalize(f64::NAN, 1e9), 0.5);
    }
}

use crate::{internal_util::percentile, FieldError, Result};

/// Dense `height × width` grid of field values, stored row-major.
///
/// A field is a snapshot: it does not change when the model that produced it
/// is mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl Field {
    /// Wrap row-major `values` as a field.
    pub fn from_vec(width: usize, height: usize, values: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 || values.len() != width * height {
            return Err(FieldError::InvalidGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    pub(crate) fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.values[row * self.width + col])
        } else {
            None
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.width)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f64]> {
        self.values.chunks_exact_mut(self.width)
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// `max(|min|, |max|)`.
    pub fn max_magnitude(&self) -> f64 {
        self.min().abs().max(self.max().abs())
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Percentile (`p` in \[0, 100\]) of the absolute finite cell values.
    pub fn magnitude_percentile(&self, p: f64) -> f64 {
        let magnitudes = self
            .values
            .iter()
            .filter(|v| v.is_finite())
            .map(|v| v.abs())
            .collect::<Vec<_>>();
        percentile(&magnitudes, p).unwrap_or(0.0)
    }

    /// Elementwise sum with another field of the same shape.
    pub fn superpose(&self, other: &Self) -> Option<Self> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a + b)
            .collect();
        Some(Self {
            width: self.width,
            height: self.height,
            values,
        })
    }

    /// Largest elementwise absolute difference to a field of the same shape.
    pub fn max_abs_difference(&self, other: &Self) -> Option<f64> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        Some(
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }
}

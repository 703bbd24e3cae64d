use tracing::debug;

use crate::{Field, FieldError, Result};

mod colormap;
mod norm;
mod resample;

pub use colormap::DivergingColormap;
pub use norm::SymLogNorm;
pub use resample::{GaussianStrategy, ResampleMethod};

use resample::CellGrid;

/// How the symmetric color range `[-scale, scale]` is derived from a field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleStrategy {
    /// `max(|min|, |max|)` of the field.
    #[default]
    Extremum,
    /// The given percentile (0 to 100) of `|value|`, so the range stays
    /// centered on zero even when one sign dominates. Cells beyond it
    /// saturate.
    Percentile(f64),
}

/// Rendering constants, fixed when a [`FieldRenderer`] is built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderStrategy {
    /// Magnitude below which the color mapping is linear.
    pub linear_threshold: f64,
    /// Stretch of the linear region relative to one logarithmic decade.
    pub linear_scale: f64,
    pub scale: ScaleStrategy,
    pub colormap: DivergingColormap,
    pub resample: ResampleMethod,
}

impl RenderStrategy {
    pub const LINEAR_THRESHOLD: f64 = 8e4;
    pub const LINEAR_SCALE: f64 = 0.03;
}

impl Default for RenderStrategy {
    fn default() -> Self {
        Self {
            linear_threshold: Self::LINEAR_THRESHOLD,
            linear_scale: Self::LINEAR_SCALE,
            scale: ScaleStrategy::default(),
            colormap: DivergingColormap::default(),
            resample: ResampleMethod::default(),
        }
    }
}

/// 8-bit RGBA pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl RasterImage {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.bytes[i],
            self.bytes[i + 1],
            self.bytes[i + 2],
            self.bytes[i + 3],
        ])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Turns a [`Field`] into a color-mapped [`RasterImage`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldRenderer {
    strategy: RenderStrategy,
}

impl FieldRenderer {
    pub fn new(strategy: RenderStrategy) -> Result<Self> {
        SymLogNorm::new(strategy.linear_threshold, strategy.linear_scale)?;
        strategy.resample.validate()?;
        Ok(Self { strategy })
    }

    pub fn strategy(&self) -> &RenderStrategy {
        &self.strategy
    }

    /// Half-width of the symmetric color range for `field`. Never zero.
    pub fn scale_for(&self, field: &Field) -> f64 {
        let extremum = field
            .values()
            .iter()
            .filter(|v| v.is_finite())
            .fold(0.0, |acc: f64, v| acc.max(v.abs()));

        let scale = match self.strategy.scale {
            ScaleStrategy::Extremum => extremum,
            ScaleStrategy::Percentile(p) => {
                let scale = field.magnitude_percentile(p);
                if scale.is_finite() && scale > 0.0 {
                    scale
                } else {
                    extremum
                }
            }
        };

        if scale > 0.0 {
            scale
        } else {
            1.0
        }
    }

    /// Every cell mapped into `[0, 1]`, zero at `0.5`.
    pub fn normalized_field(&self, field: &Field) -> Result<Vec<f64>> {
        self.normalize(field).map(|(_, normalized)| normalized)
    }

    fn normalize(&self, field: &Field) -> Result<(f64, Vec<f64>)> {
        let norm = SymLogNorm::new(self.strategy.linear_threshold, self.strategy.linear_scale)?;
        let scale = self.scale_for(field);
        let normalized = field
            .values()
            .iter()
            .map(|&value| norm.normalize(value, scale))
            .collect();
        Ok((scale, normalized))
    }

    /// Render `field` to an `image_width × image_height` image.
    pub fn render(
        &self,
        field: &Field,
        image_width: usize,
        image_height: usize,
    ) -> Result<RasterImage> {
        if image_width == 0 || image_height == 0 {
            return Err(FieldError::InvalidDimensions {
                width: image_width,
                height: image_height,
            });
        }

        let (scale, normalized) = self.normalize(field)?;
        let cells = normalized
            .into_iter()
            .map(|t| self.strategy.colormap.color(t))
            .collect::<Vec<_>>();

        let grid = CellGrid {
            cells: &cells,
            width: field.width(),
            height: field.height(),
        };
        let bytes = grid.resample(image_width, image_height, &self.strategy.resample);

        debug!(
            scale,
            grid_width = field.width(),
            grid_height = field.height(),
            image_width,
            image_height,
            "field rendered"
        );

        Ok(RasterImage {
            width: image_width,
            height: image_height,
            bytes,
        })
    }
}

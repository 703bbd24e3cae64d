use crate::{
    internal_util::{lerp, to_channel},
    FieldError, Result,
};

/// Gaussian-weighted resampling, `sigma` measured in source cells.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianStrategy {
    pub sigma: f64,
}

impl GaussianStrategy {
    /// Smallest sigma whose kernel still reaches the neighboring cell
    /// centers.
    pub const MIN_SIGMA: f64 = 0.25;
}

impl Default for GaussianStrategy {
    fn default() -> Self {
        Self { sigma: 0.5 }
    }
}

/// How grid cells are upsampled to output pixels. Both methods are smooth;
/// nearest-neighbor is deliberately not offered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum ResampleMethod {
    Bilinear,
    Gaussian(GaussianStrategy),
}

impl Default for ResampleMethod {
    fn default() -> Self {
        ResampleMethod::Gaussian(GaussianStrategy::default())
    }
}

impl ResampleMethod {
    pub fn validate(&self) -> Result<()> {
        match self {
            ResampleMethod::Bilinear => Ok(()),
            ResampleMethod::Gaussian(strategy) => {
                if strategy.sigma.is_finite() && strategy.sigma >= GaussianStrategy::MIN_SIGMA {
                    Ok(())
                } else {
                    Err(FieldError::InvalidResample(format!(
                        "gaussian sigma must be finite and at least {}, got {}",
                        GaussianStrategy::MIN_SIGMA,
                        strategy.sigma
                    )))
                }
            }
        }
    }
}

/// A `width × height` grid of RGBA cells, row-major.
pub(crate) struct CellGrid<'a> {
    pub cells: &'a [[u8; 4]],
    pub width: usize,
    pub height: usize,
}

impl CellGrid<'_> {
    fn cell(&self, x: usize, y: usize) -> [f64; 4] {
        self.cells[y * self.width + x].map(f64::from)
    }

    /// Pixel-center aligned source coordinate of an output pixel, clamped to
    /// the cell centers.
    fn source_coord(dst: usize, dst_len: usize, src_len: usize) -> f64 {
        let coord = (dst as f64 + 0.5) * src_len as f64 / dst_len as f64 - 0.5;
        coord.clamp(0.0, (src_len - 1) as f64)
    }

    fn sample_bilinear(&self, x: f64, y: f64) -> [f64; 4] {
        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let (fx, fy) = (x - x0 as f64, y - y0 as f64);

        let (c00, c10) = (self.cell(x0, y0), self.cell(x1, y0));
        let (c01, c11) = (self.cell(x0, y1), self.cell(x1, y1));

        let mut out = [0.0; 4];
        for (i, channel) in out.iter_mut().enumerate() {
            let top = lerp(c00[i], c10[i], fx);
            let bottom = lerp(c01[i], c11[i], fx);
            *channel = lerp(top, bottom, fy);
        }
        out
    }

    fn sample_gaussian(&self, x: f64, y: f64, strategy: &GaussianStrategy) -> [f64; 4] {
        let reach = 3.0 * strategy.sigma;
        let x_min = (x - reach).floor().max(0.0) as usize;
        let x_max = ((x + reach).ceil() as usize).min(self.width - 1);
        let y_min = (y - reach).floor().max(0.0) as usize;
        let y_max = ((y + reach).ceil() as usize).min(self.height - 1);
        let denominator = 2.0 * strategy.sigma * strategy.sigma;

        let mut total = [0.0; 4];
        let mut total_weight = 0.0;
        for cy in y_min..=y_max {
            for cx in x_min..=x_max {
                let sqdist = (cx as f64 - x).powi(2) + (cy as f64 - y).powi(2);
                let weight = (-sqdist / denominator).exp();
                if weight == 0.0 {
                    continue;
                }
                let cell = self.cell(cx, cy);
                for (acc, value) in total.iter_mut().zip(cell) {
                    *acc += weight * value;
                }
                total_weight += weight;
            }
        }

        if total_weight == 0.0 {
            // every weight underflowed
            return self.sample_bilinear(x, y);
        }
        total.map(|v| v / total_weight)
    }

    /// Resample to `dst_width × dst_height` RGBA bytes.
    pub fn resample(&self, dst_width: usize, dst_height: usize, method: &ResampleMethod) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(dst_width * dst_height * 4);

        for oy in 0..dst_height {
            let y = Self::source_coord(oy, dst_height, self.height);
            for ox in 0..dst_width {
                let x = Self::source_coord(ox, dst_width, self.width);
                let rgba = match method {
                    ResampleMethod::Bilinear => self.sample_bilinear(x, y),
                    ResampleMethod::Gaussian(strategy) => self.sample_gaussian(x, y, strategy),
                };
                bytes.extend(rgba.map(to_channel));
            }
        }

        bytes
    }
}

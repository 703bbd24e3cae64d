//! Scalar field of point charges on a 2D grid, and its color-mapped raster.
//!
//! A [`FieldModel`] owns a set of [`Charge`]s and evaluates the superposed
//! inverse-square field over a fixed grid. A [`FieldRenderer`] turns the
//! resulting [`Field`] into an RGBA [`RasterImage`] using a symmetric
//! logarithmic color scale centered on zero.
//!
//! ```
//! use charge_field::{FieldModel, FieldParameters, FieldRenderer};
//!
//! let mut model = FieldModel::new(FieldParameters::default());
//! model.add_charge(20.0, 70.0, 0.04);
//! model.add_charge(70.0, 30.0, -0.04);
//!
//! let field = model.evaluate_field();
//! let image = FieldRenderer::default().render(&field, 500, 500).unwrap();
//! assert_eq!(image.as_bytes().len(), 500 * 500 * 4);
//! ```

mod error;
mod field;
mod internal_util;
mod model;
pub mod render;

pub use error::{FieldError, Result};
pub use field::Field;
pub use model::FieldModel;
pub use render::{FieldRenderer, RasterImage, RenderStrategy};

/// A point charge in grid space.
///
/// `x` runs along columns and `y` along rows of the sampled grid. The position
/// does not need to be integral or inside the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Charge {
    pub x: f64,
    pub y: f64,
    pub q: f64,
}

impl Charge {
    pub fn new(x: f64, y: f64, q: f64) -> Self {
        Self { x, y, q }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// The same charge with its sign flipped.
    pub fn with_opposite_polarity(&self) -> Self {
        Self { q: -self.q, ..*self }
    }
}

/// Grid size and physical constant of a field simulation.
///
/// Only [`FieldParameters::new`] and [`Default`] build one, so the grid is
/// never empty and the constant is always positive.
///
/// ```compile_fail
/// let params = charge_field::FieldParameters {
///     width: 0,
///     height: 10,
///     coulomb_constant: 1.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFieldParameters")
)]
pub struct FieldParameters {
    width: usize,
    height: usize,
    coulomb_constant: f64,
}

#[cfg(feature = "serialize")]
#[derive(serde::Deserialize)]
struct RawFieldParameters {
    width: usize,
    height: usize,
    coulomb_constant: f64,
}

#[cfg(feature = "serialize")]
impl TryFrom<RawFieldParameters> for FieldParameters {
    type Error = FieldError;

    fn try_from(raw: RawFieldParameters) -> Result<Self> {
        Self::new(raw.width, raw.height, raw.coulomb_constant)
    }
}

impl FieldParameters {
    pub const DEFAULT_WIDTH: usize = 100;
    pub const DEFAULT_HEIGHT: usize = 100;
    pub const COULOMB_CONSTANT: f64 = 8.99e9;

    pub fn new(width: usize, height: usize, coulomb_constant: f64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidGrid { width, height });
        }
        if !(coulomb_constant.is_finite() && coulomb_constant > 0.0) {
            return Err(FieldError::InvalidCoulombConstant(coulomb_constant));
        }
        Ok(Self {
            width,
            height,
            coulomb_constant,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn coulomb_constant(&self) -> f64 {
        self.coulomb_constant
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for FieldParameters {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            coulomb_constant: Self::COULOMB_CONSTANT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_validation() {
        assert!(FieldParameters::new(100, 100, 8.99e9).is_ok());
        assert_eq!(
            FieldParameters::new(0, 100, 8.99e9),
            Err(FieldError::InvalidGrid {
                width: 0,
                height: 100
            })
        );
        assert_eq!(
            FieldParameters::new(10, 0, 8.99e9),
            Err(FieldError::InvalidGrid {
                width: 10,
                height: 0
            })
        );
        assert!(matches!(
            FieldParameters::new(10, 10, 0.0),
            Err(FieldError::InvalidCoulombConstant(_))
        ));
        assert!(matches!(
            FieldParameters::new(10, 10, -1.0),
            Err(FieldError::InvalidCoulombConstant(_))
        ));
        assert!(matches!(
            FieldParameters::new(10, 10, f64::INFINITY),
            Err(FieldError::InvalidCoulombConstant(_))
        ));
    }

    #[test]
    fn test_default_parameters() {
        let params = FieldParameters::default();
        assert_eq!(params.width(), 100);
        assert_eq!(params.height(), 100);
        assert_eq!(params.coulomb_constant(), 8.99e9);
        assert_eq!(params.cell_count(), 10_000);
    }

    #[test]
    fn test_opposite_polarity() {
        let charge = Charge::new(1.5, -2.0, 0.04);
        let flipped = charge.with_opposite_polarity();
        assert_eq!(flipped.position(), charge.position());
        assert_eq!(flipped.q, -0.04);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serialize_configuration() {
        let params = FieldParameters::new(64, 32, 1.0).unwrap();
        let bytes = serde_cbor::to_vec(&params).unwrap();
        let decoded: FieldParameters = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(decoded, params);

        #[derive(serde::Serialize)]
        struct Unchecked {
            width: usize,
            height: usize,
            coulomb_constant: f64,
        }
        for (width, height, coulomb_constant) in [(0, 10, 1.0), (10, 10, -1.0)] {
            let bytes = serde_cbor::to_vec(&Unchecked {
                width,
                height,
                coulomb_constant,
            })
            .unwrap();
            assert!(serde_cbor::from_slice::<FieldParameters>(&bytes).is_err());
        }

        let charges = vec![Charge::new(1.0, 2.0, 3.0), Charge::new(-1.0, 0.5, -3.0)];
        let bytes = serde_cbor::to_vec(&charges).unwrap();
        let decoded: Vec<Charge> = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(decoded, charges);
    }
}

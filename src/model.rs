use tracing::{debug, trace, warn};

use crate::{internal_util::square_distance, Charge, Field, FieldParameters};

/// A set of point charges sampled over a fixed grid.
///
/// Each model owns its charges; two models never share a charge set.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldModel {
    params: FieldParameters,
    charges: Vec<Charge>,
}

impl Default for FieldModel {
    /// Default parameters with a single positive charge at `(20, 70)`.
    fn default() -> Self {
        Self::with_charges(
            FieldParameters::default(),
            vec![Charge::new(20.0, 70.0, 0.04)],
        )
    }
}

impl Extend<Charge> for FieldModel {
    fn extend<I: IntoIterator<Item = Charge>>(&mut self, iter: I) {
        self.charges.extend(iter);
    }
}

impl FieldModel {
    pub fn new(params: FieldParameters) -> Self {
        Self::with_charges(params, Vec::new())
    }

    pub fn with_charges(params: FieldParameters, charges: Vec<Charge>) -> Self {
        Self { params, charges }
    }

    pub fn params(&self) -> &FieldParameters {
        &self.params
    }

    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    /// Append a charge. Positions outside the grid are allowed.
    pub fn add_charge(&mut self, x: f64, y: f64, q: f64) {
        trace!(x, y, q, "add charge");
        self.charges.push(Charge::new(x, y, q));
    }

    pub fn clear_charges(&mut self) {
        trace!(removed = self.charges.len(), "clear charges");
        self.charges.clear();
    }

    /// Superposed field value at an arbitrary grid-space point.
    ///
    /// A charge located exactly at `(x, y)` contributes nothing. A non-finite
    /// sum is reported as zero.
    pub fn evaluate_at(&self, x: f64, y: f64) -> f64 {
        let value = self.superpose_at((x, y));
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Sample the field at every cell; cell `(row, col)` is the point
    /// `(col, row)`.
    ///
    /// Contributions are summed in charge order, so reordering charges can
    /// change the last bits of a cell but not its analytic value.
    pub fn evaluate_field(&self) -> Field {
        let mut field = Field::zeros(self.params.width(), self.params.height());
        let mut neutralized = 0usize;

        for (row, values) in field.rows_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                let sum = self.superpose_at((col as f64, row as f64));
                *value = if sum.is_finite() {
                    sum
                } else {
                    neutralized += 1;
                    0.0
                };
            }
        }

        if neutralized > 0 {
            warn!(neutralized, "non-finite field cells replaced with zero");
        }
        debug!(
            width = self.params.width(),
            height = self.params.height(),
            charges = self.charges.len(),
            "field evaluated"
        );

        field
    }

    fn superpose_at(&self, point: (f64, f64)) -> f64 {
        self.charges
            .iter()
            .filter_map(|charge| {
                let sqdist = square_distance(&charge.position(), &point);
                if sqdist == 0.0 {
                    None
                } else {
                    Some(self.params.coulomb_constant() * charge.q / sqdist)
                }
            })
            .fold(0.0, |acc, contribution| acc + contribution)
    }
}

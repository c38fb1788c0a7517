use crate::domain::model::{ValueRange, Vector};
use itertools::structs::MultiProduct;
use itertools::Itertools;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

/// Lazy Cartesian power of a [`ValueRange`], in odometer order: the last
/// position varies fastest.
pub struct CartesianPower {
    product: MultiProduct<RangeInclusive<i64>>,
}

impl Iterator for CartesianPower {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        self.product.next().map(Vector::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.product.size_hint()
    }
}

/// Every `arity`-tuple drawn from `range`, each exactly once. An empty range yields nothing.
pub fn generate(range: ValueRange, arity: NonZeroUsize) -> CartesianPower {
    let product = (0..arity.get())
        .map(|_| range.values())
        .multi_cartesian_product();
    CartesianPower { product }
}

/// `|range|^arity`, or `None` when that does not fit in a `u64`.
pub fn expected_count(range: ValueRange, arity: NonZeroUsize) -> Option<u64> {
    let exponent = u32::try_from(arity.get()).ok()?;
    range.len().checked_pow(exponent)
}

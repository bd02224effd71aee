use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// re-export so downstream crates name one Ulid type
pub use ulid::Ulid;

///
/// Float64
///
/// Total-order wrapper for `f64` literals and field values.
/// Ordering and equality use `f64::total_cmp`, so `NaN` values are
/// ordered deterministically instead of poisoning comparisons.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Serialize)]
pub struct Float64(f64);

impl Float64 {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Float64 {}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Float64> for f64 {
    fn from(value: Float64) -> Self {
        value.0
    }
}

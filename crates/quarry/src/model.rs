use crate::key::ModelKey;
use quarry_core::{expr::Row, shape::Shaped};

///
/// Model
///
/// A persistable entity: shaped (so predicates can be validated and
/// rewritten against it), row-readable (so predicates can be evaluated
/// against it), and keyed.
///
/// Identity is the key alone; two models with equal keys name the same
/// stored row regardless of their other fields.
///

pub trait Model: Shaped + Row + Clone {
    type Key: ModelKey;

    fn key(&self) -> Self::Key;

    /// Replace the key, e.g. after the backend generated one.
    fn set_key(&mut self, key: Self::Key);

    /// Key-based identity, mirroring how the stored keyspace compares rows.
    fn key_eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

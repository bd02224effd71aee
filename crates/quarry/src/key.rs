use rand::Rng;
use std::fmt::Debug;
use ulid::Ulid;

///
/// ModelKey
///
/// Primary-key capability for model types: a key knows whether it is
/// missing (unassigned) and how to generate a fresh random value.
/// Composite keys are plain tuples; a tuple is missing when any part is.
///
/// Zero, the empty string, and the nil ULID are the missing sentinels, so
/// `generate` never returns them.
///

pub trait ModelKey: Clone + Debug + Eq + Ord {
    /// Whether this key still holds its unassigned sentinel.
    fn is_missing(&self) -> bool;

    /// Generate a random, non-missing key value.
    fn generate() -> Self;
}

macro_rules! impl_model_key_int {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl ModelKey for $ty {
                fn is_missing(&self) -> bool {
                    *self == 0
                }

                fn generate() -> Self {
                    rand::thread_rng().gen_range(1..Self::MAX)
                }
            }
        )*
    };
}

impl_model_key_int!(i32, i64, u32, u64);

impl ModelKey for String {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }

    fn generate() -> Self {
        Ulid::new().to_string()
    }
}

impl ModelKey for Ulid {
    fn is_missing(&self) -> bool {
        self.is_nil()
    }

    fn generate() -> Self {
        Self::new()
    }
}

impl<K1: ModelKey, K2: ModelKey> ModelKey for (K1, K2) {
    fn is_missing(&self) -> bool {
        self.0.is_missing() || self.1.is_missing()
    }

    fn generate() -> Self {
        (K1::generate(), K2::generate())
    }
}

impl<K1: ModelKey, K2: ModelKey, K3: ModelKey> ModelKey for (K1, K2, K3) {
    fn is_missing(&self) -> bool {
        self.0.is_missing() || self.1.is_missing() || self.2.is_missing()
    }

    fn generate() -> Self {
        (K1::generate(), K2::generate(), K3::generate())
    }
}

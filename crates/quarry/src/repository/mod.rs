mod memory;

pub use memory::MemoryRepository;

use crate::model::Model;
use quarry_core::expr::{Predicate, ValidateError};
use thiserror::Error as ThisError;

///
/// RepositoryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RepositoryError {
    #[error("no row for key {key}")]
    NotFound { key: String },

    #[error("a row already exists for key {key}")]
    DuplicateKey { key: String },

    #[error("model carries a missing key")]
    KeyMissing,

    #[error("could not generate an unused key after {attempts} attempts")]
    KeyExhausted { attempts: u32 },

    #[error("{0}")]
    Validate(#[from] ValidateError),
}

impl RepositoryError {
    pub(crate) fn not_found(key: &impl std::fmt::Debug) -> Self {
        Self::NotFound {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn duplicate_key(key: &impl std::fmt::Debug) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }
}

///
/// Repository
///
/// CRUD surface over one model type. Writes take `&mut self`; callers
/// serialize shared access themselves. `query` validates the predicate
/// against the model's shape before any row is read, so a mistyped field
/// name is an error, not an empty result.
///

pub trait Repository<M: Model> {
    /// Insert a model. A missing key is assigned a generated one; a
    /// caller-supplied key that is already present is a duplicate, not an
    /// overwrite. Returns the stored model, key included.
    fn add(&mut self, model: M) -> Result<M, RepositoryError>;

    /// Replace the stored row with this model's key.
    fn update(&mut self, model: M) -> Result<M, RepositoryError>;

    /// Remove the row for `key`.
    fn delete(&mut self, key: &M::Key) -> Result<(), RepositoryError>;

    fn get(&self, key: &M::Key) -> Result<Option<M>, RepositoryError>;

    fn count(&self) -> Result<usize, RepositoryError>;

    fn all(&self) -> Result<Vec<M>, RepositoryError>;

    /// Rows matching a validated predicate.
    fn query(&self, predicate: &Predicate<M>) -> Result<Vec<M>, RepositoryError>;
}

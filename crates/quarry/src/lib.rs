//! Data-access layer for quarry: model and key traits, repository and
//! store wiring over the core predicate engine, options binding, sequence
//! helpers, and operation counters.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod iter;
pub mod key;
pub mod model;
pub mod obs;
pub mod options;
pub mod repository;
pub mod store;

// the core engine is re-exported wholesale
pub use quarry_core::{criteria, expr, shape, types, value};

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, backends, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{key::ModelKey, model::Model, repository::Repository, store::Store};
    pub use quarry_core::prelude::*;
}

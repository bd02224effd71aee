//! Core engine for quarry: the typed predicate-expression tree, the
//! shape-to-shape rewriter, the AND/OR combinator, the criteria
//! accumulator, and the row-level evaluator backends build on.
#![warn(unreachable_pub)]

mod macros;

// public exports are one module level down
pub mod criteria;
pub mod expr;
pub mod shape;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, builders, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        criteria::Criteria,
        expr::{Predicate, Row},
        shape::{FieldKind, Shaped, TypeModel},
        value::Value,
    };
}

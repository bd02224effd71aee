use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// Ops
///
/// Ephemeral, in-memory counters for repository operations. Counters are
/// process-local diagnostics, not persisted state; `reset` zeroes them.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Ops {
    // Repository entrypoints
    pub add_calls: u64,
    pub update_calls: u64,
    pub delete_calls: u64,
    pub get_calls: u64,
    pub query_calls: u64,

    // Rows touched
    pub rows_scanned: u64,
    pub rows_matched: u64,

    // Key generation
    pub keys_generated: u64,
}

thread_local! {
    static OPS: RefCell<Ops> = RefCell::new(Ops::default());
}

/// Apply a recording closure to the counters.
pub(crate) fn record(f: impl FnOnce(&mut Ops)) {
    OPS.with(|ops| f(&mut ops.borrow_mut()));
}

/// Copy of the current counters.
#[must_use]
pub fn snapshot() -> Ops {
    OPS.with(|ops| ops.borrow().clone())
}

/// Zero all counters.
pub fn reset() {
    OPS.with(|ops| *ops.borrow_mut() = Ops::default());
}

//! Binder identifiers used across the crate.
//!
//! Role
//! - Provide compact, globally unique identifiers for variable-introduction
//!   sites (lambda binders).
//! - Identifiers are drawn from a process-wide monotonic counter and never
//!   reused, which keeps scope resolution unambiguous without textual names.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BINDER: AtomicU64 = AtomicU64::new(0);

/// Identifier for a variable-introduction site.
///
/// Role
/// - Single-field newtype around `u64`; cheap to copy, compare, and hash.
/// - A freshly minted identifier is unique for the lifetime of the process.
///
/// Display
/// - Renders as `$<id>`. Human-friendly letters are assigned by the pretty
///   printer on first occurrence, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Binder(u64);

impl Binder {
    /// Mint a new identifier from the process-wide counter.
    ///
    /// The counter is atomic so independent builders on several threads stay
    /// sound, and it only moves forward: discarding an expression does not
    /// recycle the identifiers it contained.
    pub fn fresh() -> Self {
        Binder(NEXT_BINDER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw numeric id.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Binder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

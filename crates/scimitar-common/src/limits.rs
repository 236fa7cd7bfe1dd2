//! Centralized limits and thresholds for the binding generator.
//!
//! Host type systems hand us acyclic single-inheritance chains, but hierarchies
//! loaded from a manifest are only as good as the manifest. These bounds keep
//! every walk finite regardless of input.

/// Maximum number of ancestors visited during the factory default walk.
///
/// Real class hierarchies rarely exceed a dozen levels; anything deeper than
/// this is treated as malformed input and resolves to "no factory".
pub const MAX_HIERARCHY_DEPTH: usize = 256;

/// Pre-allocation hint for the per-walk visited set.
pub const VISITED_SET_CAPACITY: usize = 8;

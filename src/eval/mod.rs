//! Frame evaluation.

/// Per-scene evaluation inputs.
pub mod context;
/// Timeline-to-tree evaluator.
pub mod evaluator;

//! Range rendering: evaluation of frame ranges, fingerprints and static-frame elision.

/// Stable frame fingerprints.
pub mod fingerprint;
/// Sequential and parallel range rendering.
pub mod pipeline;

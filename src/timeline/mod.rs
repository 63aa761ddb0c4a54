//! Scene placement over time.

/// Timeline presets.
pub mod cut;
/// Sequences and timeline lookup/validation.
pub mod sequence;

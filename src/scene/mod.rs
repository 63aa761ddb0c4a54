//! Immutable visual trees handed to the rendering host.

/// Visual tree nodes and their builders.
pub mod node;
/// Layout and paint properties.
pub mod style;

//! Composition configuration: playback parameters, props and the composition root.

/// Externally supplied color props.
pub mod props;
/// Playback config and the [`video::LaunchVideo`] root.
pub mod video;

//! Static, read-only content tables and generators.

/// Generated card content for the scrolling wall.
pub mod cards;
/// Palettes, fonts, copy and export presets.
pub mod tables;

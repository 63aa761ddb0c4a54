//! Reusable visual components shared by several scenes.

/// Twitter/X-style social card.
pub mod social_card;

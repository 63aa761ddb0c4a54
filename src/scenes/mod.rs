//! The launch video's scenes.
//!
//! Each scene is a total, side-effect-free function of a [`SceneCtx`] returning a full-canvas
//! visual tree. [`SceneKind`] names them so timelines stay plain data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::eval::context::SceneCtx;
use crate::foundation::error::LaunchError;
use crate::scene::node::Node;

/// Social card reveal.
pub mod card_reveal;
/// Call to action.
pub mod cta;
/// Phone and desktop export mockups.
pub mod export_showcase;
/// Title card.
pub mod intro;
/// Endless wall of generated cards.
pub mod scrolling_cards;
/// Instagram, LinkedIn and Facebook feed mockups.
pub mod social_showcase;
/// Color, copy, font and preset transformations of one card.
pub mod transformations;

/// Reference to one scene function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// [`intro::intro`]
    Intro,
    /// [`card_reveal::card_reveal`]
    CardReveal,
    /// [`transformations::transformations`]
    Transformations,
    /// [`scrolling_cards::scrolling_cards`]
    ScrollingCards,
    /// [`social_showcase::social_showcase`]
    SocialShowcase,
    /// [`export_showcase::export_showcase`]
    ExportShowcase,
    /// [`cta::cta`]
    Cta,
}

impl SceneKind {
    /// Every scene, in declaration order.
    pub const ALL: [SceneKind; 7] = [
        SceneKind::Intro,
        SceneKind::CardReveal,
        SceneKind::Transformations,
        SceneKind::ScrollingCards,
        SceneKind::SocialShowcase,
        SceneKind::ExportShowcase,
        SceneKind::Cta,
    ];

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Intro => "intro",
            SceneKind::CardReveal => "card_reveal",
            SceneKind::Transformations => "transformations",
            SceneKind::ScrollingCards => "scrolling_cards",
            SceneKind::SocialShowcase => "social_showcase",
            SceneKind::ExportShowcase => "export_showcase",
            SceneKind::Cta => "cta",
        }
    }

    /// Evaluate the scene at `ctx.frame`.
    pub fn render(self, ctx: &SceneCtx<'_>) -> Node {
        match self {
            SceneKind::Intro => intro::intro(ctx),
            SceneKind::CardReveal => card_reveal::card_reveal(ctx),
            SceneKind::Transformations => transformations::transformations(ctx),
            SceneKind::ScrollingCards => scrolling_cards::scrolling_cards(ctx),
            SceneKind::SocialShowcase => social_showcase::social_showcase(ctx),
            SceneKind::ExportShowcase => export_showcase::export_showcase(ctx),
            SceneKind::Cta => cta::cta(ctx),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| LaunchError::validation(format!("unknown scene '{s}'")))
    }
}

/// Full-canvas stage every scene draws on, filled with the composition background.
pub(crate) fn stage(ctx: &SceneCtx<'_>) -> Node {
    Node::fill().background(ctx.props.background_color)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/mod.rs"]
mod tests;

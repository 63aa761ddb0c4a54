use crate::animation::cycle::{cycle, cycle_index};
use crate::content::tables::{BODIES, CardPalette, HEADLINES, PALETTES, placeholder_image_url};

/// Number of cards on the scrolling wall.
pub const WALL_CARD_COUNT: usize = 20;
/// Frames each placeholder image is shown before the wall swaps to the next variant.
pub const IMAGE_PERIOD_FRAMES: u64 = 60;
/// Distinct placeholder images cycled per card slot.
pub const IMAGE_VARIANTS: usize = 3;

/// Content of one generated wall card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallCard {
    /// 0-based card id.
    pub id: usize,
    /// Color scheme.
    pub palette: &'static CardPalette,
    /// Headline text.
    pub headline: &'static str,
    /// Body text.
    pub body: &'static str,
}

impl WallCard {
    /// Placeholder image reference for this card at scene-local `frame`.
    ///
    /// Each slot steps through [`IMAGE_VARIANTS`] image ids, one every
    /// [`IMAGE_PERIOD_FRAMES`]; variant 0 is `id + 1`.
    pub fn image_url(&self, frame: i64) -> String {
        let variant = cycle_index(frame, IMAGE_PERIOD_FRAMES, IMAGE_VARIANTS);
        placeholder_image_url(self.id + 1 + variant * WALL_CARD_COUNT)
    }
}

/// Generate the wall cards deterministically from the static tables.
pub fn wall_cards() -> Vec<WallCard> {
    (0..WALL_CARD_COUNT)
        .map(|id| {
            let slot = id as i64;
            WallCard {
                id,
                palette: cycle(slot, 1, &PALETTES),
                headline: *cycle(slot, 1, &HEADLINES),
                body: *cycle(slot, 1, &BODIES),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/content/cards.rs"]
mod tests;

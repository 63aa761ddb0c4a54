use crate::components::social_card::{SocialCardProps, social_card};
use crate::content::cards::{WallCard, wall_cards};
use crate::eval::context::SceneCtx;
use crate::scene::node::Node;

/// Cards per row.
pub const CARDS_PER_ROW: usize = 5;
/// Unscaled card width.
pub const CARD_WIDTH: f64 = 180.0;
/// Card scale on the wall.
pub const CARD_SCALE: f64 = 0.6;
/// Horizontal gap between cards.
pub const CARD_GAP: f64 = 16.0;
/// Scroll speed in pixels per frame.
pub const SPEED: f64 = 2.0;
/// Vertical distance between rows.
pub const ROW_SPACING: f64 = 200.0;
/// Top of the first row.
pub const FIRST_ROW_Y: f64 = 100.0;
/// Local frame from which the wall blurs behind an overlay.
pub const BLUR_FRAME: i64 = 120;
/// Blur radius once [`BLUR_FRAME`] is reached.
pub const BLUR_RADIUS: f64 = 8.0;
/// Times each row's cards are repeated to tile seamlessly.
pub const ROW_REPEATS: usize = 3;

/// Width of one period of a row: five scaled cards and their gaps.
pub const ROW_WIDTH: f64 = (CARD_WIDTH * CARD_SCALE + CARD_GAP) * CARDS_PER_ROW as f64;

/// Scroll direction of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves toward +x.
    Right,
    /// Content moves toward -x.
    Left,
}

impl ScrollDirection {
    /// Direction of row `index`; rows alternate starting with [`ScrollDirection::Right`].
    pub fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            ScrollDirection::Right
        } else {
            ScrollDirection::Left
        }
    }
}

/// Horizontal row offset at `frame`, wrapped into one row period.
///
/// For non-negative frames right rows move within `[0, row_width)` and left rows within
/// `(-row_width, 0]`. The offset is periodic in `row_width / speed` frames.
pub fn scroll_offset(frame: f64, speed: f64, row_width: f64, direction: ScrollDirection) -> f64 {
    if row_width.is_nan() || row_width <= 0.0 || !frame.is_finite() {
        return 0.0;
    }
    let travelled = frame * speed;
    match direction {
        ScrollDirection::Right => travelled % row_width,
        ScrollDirection::Left => -travelled % row_width,
    }
}

/// Four rows of generated cards scrolling in alternating directions, blurred from local
/// frame 120.
pub fn scrolling_cards(ctx: &SceneCtx<'_>) -> Node {
    let cards = wall_cards();
    let rows = cards
        .chunks(CARDS_PER_ROW)
        .enumerate()
        .map(|(i, row)| scrolling_row(ctx, i, row));

    let mut wall = super::stage(ctx).key("wall").clip().children(rows);
    if ctx.frame >= BLUR_FRAME {
        wall = wall.blur(BLUR_RADIUS);
    }
    wall
}

fn scrolling_row(ctx: &SceneCtx<'_>, index: usize, cards: &[WallCard]) -> Node {
    let direction = ScrollDirection::for_row(index);
    let offset = scroll_offset(ctx.t(), SPEED, ROW_WIDTH, direction);
    let tiles = (0..ROW_REPEATS)
        .flat_map(|_| cards.iter())
        .map(|card| wall_card(ctx, card));

    Node::row()
        .key(format!("row-{index}"))
        .absolute(FIRST_ROW_Y + ROW_SPACING * index as f64, -ROW_WIDTH)
        .width(ROW_WIDTH * ROW_REPEATS as f64)
        .gap(CARD_GAP)
        .translate(offset, 0.0)
        .children(tiles)
}

fn wall_card(ctx: &SceneCtx<'_>, card: &WallCard) -> Node {
    let palette = card.palette;
    let props = SocialCardProps {
        headline: card.headline.to_owned(),
        body: card.body.to_owned(),
        bg_color: palette.bg,
        name_color: palette.text,
        handle_color: palette.handle,
        headline_color: palette.text,
        body_color: palette.text,
        show_image: true,
        image_url: Some(card.image_url(ctx.frame)),
        width: CARD_WIDTH,
        scale: CARD_SCALE,
        ..SocialCardProps::default()
    };
    social_card(ctx, &props)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/scrolling_cards.rs"]
mod tests;

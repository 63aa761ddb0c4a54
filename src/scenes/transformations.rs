use crate::animation::cycle::cycle;
use crate::animation::interpolate::interpolate;
use crate::animation::spring::SpringConfig;
use crate::components::social_card::{SocialCardProps, social_card};
use crate::content::tables::{FONT_DM_SANS, FONTS, PRESETS, PlatformPreset, brand};
use crate::eval::context::SceneCtx;
use crate::foundation::color::Color;
use crate::scene::node::Node;
use crate::scene::style::Align;

/// First frame of the split into platform presets.
pub const SPLIT_FRAME: i64 = 120;
/// First frame the card shows its image.
pub const IMAGE_FRAME: i64 = 100;
/// Frames the background hue animates before turning black.
pub const HUE_FRAMES: i64 = 60;
/// Window during which the card font cycles.
pub const FONT_WINDOW: (i64, i64) = (60, 100);
/// Frames each font is shown while cycling.
pub const FONT_PERIOD: u64 = 10;
/// Per-preset entrance delay in frames.
pub const PRESET_STAGGER: f64 = 5.0;

const SPLIT_SPRING: SpringConfig = SpringConfig::new(15.0, 80.0);
const PRESET_SPRING: SpringConfig = SpringConfig::new(12.0, 100.0);
const PRESET_ROW_SCALE: f64 = 0.55;

/// Headline and body before the text swap.
pub const COPY_BEFORE: (&str, &str) = (
    "Create beautiful social cards",
    "Design Twitter/X-style social cards in seconds.",
);
/// Headline and body after the swap.
pub const COPY_AFTER: (&str, &str) = (
    "Customize everything",
    "Colors, fonts, images - make it yours.",
);

/// Card background at `frame`: a dark hue sweep 0 -> 220 -> 0 over the first 60 frames,
/// then black.
pub fn card_background(frame: i64) -> Color {
    if frame < HUE_FRAMES {
        let hue = interpolate(frame as f64, [0.0, 30.0, 60.0], [0.0, 220.0, 0.0]);
        Color::hsl(hue, 0.5, 0.05)
    } else {
        Color::BLACK
    }
}

/// Card font at `frame`: cycles through the font table inside [`FONT_WINDOW`], otherwise the
/// default stack.
pub fn card_font(frame: i64) -> &'static str {
    let (start, end) = FONT_WINDOW;
    if (start..end).contains(&frame) {
        *cycle(frame - start, FONT_PERIOD, &FONTS)
    } else {
        FONTS[0]
    }
}

/// One card morphing through color, copy, font and image, then splitting into the export
/// presets.
pub fn transformations(ctx: &SceneCtx<'_>) -> Node {
    let stage = super::stage(ctx).center();
    if ctx.frame < SPLIT_FRAME {
        stage.child(single_card(ctx))
    } else {
        stage.child(preset_row(ctx))
    }
}

fn single_card(ctx: &SceneCtx<'_>) -> Node {
    let text_phase = ctx.fade_in(60.0, 80.0);
    let (headline, body) = if text_phase > 0.5 {
        COPY_AFTER
    } else {
        COPY_BEFORE
    };
    let split = ctx.spring(SPLIT_FRAME as f64, SPLIT_SPRING);
    let x = interpolate(split, [0.0, 1.0], [0.0, -600.0]);

    let card = SocialCardProps {
        headline: headline.to_owned(),
        body: body.to_owned(),
        bg_color: card_background(ctx.frame),
        show_image: ctx.frame >= IMAGE_FRAME,
        width: 420.0,
        scale: 0.85,
        font_family: card_font(ctx.frame).to_owned(),
        ..SocialCardProps::default()
    };

    Node::container()
        .key("single-card")
        .translate(x, 0.0)
        .child(social_card(ctx, &card))
}

fn preset_row(ctx: &SceneCtx<'_>) -> Node {
    Node::row()
        .key("presets")
        .center()
        .gap(20.0)
        .scale(PRESET_ROW_SCALE)
        .children(
            PRESETS
                .iter()
                .enumerate()
                .map(|(i, preset)| preset_column(ctx, preset, i as f64 * PRESET_STAGGER)),
        )
}

fn preset_column(ctx: &SceneCtx<'_>, preset: &PlatformPreset, delay: f64) -> Node {
    let scale = ctx.spring(SPLIT_FRAME as f64 + delay, PRESET_SPRING);
    let label_opacity = ctx.fade_in(150.0 + delay, 165.0 + delay);
    let card = SocialCardProps {
        headline: "Perfect for every platform".to_owned(),
        body: "Export in any size.".to_owned(),
        width: preset.width,
        height: preset.height,
        show_image: true,
        ..SocialCardProps::default()
    };

    Node::column()
        .key(format!("preset-{}", preset.name))
        .align_items(Align::Center)
        .gap(12.0)
        .scale(scale)
        .child(social_card(ctx, &card))
        .child(
            Node::text(preset.label)
                .key(format!("preset-label-{}", preset.name))
                .font(FONT_DM_SANS)
                .font_size(14.0)
                .weight(600)
                .color(brand::MUTED)
                .opacity(label_opacity),
        )
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/transformations.rs"]
mod tests;

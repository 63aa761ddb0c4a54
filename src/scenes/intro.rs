use crate::animation::spring::SpringConfig;
use crate::content::tables::{FONT_DM_SANS, FONT_SYNE, brand};
use crate::eval::context::SceneCtx;
use crate::foundation::color::Color;
use crate::scene::node::Node;
use crate::scene::style::Edges;

/// Spring driving the logo scale, released at frame [`LOGO_DELAY`].
pub const LOGO_SPRING: SpringConfig = SpringConfig::new(12.0, 100.0).with_mass(0.8);
/// Frame at which the logo starts to appear.
pub const LOGO_DELAY: f64 = 15.0;

/// Title card: "Introducing", the springing Mockly logo and the publisher badge.
///
/// Keys: `introducing`, `logo`, `logo-accent`, `badge`.
pub fn intro(ctx: &SceneCtx<'_>) -> Node {
    let introducing_opacity = ctx.fade_in(0.0, 20.0);
    let logo_scale = ctx.spring(LOGO_DELAY, LOGO_SPRING);
    let logo_opacity = ctx.fade_in(15.0, 30.0);
    let ly_hue = ctx.ramp(30.0, 60.0, 210.0, 230.0);
    let badge_opacity = ctx.fade_in(50.0, 70.0);
    let badge_y = ctx.ramp(50.0, 70.0, 20.0, 0.0);

    let introducing = Node::text("Introducing")
        .key("introducing")
        .font(FONT_DM_SANS)
        .font_size(28.0)
        .weight(500)
        .letter_spacing(1.0)
        .color(brand::MUTED)
        .margin(Edges::bottom(16.0))
        .opacity(introducing_opacity);

    let logo = Node::row()
        .key("logo")
        .font(FONT_SYNE)
        .font_size(96.0)
        .weight(800)
        .letter_spacing(-3.0)
        .scale(logo_scale)
        .opacity(logo_opacity)
        .child(Node::text("Mock").color(Color::WHITE))
        .child(
            Node::text("ly")
                .key("logo-accent")
                .color(Color::hsl(ly_hue, 0.65, 0.45)),
        );

    let badge = Node::container()
        .key("badge")
        .margin(Edges::top(32.0))
        .padding(Edges::symmetric(8.0, 20.0))
        .background(ctx.props.accent_color)
        .radius(99.0)
        .font(FONT_DM_SANS)
        .font_size(12.0)
        .weight(700)
        .letter_spacing(1.0)
        .uppercase()
        .color(Color::WHITE)
        .opacity(badge_opacity)
        .translate(0.0, badge_y)
        .child(Node::text("by Hot Off The Patent Press"));

    super::stage(ctx)
        .center()
        .child(introducing)
        .child(logo)
        .child(badge)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/intro.rs"]
mod tests;

use crate::animation::spring::SpringConfig;
use crate::content::tables::{FONT_DM_SANS, FONT_SYNE, brand};
use crate::eval::context::SceneCtx;
use crate::foundation::color::Color;
use crate::scene::node::Node;
use crate::scene::style::{Align, Edges};

const ENTRANCE: SpringConfig = SpringConfig::new(12.0, 100.0);
const PULSE_AMPLITUDE: f64 = 0.02;
const PULSE_RATE: f64 = 0.1;

/// Breathing factor applied on top of the entrance spring.
pub fn pulse(frame: f64) -> f64 {
    (frame * PULSE_RATE).sin() * PULSE_AMPLITUDE + 1.0
}

/// Closing call to action: "Try it free", the URL badge and the logo.
///
/// The whole block springs in, fades over the first ten frames and keeps pulsing gently.
pub fn cta(ctx: &SceneCtx<'_>) -> Node {
    let scale = ctx.spring(0.0, ENTRANCE) * pulse(ctx.t());
    let opacity = ctx.fade_in(0.0, 10.0);

    let block = Node::column()
        .key("cta")
        .align_items(Align::Center)
        .text_center()
        .scale(scale)
        .opacity(opacity)
        .child(
            Node::text("Try it free")
                .key("cta-title")
                .font(FONT_SYNE)
                .font_size(48.0)
                .weight(700)
                .color(brand::BODY)
                .margin(Edges::bottom(24.0)),
        )
        .child(
            Node::container()
                .key("cta-url")
                .font(FONT_DM_SANS)
                .font_size(32.0)
                .weight(700)
                .color(ctx.props.primary_color)
                .background(ctx.props.accent_color)
                .padding(Edges::symmetric(16.0, 40.0))
                .radius(50.0)
                .child(Node::text("mockly.app")),
        )
        .child(
            Node::row()
                .key("cta-logo")
                .margin(Edges::top(40.0))
                .font(FONT_SYNE)
                .font_size(20.0)
                .weight(800)
                .color(Color::WHITE)
                .child(Node::text("Mock"))
                .child(Node::text("ly").color(ctx.props.accent_color)),
        );

    // No stage background: the CTA may overlay another scene.
    Node::fill().center().child(block)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/cta.rs"]
mod tests;

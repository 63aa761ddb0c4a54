use crate::animation::interpolate::{InterpolateOpts, interpolate_with};
use crate::animation::spring::SpringConfig;
use crate::components::social_card::{SocialCardProps, social_card};
use crate::content::tables::{FONT_SYNE, brand};
use crate::eval::context::SceneCtx;
use crate::foundation::color::Color;
use crate::scene::node::Node;
use crate::scene::style::{Align, BorderSides, Dimension, Edges};

const SLIDE: SpringConfig = SpringConfig::new(20.0, 100.0);
/// Frames the desktop mockup trails the phone.
pub const DESKTOP_DELAY: f64 = 30.0;
/// Distance the mockups slide in from.
pub const SLIDE_DISTANCE: f64 = 400.0;

/// Phone and desktop x offsets at the context's frame.
pub fn device_offsets(ctx: &SceneCtx<'_>) -> (f64, f64) {
    let phone = ctx.spring(0.0, SLIDE);
    let desktop = ctx.spring(DESKTOP_DELAY, SLIDE);
    (
        interpolate_with(phone, [0.0, 1.0], [-SLIDE_DISTANCE, 0.0], InterpolateOpts::EXTEND),
        interpolate_with(desktop, [0.0, 1.0], [SLIDE_DISTANCE, 0.0], InterpolateOpts::EXTEND),
    )
}

/// A phone mockup slides in from the left, a browser window from the right, then the
/// "Export anywhere" title fades in above them.
pub fn export_showcase(ctx: &SceneCtx<'_>) -> Node {
    let (phone_x, desktop_x) = device_offsets(ctx);
    let title = Node::text("Export anywhere")
        .key("export-title")
        .font(FONT_SYNE)
        .font_size(36.0)
        .weight(700)
        .color(Color::WHITE)
        .opacity(ctx.fade_in(60.0, 80.0));

    let devices = Node::row()
        .center()
        .gap(60.0)
        .child(
            Node::container()
                .key("phone")
                .translate(phone_x, 0.0)
                .child(phone_mockup(phone_screen(ctx))),
        )
        .child(
            Node::container()
                .key("desktop")
                .translate(desktop_x, 0.0)
                .child(desktop_mockup(desktop_post(ctx))),
        );

    super::stage(ctx).center().gap(40.0).child(title).child(devices)
}

fn phone_mockup(content: Node) -> Node {
    let notch = Node::container()
        .absolute(8.0, 100.0)
        .size_px(80.0, 24.0)
        .background(Color::BLACK)
        .radius(12.0);
    let screen = Node::column()
        .size(Dimension::Percent(100.0), Dimension::Percent(100.0))
        .background(Color::BLACK)
        .radius(28.0)
        .clip()
        .padding(Edges::top(36.0))
        .child(content);

    Node::container()
        .size_px(280.0, 560.0)
        .background(brand::CHROME)
        .radius(40.0)
        .padding(Edges::all(12.0))
        .border(3.0, brand::CHROME_BORDER, BorderSides::All)
        .child(notch)
        .child(screen)
}

fn phone_screen(ctx: &SceneCtx<'_>) -> Node {
    let header = Node::row()
        .align_items(Align::Center)
        .align_self(Align::Start)
        .gap(8.0)
        .margin(Edges::bottom(12.0))
        .child(
            Node::container()
                .size_px(28.0, 28.0)
                .round()
                .background(brand::BLUE),
        )
        .child(
            Node::text("mockly.app")
                .color(Color::WHITE)
                .font_size(12.0)
                .weight(600),
        );
    let card = SocialCardProps {
        headline: "Perfect for Instagram".to_owned(),
        body: "Square format ready.".to_owned(),
        width: 200.0,
        height: Some(200.0),
        show_image: true,
        scale: 0.9,
        ..SocialCardProps::default()
    };

    Node::column()
        .height(Dimension::Percent(100.0))
        .center()
        .padding(Edges::all(20.0))
        .background(Color::BLACK)
        .child(header)
        .child(social_card(ctx, &card))
}

fn desktop_mockup(content: Node) -> Node {
    let light = |c: u32| {
        Node::container()
            .size_px(12.0, 12.0)
            .round()
            .background(Color::hex(c))
    };
    let tab = |label: &str, active: bool| {
        Node::container()
            .padding(Edges::symmetric(4.0, 12.0))
            .background(if active {
                Color::hex(0x3d3d3d)
            } else {
                Color::TRANSPARENT
            })
            .radius(6.0)
            .font_size(11.0)
            .color(Color::hex(0x888888))
            .child(Node::text(label))
    };
    let chrome = Node::row()
        .height(36.0)
        .align_items(Align::Center)
        .padding(Edges::symmetric(0.0, 12.0))
        .gap(8.0)
        .background(Color::hex(0x2d2d2d))
        .child(light(0xff5f57))
        .child(light(0xffbd2e))
        .child(light(0x28ca41))
        .child(
            Node::row()
                .key("tabs")
                .gap(4.0)
                .margin(Edges {
                    left: 16.0,
                    ..Edges::default()
                })
                .child(tab("LinkedIn", true))
                .child(tab("Facebook", false))
                .child(tab("Reddit", false)),
        );

    Node::column()
        .width(600.0)
        .background(brand::CHROME)
        .radius(12.0)
        .clip()
        .border(2.0, brand::CHROME_BORDER, BorderSides::All)
        .child(chrome)
        .child(
            Node::column()
                .padding(Edges::all(20.0))
                .background(brand::SURFACE)
                .child(content),
        )
}

fn desktop_post(ctx: &SceneCtx<'_>) -> Node {
    let author = Node::row()
        .align_items(Align::Center)
        .gap(10.0)
        .child(
            Node::container()
                .size_px(40.0, 40.0)
                .round()
                .background(brand::BLUE),
        )
        .child(
            Node::column()
                .child(
                    Node::text("Mockly")
                        .color(Color::WHITE)
                        .font_size(14.0)
                        .weight(600),
                )
                .child(Node::text("2h - Global").color(brand::DIM).font_size(12.0)),
        );
    let card = SocialCardProps {
        headline: "Share everywhere".to_owned(),
        body: "LinkedIn, Facebook, Reddit...".to_owned(),
        width: 360.0,
        show_image: true,
        scale: 0.7,
        ..SocialCardProps::default()
    };

    Node::column()
        .gap(12.0)
        .child(author)
        .child(
            Node::text("Check out our new social card creator!")
                .color(brand::BODY)
                .font_size(14.0),
        )
        .child(social_card(ctx, &card))
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/export_showcase.rs"]
mod tests;

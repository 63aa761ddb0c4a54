use crate::animation::interpolate::{InterpolateOpts, interpolate, interpolate_with};
use crate::animation::spring::SpringConfig;
use crate::components::social_card::{SocialCardProps, social_card};
use crate::content::tables::{FONT_SYNE, brand, placeholder_image_url};
use crate::eval::context::SceneCtx;
use crate::foundation::color::Color;
use crate::scene::node::Node;
use crate::scene::style::{Align, BorderSides, Dimension, Edges};

const SLIDE: SpringConfig = SpringConfig::new(20.0, 100.0);
const SLIDE_DISTANCE: f64 = 800.0;
const FEED_BORDER: Color = Color::hex(0x262626);

/// Horizontal offsets and opacities of the three feed panels at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelMotion {
    /// Instagram x offset.
    pub instagram_x: f64,
    /// Instagram opacity.
    pub instagram_opacity: f64,
    /// LinkedIn x offset.
    pub linkedin_x: f64,
    /// LinkedIn opacity.
    pub linkedin_opacity: f64,
    /// Facebook x offset.
    pub facebook_x: f64,
    /// Facebook opacity.
    pub facebook_opacity: f64,
}

impl PanelMotion {
    /// Sample the panel motion at the context's frame.
    ///
    /// Spring progress is mapped to pixels without clamping, so panels overshoot and settle.
    pub fn at(ctx: &SceneCtx<'_>) -> Self {
        let slide = |progress: f64, from: f64, to: f64| {
            interpolate_with(progress, [0.0, 1.0], [from, to], InterpolateOpts::EXTEND)
        };

        let instagram_x = if ctx.frame < 50 {
            0.0
        } else {
            slide(ctx.spring(50.0, SLIDE), 0.0, -SLIDE_DISTANCE)
        };
        let linkedin_x = if ctx.frame < 100 {
            slide(ctx.spring(50.0, SLIDE), SLIDE_DISTANCE, 0.0)
        } else {
            slide(ctx.spring(100.0, SLIDE), 0.0, -SLIDE_DISTANCE)
        };

        Self {
            instagram_x,
            instagram_opacity: ctx.ramp(0.0, 150.0, 1.0, 0.0),
            linkedin_x,
            linkedin_opacity: interpolate(
                ctx.t(),
                [50.0, 70.0, 100.0, 120.0],
                [0.0, 1.0, 1.0, 0.0],
            ),
            facebook_x: slide(ctx.spring(90.0, SLIDE), SLIDE_DISTANCE, 0.0),
            facebook_opacity: ctx.fade_in(90.0, 110.0),
        }
    }
}

/// Instagram, LinkedIn and Facebook feeds carrying the card slide through one after another.
pub fn social_showcase(ctx: &SceneCtx<'_>) -> Node {
    let m = PanelMotion::at(ctx);
    super::stage(ctx)
        .center()
        .child(
            panel("instagram", 360.0, 640.0, m.instagram_x, m.instagram_opacity)
                .child(instagram_feed(ctx)),
        )
        .child(
            panel("linkedin", 480.0, 560.0, m.linkedin_x, m.linkedin_opacity)
                .child(linkedin_feed(ctx)),
        )
        .child(
            panel("facebook", 480.0, 560.0, m.facebook_x, m.facebook_opacity)
                .child(facebook_feed(ctx)),
        )
}

fn panel(key: &str, width: f64, height: f64, x: f64, opacity: f64) -> Node {
    Node::column()
        .key(key)
        .overlay()
        .size_px(width, height)
        .radius(12.0)
        .clip()
        .shadow(20.0, 60.0, Color::BLACK.with_alpha(0.5))
        .translate(x, 0.0)
        .opacity(opacity)
}

fn screen(bg: Color) -> Node {
    Node::column()
        .size(Dimension::Percent(100.0), Dimension::Percent(100.0))
        .background(bg)
}

fn glyph(s: &str, size: f64) -> Node {
    Node::text(s).font_size(size).color(Color::WHITE)
}

fn avatar_dot(size: f64) -> Node {
    Node::container()
        .size_px(size, size)
        .round()
        .background(brand::BLUE)
}

fn feed_card(
    ctx: &SceneCtx<'_>,
    headline: &str,
    body: &str,
    random: &str,
    width: f64,
    scale: f64,
) -> Node {
    social_card(
        ctx,
        &SocialCardProps {
            headline: headline.to_owned(),
            body: body.to_owned(),
            bg_color: Color::BLACK,
            show_image: true,
            image_url: Some(placeholder_image_url(random)),
            width,
            scale,
            ..SocialCardProps::default()
        },
    )
}

fn post_author(name: &str, name_color: Color, meta_color: Color, avatar: f64, size: f64) -> Node {
    Node::row()
        .align_items(Align::Center)
        .gap(12.0)
        .margin(Edges::bottom(12.0))
        .child(avatar_dot(avatar))
        .child(
            Node::column()
                .child(Node::text(name).color(name_color).font_size(size).weight(600))
                .child(Node::text("2h · 🌐").color(meta_color).font_size(12.0)),
        )
}

fn instagram_feed(ctx: &SceneCtx<'_>) -> Node {
    let header = Node::row()
        .align_items(Align::Center)
        .justify(Align::SpaceBetween)
        .padding(Edges::symmetric(12.0, 16.0))
        .border(1.0, FEED_BORDER, BorderSides::Bottom)
        .child(
            Node::text("Instagram")
                .font(FONT_SYNE)
                .font_size(24.0)
                .weight(800)
                .color(Color::WHITE),
        )
        .child(
            Node::row()
                .gap(20.0)
                .child(glyph("♡", 24.0))
                .child(glyph("✉", 24.0)),
        );

    let story_ring = [
        Color::hex(0xf09433),
        Color::hex(0xe6683c),
        Color::hex(0xdc2743),
        Color::hex(0xcc2366),
        Color::hex(0xbc1888),
    ];
    let stories = Node::row()
        .gap(16.0)
        .padding(Edges::symmetric(12.0, 16.0))
        .border(1.0, FEED_BORDER, BorderSides::Bottom)
        .children((1..=5).map(|i| {
            Node::column()
                .align_items(Align::Center)
                .gap(4.0)
                .child(
                    Node::container()
                        .size_px(56.0, 56.0)
                        .round()
                        .padding(Edges::all(2.0))
                        .gradient(45.0, story_ring)
                        .child(
                            Node::container()
                                .size(Dimension::Percent(100.0), Dimension::Percent(100.0))
                                .round()
                                .background(brand::CHROME_BORDER),
                        ),
                )
                .child(
                    Node::text(format!("user{i}"))
                        .font_size(10.0)
                        .color(Color::WHITE),
                )
        }));

    let post = Node::column()
        .grow(1.0)
        .clip()
        .child(
            Node::row()
                .align_items(Align::Center)
                .gap(12.0)
                .padding(Edges::symmetric(12.0, 16.0))
                .child(avatar_dot(32.0))
                .child(
                    Node::text("mockly.app")
                        .color(Color::WHITE)
                        .font_size(12.0)
                        .weight(600),
                ),
        )
        .child(
            Node::container()
                .padding(Edges::symmetric(0.0, 16.0))
                .child(feed_card(
                    ctx,
                    "Create beautiful cards",
                    "Perfect for Instagram.",
                    "insta",
                    280.0,
                    0.7,
                )),
        )
        .child(
            Node::row()
                .gap(16.0)
                .padding(Edges::symmetric(12.0, 16.0))
                .children(["♡", "💬", "✈"].map(|g| glyph(g, 24.0))),
        );

    let nav = Node::row()
        .justify(Align::SpaceBetween)
        .padding(Edges::symmetric(12.0, 24.0))
        .border(1.0, FEED_BORDER, BorderSides::Top)
        .children(["🏠", "🔍", "➕", "🎬", "👤"].map(|g| glyph(g, 24.0)));

    screen(Color::BLACK)
        .child(header)
        .child(stories)
        .child(post)
        .child(nav)
}

fn linkedin_feed(ctx: &SceneCtx<'_>) -> Node {
    let header = Node::row()
        .align_items(Align::Center)
        .justify(Align::SpaceBetween)
        .padding(Edges::symmetric(12.0, 24.0))
        .background(brand::CHROME)
        .border(1.0, brand::CHROME_BORDER, BorderSides::Bottom)
        .child(
            Node::text("linkedin")
                .font(FONT_SYNE)
                .font_size(20.0)
                .weight(700)
                .color(Color::hex(0x0a66c2)),
        )
        .child(
            Node::row()
                .gap(20.0)
                .color(brand::DIM)
                .font_size(12.0)
                .children(["Home", "My Network", "Jobs", "Messaging"].map(Node::text)),
        );

    let post = Node::column()
        .background(Color::hex(0x242424))
        .radius(12.0)
        .padding(Edges::all(16.0))
        .child(post_author("Mockly", Color::WHITE, brand::DIM, 48.0, 14.0))
        .child(
            Node::text(
                "Check out our new social card creator! Create stunning cards for any platform.",
            )
                .color(brand::BODY)
                .font_size(14.0)
                .margin(Edges::bottom(12.0)),
        )
        .child(feed_card(
            ctx,
            "Share everywhere",
            "LinkedIn, Facebook, and more...",
            "linkedin",
            340.0,
            0.6,
        ))
        .child(
            Node::row()
                .gap(16.0)
                .margin(Edges::top(12.0))
                .color(brand::DIM)
                .font_size(12.0)
                .child(Node::text("👍 42"))
                .child(Node::text("💬 5 comments")),
        );

    screen(brand::CHROME).child(header).child(
        Node::column()
            .grow(1.0)
            .padding(Edges::all(20.0))
            .clip()
            .child(post),
    )
}

fn facebook_feed(ctx: &SceneCtx<'_>) -> Node {
    let surface = Color::hex(0x242526);
    let text = Color::hex(0xe4e6eb);
    let meta = Color::hex(0x8a8d91);
    let divider = Color::hex(0x3a3b3c);

    let header = Node::row()
        .align_items(Align::Center)
        .justify(Align::SpaceBetween)
        .padding(Edges::symmetric(12.0, 24.0))
        .background(surface)
        .child(
            Node::text("facebook")
                .font(FONT_SYNE)
                .font_size(28.0)
                .weight(800)
                .color(Color::hex(0x1877f2)),
        )
        .child(
            Node::container()
                .size_px(80.0, 36.0)
                .radius(18.0)
                .background(divider),
        );

    let post = Node::column()
        .background(surface)
        .radius(12.0)
        .padding(Edges::all(16.0))
        .child(post_author("Mockly", text, meta, 40.0, 15.0))
        .child(
            Node::text("Create beautiful social cards in seconds! Try Mockly today.")
                .color(text)
                .font_size(15.0)
                .margin(Edges::bottom(12.0)),
        )
        .child(feed_card(
            ctx,
            "Design made simple",
            "Share on Facebook and beyond.",
            "facebook",
            340.0,
            0.6,
        ))
        .child(
            Node::row()
                .justify(Align::SpaceBetween)
                .margin(Edges::top(12.0))
                .padding(Edges::symmetric(8.0, 0.0))
                .border(1.0, divider, BorderSides::Top)
                .color(meta)
                .font_size(14.0)
                .child(Node::text("👍 128"))
                .child(Node::text("💬 24 · 📤 12")),
        );

    screen(Color::hex(0x18191a)).child(header).child(
        Node::column()
            .grow(1.0)
            .padding(Edges::all(16.0))
            .clip()
            .child(post),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/social_showcase.rs"]
mod tests;

use crate::animation::spring::SpringConfig;
use crate::content::tables::{FONT_DM_SANS_STACK, brand};
use crate::eval::context::SceneCtx;
use crate::foundation::color::Color;
use crate::scene::node::Node;
use crate::scene::style::{Align, Dimension, Edges};

const CARD_PADDING: f64 = 22.0;
const CARD_RADIUS: f64 = 16.0;
const AVATAR_SIZE: f64 = 40.0;
const VERIFIED_SIZE: f64 = 16.0;
const AVATAR_SPRING: SpringConfig = SpringConfig::new(12.0, 200.0);
const PLACEHOLDER_IMAGE_BG: Color = Color::hex(0x1a1a2e);

/// Parameters of a rendered social card.
///
/// Defaults describe the stock Mockly card: black background, "M" avatar, verified badge,
/// no image, 400 px wide, not animated.
#[derive(Clone, Debug, PartialEq)]
pub struct SocialCardProps {
    /// Display name.
    pub name: String,
    /// Account handle.
    pub handle: String,
    /// Bold headline line.
    pub headline: String,
    /// Body paragraph.
    pub body: String,
    /// Card background.
    pub bg_color: Color,
    /// Name text color.
    pub name_color: Color,
    /// Handle text color.
    pub handle_color: Color,
    /// Headline text color.
    pub headline_color: Color,
    /// Body text color.
    pub body_color: Color,
    /// Render the image area below the text.
    pub show_image: bool,
    /// Image reference; `None` shows a labelled placeholder.
    pub image_url: Option<String>,
    /// Card width in pixels.
    pub width: f64,
    /// Fixed card height; `None` sizes from content.
    pub height: Option<f64>,
    /// Avatar initials.
    pub avatar_initials: String,
    /// Show the verified badge next to the name.
    pub show_verified: bool,
    /// Avatar and verified badge color.
    pub verified_color: Color,
    /// Run the staggered entrance animation.
    pub animated: bool,
    /// Uniform card scale.
    pub scale: f64,
    /// Image inset from the card edges in pixels.
    pub image_inset: f64,
    /// Image width / height.
    pub image_aspect_ratio: f64,
    /// CSS font stack.
    pub font_family: String,
}

impl Default for SocialCardProps {
    fn default() -> Self {
        Self {
            name: "Mockly".to_owned(),
            handle: "@mockly.app".to_owned(),
            headline: "Create beautiful social cards".to_owned(),
            body: "Design Twitter/X-style social cards in seconds.".to_owned(),
            bg_color: Color::BLACK,
            name_color: Color::WHITE,
            handle_color: Color::hex(0x999999),
            headline_color: Color::WHITE,
            body_color: brand::BODY,
            show_image: false,
            image_url: None,
            width: 400.0,
            height: None,
            avatar_initials: "M".to_owned(),
            show_verified: true,
            verified_color: brand::VERIFIED,
            animated: false,
            scale: 1.0,
            image_inset: 10.0,
            image_aspect_ratio: 16.0 / 9.0,
            font_family: FONT_DM_SANS_STACK.to_owned(),
        }
    }
}

/// Resolved image-area geometry of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageGeometry {
    /// Image width in pixels.
    pub width: f64,
    /// Image height in pixels, rounded to whole pixels.
    pub height: f64,
    /// Corner radius in pixels.
    pub radius: f64,
}

impl SocialCardProps {
    /// Geometry of the image area for the current width, inset and aspect ratio.
    ///
    /// A non-positive aspect ratio falls back to 16:9.
    pub fn image_geometry(&self) -> ImageGeometry {
        let aspect = if self.image_aspect_ratio.is_finite() && self.image_aspect_ratio > 0.0 {
            self.image_aspect_ratio
        } else {
            16.0 / 9.0
        };
        let width = (self.width - 2.0 * self.image_inset).max(0.0);
        ImageGeometry {
            width,
            height: (width / aspect).round(),
            radius: (self.image_inset + 2.0).clamp(4.0, 16.0),
        }
    }
}

/// Element opacities and avatar scale at the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Entrance {
    avatar_scale: f64,
    name: f64,
    handle: f64,
    headline: f64,
    body: f64,
    image: f64,
}

impl Entrance {
    const SETTLED: Self = Self {
        avatar_scale: 1.0,
        name: 1.0,
        handle: 1.0,
        headline: 1.0,
        body: 1.0,
        image: 1.0,
    };

    fn at(ctx: &SceneCtx<'_>) -> Self {
        Self {
            avatar_scale: ctx.spring(0.0, AVATAR_SPRING),
            name: ctx.fade_in(10.0, 25.0),
            handle: ctx.fade_in(20.0, 35.0),
            headline: ctx.fade_in(30.0, 45.0),
            body: ctx.fade_in(40.0, 55.0),
            image: ctx.fade_in(50.0, 65.0),
        }
    }
}

/// Build the visual tree of a social card.
///
/// With `animated` off every element is fully visible regardless of the frame. With it on,
/// the avatar springs in from zero scale and the text rows fade in staggered by ten frames,
/// counted from frame 0 of `ctx`.
pub fn social_card(ctx: &SceneCtx<'_>, props: &SocialCardProps) -> Node {
    let entrance = if props.animated {
        Entrance::at(ctx)
    } else {
        Entrance::SETTLED
    };

    let avatar = Node::column()
        .key("avatar")
        .size_px(AVATAR_SIZE, AVATAR_SIZE)
        .round()
        .center()
        .shrink(0.0)
        .background(props.verified_color)
        .color(Color::WHITE)
        .font_size(16.0)
        .weight(700)
        .scale(entrance.avatar_scale)
        .child(Node::text(props.avatar_initials.as_str()));

    let name_row = Node::row()
        .align_items(Align::Center)
        .gap(4.0)
        .child(
            Node::text(props.name.as_str())
                .key("name")
                .color(props.name_color)
                .font_size(14.5)
                .weight(700)
                .opacity(entrance.name),
        )
        .child_if(props.show_verified.then(|| {
            Node::verified(props.verified_color, VERIFIED_SIZE)
                .key("verified")
                .opacity(entrance.name)
        }));

    let header = Node::row()
        .align_items(Align::Center)
        .gap(10.0)
        .margin(Edges::bottom(12.0))
        .child(avatar)
        .child(
            Node::column().child(name_row).child(
                Node::text(props.handle.as_str())
                    .key("handle")
                    .color(props.handle_color)
                    .font_size(13.0)
                    .opacity(entrance.handle),
            ),
        );

    let content = Node::column()
        .padding(Edges::all(CARD_PADDING))
        .child(header)
        .child(
            Node::text(props.headline.as_str())
                .key("headline")
                .color(props.headline_color)
                .font_size(18.0)
                .weight(800)
                .line_height(1.3)
                .margin(Edges::bottom(10.0))
                .opacity(entrance.headline),
        )
        .child(
            Node::text(props.body.as_str())
                .key("body")
                .color(props.body_color)
                .font_size(14.5)
                .line_height(1.55)
                .opacity(entrance.body),
        );

    let mut card = Node::column()
        .key("social-card")
        .width(props.width)
        .background(props.bg_color)
        .radius(CARD_RADIUS)
        .clip()
        .shadow(20.0, 60.0, Color::BLACK.with_alpha(0.5))
        .font(props.font_family.as_str())
        .scale(props.scale)
        .child(content)
        .child_if(props.show_image.then(|| image_area(props, entrance.image)));
    if let Some(h) = props.height {
        card = card.height(Dimension::Px(h));
    }
    card
}

fn image_area(props: &SocialCardProps, opacity: f64) -> Node {
    let geom = props.image_geometry();
    let inset = props.image_inset;
    let frame = Node::column()
        .key("image")
        .size_px(geom.width, geom.height)
        .margin(Edges {
            top: 0.0,
            right: inset,
            bottom: inset,
            left: inset,
        })
        .radius(geom.radius)
        .clip()
        .center()
        .opacity(opacity);

    match props.image_url.as_deref() {
        Some(url) => frame.background(Color::TRANSPARENT).child(
            Node::image(url).size(Dimension::Percent(100.0), Dimension::Percent(100.0)),
        ),
        None => frame.background(PLACEHOLDER_IMAGE_BG).child(
            Node::text("Your Image")
                .key("image-placeholder")
                .color(props.verified_color)
                .font_size(24.0)
                .weight(700),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/social_card.rs"]
mod tests;

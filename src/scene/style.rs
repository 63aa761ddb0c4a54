use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::core::Vec2;

/// Length along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Size from content.
    Auto,
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the parent box.
    Percent(f64),
}

impl From<f64> for Dimension {
    fn from(v: f64) -> Self {
        Self::Px(v)
    }
}

/// Per-side spacing in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Edges {
    /// Same spacing on all sides.
    pub const fn all(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// CSS-style `vertical horizontal` shorthand.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Spacing on the top edge only.
    pub const fn top(v: f64) -> Self {
        Self {
            top: v,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }

    /// Spacing on the bottom edge only.
    pub const fn bottom(v: f64) -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: v,
            left: 0.0,
        }
    }
}

/// Main axis of a flex container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    /// Children laid out left to right.
    Row,
    /// Children laid out top to bottom.
    Column,
}

/// Cross/main-axis alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Pack toward the start.
    Start,
    /// Center.
    Center,
    /// Pack toward the end.
    End,
    /// Distribute free space between children.
    SpaceBetween,
    /// Stretch to fill.
    Stretch,
}

/// Positioning scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Participates in the parent's flow.
    Relative,
    /// Removed from flow, placed by `top`/`left`.
    Absolute,
}

/// Fill of a box background.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Solid color.
    Solid(Color),
    /// Linear gradient with evenly spaced stops.
    LinearGradient {
        /// Gradient direction in degrees (CSS convention).
        angle_deg: f64,
        /// Color stops.
        stops: Vec<Color>,
    },
}

/// Which sides of a box carry a border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderSides {
    /// All four sides.
    All,
    /// Top side only.
    Top,
    /// Bottom side only.
    Bottom,
}

/// Solid border stroke.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
    /// Stroked sides.
    pub sides: BorderSides,
}

/// Drop shadow under a box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Vertical offset in pixels.
    pub offset_y: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: Color,
}

/// Text case transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    /// Render in upper case.
    Uppercase,
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
}

/// Image scaling inside its box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    /// Scale to cover, cropping overflow.
    #[default]
    Cover,
    /// Scale to fit inside.
    Contain,
}

/// 2D transform applied around the box center: scale, then translate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation in pixels.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Return `true` for the identity transform.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Transform matrix relative to the box center.
    pub fn to_affine(&self) -> kurbo::Affine {
        kurbo::Affine::translate(self.translate) * kurbo::Affine::scale(self.scale)
    }
}

fn is_one(v: &f64) -> bool {
    *v == 1.0
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Layout and paint properties of a visual node. Unset properties inherit host defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Box width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Box height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Flex direction when the node lays out children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<FlexDirection>,
    /// Cross-axis alignment of children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    /// Main-axis distribution of children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Align>,
    /// Cross-axis alignment override for this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Align>,
    /// Space between children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    /// Flex grow factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f64>,
    /// Flex shrink factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f64>,
    /// Inner spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Edges>,
    /// Outer spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Edges>,
    /// Positioning scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Offset from the containing block's top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Dimension>,
    /// Offset from the containing block's left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Dimension>,
    /// Background fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Paint>,
    /// Foreground (text) color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// CSS font-family stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Font weight (100-900).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// Extra spacing between glyphs in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    /// Line height as a multiple of the font size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Text case transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    /// Horizontal text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Border stroke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Corner radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Dimension>,
    /// Drop shadow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Clip children to the box.
    #[serde(default, skip_serializing_if = "is_false")]
    pub clip: bool,
    /// Gaussian blur radius applied to the rendered subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    /// Subtree opacity in `[0, 1]`.
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub opacity: f64,
    /// Subtree transform.
    #[serde(default, skip_serializing_if = "Transform::is_identity")]
    pub transform: Transform,
}

fn one() -> f64 {
    1.0
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            direction: None,
            align_items: None,
            justify_content: None,
            align_self: None,
            gap: None,
            flex_grow: None,
            flex_shrink: None,
            padding: None,
            margin: None,
            position: None,
            top: None,
            left: None,
            background: None,
            color: None,
            font_family: None,
            font_size: None,
            font_weight: None,
            letter_spacing: None,
            line_height: None,
            text_transform: None,
            text_align: None,
            border: None,
            border_radius: None,
            shadow: None,
            clip: false,
            blur: None,
            opacity: 1.0,
            transform: Transform::IDENTITY,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/style.rs"]
mod tests;

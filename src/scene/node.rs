use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::foundation::core::Vec2;
use crate::scene::style::{
    Align, Border, BorderSides, Dimension, Edges, FlexDirection, ImageFit, Paint, Position,
    Shadow, Style, TextAlign, TextTransform,
};

/// What a visual node draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Layout box; draws only its own background/border.
    Box,
    /// Text run.
    Text(String),
    /// Image loaded by the host from `src`.
    Image {
        /// Image reference (URL) resolved by the host.
        src: String,
        /// Scaling mode.
        fit: ImageFit,
    },
    /// Verified check badge: a filled circle with a white check mark.
    Verified {
        /// Circle fill.
        fill: Color,
    },
}

/// One node of an immutable visual tree.
///
/// Trees are built fresh for every frame and never mutated after construction; the builder
/// methods consume and return `self`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Optional stable key for lookup by hosts and tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Drawn content.
    pub kind: NodeKind,
    /// Layout and paint properties.
    #[serde(default)]
    pub style: Style,
    /// Children in paint order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    fn with_kind(kind: NodeKind) -> Self {
        Self {
            key: None,
            kind,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Empty layout box.
    pub fn container() -> Self {
        Self::with_kind(NodeKind::Box)
    }

    /// Box laying children out horizontally.
    pub fn row() -> Self {
        Self::container().direction(FlexDirection::Row)
    }

    /// Box laying children out vertically.
    pub fn column() -> Self {
        Self::container().direction(FlexDirection::Column)
    }

    /// Box covering its parent entirely (absolute, 100% x 100%, column flow).
    pub fn fill() -> Self {
        Self::column()
            .absolute(0.0, 0.0)
            .size(Dimension::Percent(100.0), Dimension::Percent(100.0))
    }

    /// Text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Text(text.into()))
    }

    /// Image by reference.
    pub fn image(src: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Image {
            src: src.into(),
            fit: ImageFit::Cover,
        })
    }

    /// Verified badge glyph of `size` pixels.
    pub fn verified(fill: Color, size: f64) -> Self {
        Self::with_kind(NodeKind::Verified { fill }).size_px(size, size)
    }

    /// Attach a lookup key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append one child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append an optional child.
    pub fn child_if(self, child: Option<Node>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    /// Append several children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set width and height.
    pub fn size(mut self, width: Dimension, height: Dimension) -> Self {
        self.style.width = Some(width);
        self.style.height = Some(height);
        self
    }

    /// Set width and height in pixels.
    pub fn size_px(self, width: f64, height: f64) -> Self {
        self.size(Dimension::Px(width), Dimension::Px(height))
    }

    /// Set width.
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.style.width = Some(width.into());
        self
    }

    /// Set height.
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.style.height = Some(height.into());
        self
    }

    /// Set flex direction.
    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.style.direction = Some(direction);
        self
    }

    /// Center children on both axes.
    pub fn center(self) -> Self {
        self.align_items(Align::Center).justify(Align::Center)
    }

    /// Set cross-axis alignment.
    pub fn align_items(mut self, align: Align) -> Self {
        self.style.align_items = Some(align);
        self
    }

    /// Set main-axis distribution.
    pub fn justify(mut self, align: Align) -> Self {
        self.style.justify_content = Some(align);
        self
    }

    /// Override this node's cross-axis alignment.
    pub fn align_self(mut self, align: Align) -> Self {
        self.style.align_self = Some(align);
        self
    }

    /// Set spacing between children.
    pub fn gap(mut self, gap: f64) -> Self {
        self.style.gap = Some(gap);
        self
    }

    /// Grow to fill free space.
    pub fn grow(mut self, factor: f64) -> Self {
        self.style.flex_grow = Some(factor);
        self
    }

    /// Set flex shrink factor.
    pub fn shrink(mut self, factor: f64) -> Self {
        self.style.flex_shrink = Some(factor);
        self
    }

    /// Set padding.
    pub fn padding(mut self, edges: Edges) -> Self {
        self.style.padding = Some(edges);
        self
    }

    /// Set margin.
    pub fn margin(mut self, edges: Edges) -> Self {
        self.style.margin = Some(edges);
        self
    }

    /// Position absolutely at `top`/`left` pixels.
    pub fn absolute(mut self, top: f64, left: f64) -> Self {
        self.style.position = Some(Position::Absolute);
        self.style.top = Some(Dimension::Px(top));
        self.style.left = Some(Dimension::Px(left));
        self
    }

    /// Position absolutely without explicit offsets (centered by the parent's alignment).
    pub fn overlay(mut self) -> Self {
        self.style.position = Some(Position::Absolute);
        self
    }

    /// Solid background.
    pub fn background(mut self, color: Color) -> Self {
        self.style.background = Some(Paint::Solid(color));
        self
    }

    /// Linear-gradient background.
    pub fn gradient(mut self, angle_deg: f64, stops: impl IntoIterator<Item = Color>) -> Self {
        self.style.background = Some(Paint::LinearGradient {
            angle_deg,
            stops: stops.into_iter().collect(),
        });
        self
    }

    /// Text color.
    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Font family stack.
    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.style.font_family = Some(family.into());
        self
    }

    /// Font size in pixels.
    pub fn font_size(mut self, px: f64) -> Self {
        self.style.font_size = Some(px);
        self
    }

    /// Font weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.style.font_weight = Some(weight);
        self
    }

    /// Letter spacing in pixels.
    pub fn letter_spacing(mut self, px: f64) -> Self {
        self.style.letter_spacing = Some(px);
        self
    }

    /// Line height multiplier.
    pub fn line_height(mut self, factor: f64) -> Self {
        self.style.line_height = Some(factor);
        self
    }

    /// Render text in upper case.
    pub fn uppercase(mut self) -> Self {
        self.style.text_transform = Some(TextTransform::Uppercase);
        self
    }

    /// Center text horizontally.
    pub fn text_center(mut self) -> Self {
        self.style.text_align = Some(TextAlign::Center);
        self
    }

    /// Border on the given sides.
    pub fn border(mut self, width: f64, color: Color, sides: BorderSides) -> Self {
        self.style.border = Some(Border {
            width,
            color,
            sides,
        });
        self
    }

    /// Corner radius in pixels.
    pub fn radius(mut self, px: f64) -> Self {
        self.style.border_radius = Some(Dimension::Px(px));
        self
    }

    /// Fully rounded corners (circle for square boxes).
    pub fn round(mut self) -> Self {
        self.style.border_radius = Some(Dimension::Percent(50.0));
        self
    }

    /// Drop shadow.
    pub fn shadow(mut self, offset_y: f64, blur: f64, color: Color) -> Self {
        self.style.shadow = Some(Shadow {
            offset_y,
            blur,
            color,
        });
        self
    }

    /// Clip children to this box.
    pub fn clip(mut self) -> Self {
        self.style.clip = true;
        self
    }

    /// Blur the rendered subtree.
    pub fn blur(mut self, radius: f64) -> Self {
        self.style.blur = Some(radius);
        self
    }

    /// Subtree opacity, clamped to `[0, 1]`.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    /// Translate the subtree.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.style.transform.translate = Vec2::new(x, y);
        self
    }

    /// Uniformly scale the subtree.
    pub fn scale(mut self, scale: f64) -> Self {
        self.style.transform.scale = scale;
        self
    }

    /// Depth-first pre-order traversal of the subtree, including `self`.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// First node in the subtree carrying `key`.
    pub fn find(&self, key: &str) -> Option<&Node> {
        self.walk().find(|n| n.key.as_deref() == Some(key))
    }

    /// Text content when this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }

    /// All text runs in the subtree, in traversal order.
    pub fn texts(&self) -> Vec<&str> {
        self.walk().filter_map(Node::as_text).collect()
    }

    /// Number of nodes in the subtree, including `self`.
    pub fn count(&self) -> usize {
        self.walk().count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;

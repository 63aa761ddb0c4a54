use xxhash_rust::xxh3::Xxh3;

use crate::foundation::color::Color;
use crate::scene::node::{Node, NodeKind};
use crate::scene::style::{
    Align, BorderSides, Dimension, Edges, FlexDirection, ImageFit, Paint, Position, Style,
    TextAlign, TextTransform,
};

const XXH3_SEED: u64 = 0x6d6f636b6c79_0001;

/// Stable fingerprint of an evaluated visual tree.
///
/// Frame indices are not part of the hash, so a still tree fingerprints the same across time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits of the xxh3-128 digest.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Fingerprint a tree painted over `background`.
pub fn fingerprint_tree(background: Color, root: &Node) -> FrameFingerprint {
    let mut h = StableHasher::new();
    write_color(&mut h, background);
    write_node(&mut h, root);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 paint identically.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, node: &Node) {
    match &node.key {
        Some(k) => {
            h.write_u8(1);
            h.write_str(k);
        }
        None => h.write_u8(0),
    }
    match &node.kind {
        NodeKind::Box => h.write_u8(0),
        NodeKind::Text(t) => {
            h.write_u8(1);
            h.write_str(t);
        }
        NodeKind::Image { src, fit } => {
            h.write_u8(2);
            h.write_str(src);
            h.write_u8(match fit {
                ImageFit::Cover => 0,
                ImageFit::Contain => 1,
            });
        }
        NodeKind::Verified { fill } => {
            h.write_u8(3);
            write_color(h, *fill);
        }
    }
    write_style(h, &node.style);
    h.write_u32(node.children.len() as u32);
    for c in &node.children {
        write_node(h, c);
    }
}

fn write_opt<T>(h: &mut StableHasher, v: Option<T>, f: impl FnOnce(&mut StableHasher, T)) {
    match v {
        Some(v) => {
            h.write_u8(1);
            f(h, v);
        }
        None => h.write_u8(0),
    }
}

fn write_style(h: &mut StableHasher, s: &Style) {
    write_opt(h, s.width, write_dimension);
    write_opt(h, s.height, write_dimension);
    write_opt(h, s.direction, |h, d| {
        h.write_u8(match d {
            FlexDirection::Row => 0,
            FlexDirection::Column => 1,
        })
    });
    write_opt(h, s.align_items, write_align);
    write_opt(h, s.justify_content, write_align);
    write_opt(h, s.align_self, write_align);
    write_opt(h, s.gap, StableHasher::write_f64);
    write_opt(h, s.flex_grow, StableHasher::write_f64);
    write_opt(h, s.flex_shrink, StableHasher::write_f64);
    write_opt(h, s.padding, write_edges);
    write_opt(h, s.margin, write_edges);
    write_opt(h, s.position, |h, p| {
        h.write_u8(match p {
            Position::Relative => 0,
            Position::Absolute => 1,
        })
    });
    write_opt(h, s.top, write_dimension);
    write_opt(h, s.left, write_dimension);
    write_opt(h, s.background.as_ref(), write_paint);
    write_opt(h, s.color, write_color);
    write_opt(h, s.font_family.as_deref(), StableHasher::write_str);
    write_opt(h, s.font_size, StableHasher::write_f64);
    write_opt(h, s.font_weight, StableHasher::write_u16);
    write_opt(h, s.letter_spacing, StableHasher::write_f64);
    write_opt(h, s.line_height, StableHasher::write_f64);
    write_opt(h, s.text_transform, |h, t| {
        h.write_u8(match t {
            TextTransform::Uppercase => 0,
        })
    });
    write_opt(h, s.text_align, |h, a| {
        h.write_u8(match a {
            TextAlign::Left => 0,
            TextAlign::Center => 1,
        })
    });
    write_opt(h, s.border, |h, b| {
        h.write_f64(b.width);
        write_color(h, b.color);
        h.write_u8(match b.sides {
            BorderSides::All => 0,
            BorderSides::Top => 1,
            BorderSides::Bottom => 2,
        });
    });
    write_opt(h, s.border_radius, write_dimension);
    write_opt(h, s.shadow, |h, sh| {
        h.write_f64(sh.offset_y);
        h.write_f64(sh.blur);
        write_color(h, sh.color);
    });
    h.write_bool(s.clip);
    write_opt(h, s.blur, StableHasher::write_f64);
    h.write_f64(s.opacity);
    h.write_f64(s.transform.translate.x);
    h.write_f64(s.transform.translate.y);
    h.write_f64(s.transform.scale);
}

fn write_dimension(h: &mut StableHasher, d: Dimension) {
    match d {
        Dimension::Auto => h.write_u8(0),
        Dimension::Px(v) => {
            h.write_u8(1);
            h.write_f64(v);
        }
        Dimension::Percent(v) => {
            h.write_u8(2);
            h.write_f64(v);
        }
    }
}

fn write_align(h: &mut StableHasher, a: Align) {
    h.write_u8(match a {
        Align::Start => 0,
        Align::Center => 1,
        Align::End => 2,
        Align::SpaceBetween => 3,
        Align::Stretch => 4,
    });
}

fn write_edges(h: &mut StableHasher, e: Edges) {
    h.write_f64(e.top);
    h.write_f64(e.right);
    h.write_f64(e.bottom);
    h.write_f64(e.left);
}

fn write_paint(h: &mut StableHasher, p: &Paint) {
    match p {
        Paint::Solid(c) => {
            h.write_u8(0);
            write_color(h, *c);
        }
        Paint::LinearGradient { angle_deg, stops } => {
            h.write_u8(1);
            h.write_f64(*angle_deg);
            h.write_u32(stops.len() as u32);
            for c in stops {
                write_color(h, *c);
            }
        }
    }
}

fn write_color(h: &mut StableHasher, c: Color) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;

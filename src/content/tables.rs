use crate::foundation::color::Color;

/// Color scheme of one card variation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardPalette {
    /// Card background.
    pub bg: Color,
    /// Name, headline and body text.
    pub text: Color,
    /// Handle text.
    pub handle: Color,
    /// Human-readable palette name.
    pub name: &'static str,
}

const fn palette(bg: u32, text: u32, handle: u32, name: &'static str) -> CardPalette {
    CardPalette {
        bg: Color::hex(bg),
        text: Color::hex(text),
        handle: Color::hex(handle),
        name,
    }
}

/// Card color variations.
pub static PALETTES: [CardPalette; 10] = [
    palette(0x000000, 0xffffff, 0x999999, "Black"),
    palette(0xffffff, 0x1a1a1a, 0x666666, "White"),
    palette(0xeae4d3, 0x2d2d2d, 0x666666, "Beige"),
    palette(0x2d49b9, 0xffffff, 0xb8c9e8, "Blue"),
    palette(0xc94a4a, 0xffffff, 0xe8b8b8, "Red"),
    palette(0x4a4a4a, 0xffffff, 0x999999, "Grey"),
    palette(0x7d8c69, 0xffffff, 0xc5cdb8, "Sage"),
    palette(0x1a1a2e, 0xffffff, 0x8c8c9e, "Dark Blue"),
    palette(0xf5e6d3, 0x3d3d3d, 0x7a7a7a, "Cream"),
    palette(0x2d8c6e, 0xffffff, 0xa8d4c5, "Teal"),
];

/// Default card body font stack.
pub const FONT_DM_SANS_STACK: &str = "'DM Sans', -apple-system, BlinkMacSystemFont, sans-serif";
/// Short DM Sans stack for captions.
pub const FONT_DM_SANS: &str = "'DM Sans', sans-serif";
/// Display font for titles and logos.
pub const FONT_SYNE: &str = "'Syne', sans-serif";

/// Font families cycled by the transformations scene.
pub static FONTS: [&str; 4] = [
    FONT_DM_SANS_STACK,
    "Georgia, serif",
    FONT_SYNE,
    "'Courier New', monospace",
];

/// Headlines for generated cards.
pub static HEADLINES: [&str; 20] = [
    "Create beautiful social cards",
    "Share your story",
    "Make an impression",
    "Stand out online",
    "Design made simple",
    "Cards in seconds",
    "Your brand, your way",
    "Perfect for creators",
    "Social media ready",
    "Professional results",
    "Quick and easy",
    "Stunning visuals",
    "Boost engagement",
    "Share everywhere",
    "Make it yours",
    "Create with ease",
    "Beautiful designs",
    "Simple. Fast. Free.",
    "Your content, elevated",
    "Design without limits",
];

/// Body copy for generated cards.
pub static BODIES: [&str; 10] = [
    "Design stunning cards in seconds.",
    "Perfect for social media.",
    "No design skills needed.",
    "Export to any platform.",
    "Customize everything.",
    "Free and easy to use.",
    "Professional results.",
    "Share your content beautifully.",
    "Make your posts pop.",
    "The fastest way to create.",
];

/// Placeholder image service URL for `id`.
///
/// The URL is only a reference; fetching (and any failure) belongs to the rendering host.
pub fn placeholder_image_url(id: impl std::fmt::Display) -> String {
    format!("https://cataas.com/cat?width=400&height=225&random={id}")
}

/// Output format a card can be exported to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformPreset {
    /// Short identifier.
    pub name: &'static str,
    /// Card width in pixels.
    pub width: f64,
    /// Fixed card height, or `None` to size from content.
    pub height: Option<f64>,
    /// Caption shown under the card.
    pub label: &'static str,
}

/// Export presets shown when the card splits apart.
pub static PRESETS: [PlatformPreset; 5] = [
    PlatformPreset {
        name: "Twitter",
        width: 280.0,
        height: None,
        label: "Twitter/X",
    },
    PlatformPreset {
        name: "Instagram",
        width: 200.0,
        height: Some(200.0),
        label: "Instagram",
    },
    PlatformPreset {
        name: "LinkedIn",
        width: 320.0,
        height: None,
        label: "LinkedIn",
    },
    PlatformPreset {
        name: "Story",
        width: 140.0,
        height: Some(250.0),
        label: "Story",
    },
    PlatformPreset {
        name: "OG",
        width: 360.0,
        height: Some(188.0),
        label: "OG Image",
    },
];

/// Shared brand colors used across scenes.
pub mod brand {
    use crate::foundation::color::Color;

    /// Default scene background.
    pub const SURFACE: Color = Color::hex(0x1e1e1e);
    /// Brand blue.
    pub const BLUE: Color = Color::hex(0x2d49b9);
    /// Muted caption grey.
    pub const MUTED: Color = Color::hex(0x8c8c8c);
    /// Verified badge blue.
    pub const VERIFIED: Color = Color::hex(0x499aea);
    /// Light body text.
    pub const BODY: Color = Color::hex(0xe0e0e0);
    /// Mockup chrome border.
    pub const CHROME_BORDER: Color = Color::hex(0x333333);
    /// Mockup chrome fill.
    pub const CHROME: Color = Color::hex(0x1a1a1a);
    /// Dim secondary text.
    pub const DIM: Color = Color::hex(0x666666);
}

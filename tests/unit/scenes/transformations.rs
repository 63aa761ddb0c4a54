use super::*;
use crate::config::props::LaunchProps;
use crate::foundation::core::Fps;

fn at(frame: i64) -> Node {
    let props = LaunchProps::default();
    transformations(&SceneCtx::new(frame, Fps::integer(30), &props))
}

fn text_of<'a>(tree: &'a Node, key: &str) -> Option<&'a str> {
    tree.find(key).and_then(Node::as_text)
}

#[test]
fn background_sweeps_hue_then_turns_black() {
    assert_eq!(card_background(0), Color::hsl(0.0, 0.5, 0.05));
    assert_eq!(card_background(30), Color::hsl(220.0, 0.5, 0.05));
    assert_eq!(card_background(59), Color::hsl(220.0 / 30.0, 0.5, 0.05));
    assert_eq!(card_background(60), Color::BLACK);
    assert_eq!(card_background(200), Color::BLACK);
}

#[test]
fn font_cycles_only_inside_its_window() {
    assert_eq!(card_font(59), FONTS[0]);
    assert_eq!(card_font(60), FONTS[0]);
    assert_eq!(card_font(70), FONTS[1]);
    assert_eq!(card_font(80), FONTS[2]);
    assert_eq!(card_font(95), FONTS[3]);
    assert_eq!(card_font(100), FONTS[0]);
}

#[test]
fn copy_swaps_past_the_midpoint() {
    assert_eq!(text_of(&at(70), "headline"), Some(COPY_BEFORE.0));
    assert_eq!(text_of(&at(71), "headline"), Some(COPY_AFTER.0));
    assert_eq!(text_of(&at(71), "body"), Some(COPY_AFTER.1));
}

#[test]
fn image_appears_at_frame_100() {
    assert!(at(99).find("image").is_none());
    assert!(at(100).find("image").is_some());
}

#[test]
fn card_holds_still_until_the_split() {
    assert_eq!(at(100), at(119));
    assert!(at(119).find("single-card").is_some());
}

#[test]
fn splits_into_staggered_presets() {
    let tree = at(120);
    assert!(tree.find("single-card").is_none());
    let row = tree.find("presets").unwrap();
    assert_eq!(row.children.len(), PRESETS.len());
    for p in &PRESETS {
        let col = tree.find(&format!("preset-{}", p.name)).unwrap();
        assert_eq!(col.style.transform.scale, 0.0);
    }

    let scale = |f: i64, name: &str| {
        at(f)
            .find(&format!("preset-{name}"))
            .unwrap()
            .style
            .transform
            .scale
    };
    assert!(scale(125, "Twitter") > 0.0);
    assert_eq!(scale(139, "OG"), 0.0);
    assert!(scale(150, "OG") > 0.0);
}

#[test]
fn preset_labels_fade_in_late() {
    let label = |f: i64, name: &str| {
        at(f)
            .find(&format!("preset-label-{name}"))
            .unwrap()
            .style
            .opacity
    };
    assert_eq!(label(150, "Twitter"), 0.0);
    assert_eq!(label(165, "Twitter"), 1.0);
    assert_eq!(label(165, "OG"), 0.0);
    assert_eq!(label(185, "OG"), 1.0);
    assert_eq!(
        text_of(&at(170), "preset-label-OG"),
        Some("OG Image")
    );
}

use super::*;
use crate::config::props::LaunchProps;
use crate::foundation::core::Fps;
use crate::scene::style::Paint;

fn at(frame: i64) -> Node {
    let props = LaunchProps::default();
    intro(&SceneCtx::new(frame, Fps::integer(30), &props))
}

#[test]
fn starts_hidden() {
    let tree = at(0);
    assert_eq!(tree.find("introducing").unwrap().style.opacity, 0.0);
    let logo = tree.find("logo").unwrap();
    assert_eq!(logo.style.transform.scale, 0.0);
    assert_eq!(logo.style.opacity, 0.0);
    assert_eq!(tree.find("badge").unwrap().style.opacity, 0.0);
}

#[test]
fn logo_waits_for_its_delay_then_springs_in() {
    assert_eq!(at(15).find("logo").unwrap().style.transform.scale, 0.0);
    assert!(at(20).find("logo").unwrap().style.transform.scale > 0.0);

    let settled = at(100);
    let logo = settled.find("logo").unwrap();
    assert!((logo.style.transform.scale - 1.0).abs() < 1e-6);
    assert_eq!(logo.style.opacity, 1.0);
    assert_eq!(settled.find("introducing").unwrap().style.opacity, 1.0);
}

#[test]
fn accent_hue_ramps_from_210_to_230() {
    let color = |f| at(f).find("logo-accent").unwrap().style.color;
    assert_eq!(color(0), Some(Color::hsl(210.0, 0.65, 0.45)));
    assert_eq!(color(60), Some(Color::hsl(230.0, 0.65, 0.45)));
    assert_eq!(color(89), color(60));
}

#[test]
fn badge_rises_into_place_in_accent_color() {
    let badge = |f| at(f).find("badge").cloned().unwrap();
    assert_eq!(badge(50).style.transform.translate.y, 20.0);
    assert_eq!(badge(60).style.transform.translate.y, 10.0);
    assert_eq!(badge(70).style.transform.translate.y, 0.0);
    assert_eq!(badge(70).style.opacity, 1.0);
    assert_eq!(
        badge(70).style.background,
        Some(Paint::Solid(LaunchProps::default().accent_color))
    );
    assert!(badge(70).texts().contains(&"by Hot Off The Patent Press"));
}

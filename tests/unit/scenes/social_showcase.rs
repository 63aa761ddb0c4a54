use super::*;
use crate::config::props::LaunchProps;
use crate::foundation::core::Fps;

fn motion(frame: i64) -> PanelMotion {
    let props = LaunchProps::default();
    PanelMotion::at(&SceneCtx::new(frame, Fps::integer(30), &props))
}

#[test]
fn instagram_leads_then_others_wait_offscreen() {
    let m = motion(0);
    assert_eq!(m.instagram_x, 0.0);
    assert_eq!(m.instagram_opacity, 1.0);
    assert_eq!(m.linkedin_x, 800.0);
    assert_eq!(m.linkedin_opacity, 0.0);
    assert_eq!(m.facebook_x, 800.0);
    assert_eq!(m.facebook_opacity, 0.0);
    assert_eq!(motion(50).instagram_x, 0.0);
}

#[test]
fn linkedin_enters_holds_and_exits() {
    let m = motion(75);
    assert!(m.linkedin_x < 800.0 && m.linkedin_x > 0.0);
    assert_eq!(m.linkedin_opacity, 1.0);
    assert!(m.instagram_x < 0.0);

    let m = motion(100);
    assert_eq!(m.linkedin_x, 0.0);
    assert_eq!(m.linkedin_opacity, 1.0);

    let m = motion(120);
    assert!(m.linkedin_x < -300.0);
    assert_eq!(m.linkedin_opacity, 0.0);
}

#[test]
fn facebook_settles_by_the_end() {
    let m = motion(149);
    assert!(m.facebook_x.abs() < 1e-3);
    assert_eq!(m.facebook_opacity, 1.0);
    assert!((m.instagram_x + 800.0).abs() < 1e-3);
    assert!((m.instagram_opacity - 1.0 / 150.0).abs() < 1e-12);
}

#[test]
fn panels_carry_their_motion() {
    let props = LaunchProps::default();
    let tree = social_showcase(&SceneCtx::new(95, Fps::integer(30), &props));
    let m = motion(95);
    for (key, x, opacity) in [
        ("instagram", m.instagram_x, m.instagram_opacity),
        ("linkedin", m.linkedin_x, m.linkedin_opacity),
        ("facebook", m.facebook_x, m.facebook_opacity),
    ] {
        let panel = tree.find(key).unwrap();
        assert_eq!(panel.style.transform.translate.x, x, "{key}");
        assert_eq!(panel.style.opacity, opacity, "{key}");
        assert!(panel.style.clip);
    }
    assert_eq!(
        tree.walk()
            .filter(|n| n.key.as_deref() == Some("social-card"))
            .count(),
        3
    );
}

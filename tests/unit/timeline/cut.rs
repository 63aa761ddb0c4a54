use super::*;
use crate::foundation::core::FrameIndex;

#[test]
fn launch_cut_plays_every_scene_back_to_back() {
    let t = Cut::Launch.timeline();
    t.validate(540).unwrap();
    for f in 0..540 {
        assert_eq!(t.active(FrameIndex(f)).count(), 1, "frame {f}");
    }
    let scenes: Vec<SceneKind> = t.sequences().iter().map(|s| s.scene).collect();
    assert_eq!(
        scenes,
        vec![
            SceneKind::Intro,
            SceneKind::CardReveal,
            SceneKind::Transformations,
            SceneKind::ExportShowcase,
            SceneKind::Cta
        ]
    );
    assert_eq!(t.end(), FrameIndex(540));
}

#[test]
fn showcase_cut_overlays_cta_on_the_wall() {
    let t = Cut::Showcase.timeline();
    t.validate(540).unwrap();
    let at = |f| {
        t.active(FrameIndex(f))
            .map(|s| s.scene)
            .collect::<Vec<_>>()
    };
    assert_eq!(at(479), vec![SceneKind::ScrollingCards]);
    assert_eq!(at(480), vec![SceneKind::ScrollingCards, SceneKind::Cta]);
    assert_eq!(at(539), vec![SceneKind::ScrollingCards, SceneKind::Cta]);
    assert_eq!(at(100), vec![SceneKind::SocialShowcase]);
}

#[test]
fn parses_names_case_insensitively() {
    assert_eq!("launch".parse::<Cut>().unwrap(), Cut::Launch);
    assert_eq!(" Showcase ".parse::<Cut>().unwrap(), Cut::Showcase);
    let err = "trailer".parse::<Cut>().unwrap_err();
    assert!(err.to_string().contains("trailer"));
    for c in Cut::ALL {
        assert_eq!(c.to_string().parse::<Cut>().unwrap(), c);
    }
    assert_eq!(Cut::default(), Cut::Launch);
}

use super::*;
use crate::config::props::LaunchProps;
use crate::foundation::core::Fps;

fn ctx_at(frame: i64, props: &LaunchProps) -> SceneCtx<'_> {
    SceneCtx::new(frame, Fps::integer(30), props)
}

#[test]
fn devices_slide_in_from_opposite_sides() {
    let props = LaunchProps::default();
    assert_eq!(device_offsets(&ctx_at(0, &props)), (-400.0, 400.0));
    assert_eq!(device_offsets(&ctx_at(30, &props)).1, 400.0);

    let (phone, desktop) = device_offsets(&ctx_at(15, &props));
    assert!(phone > -400.0 && phone < 0.0);
    assert_eq!(desktop, 400.0);

    let (phone, desktop) = device_offsets(&ctx_at(149, &props));
    assert!(phone.abs() < 1e-3);
    assert!(desktop.abs() < 1e-3);
}

#[test]
fn mockups_follow_offsets_and_title_fades_in() {
    let props = LaunchProps::default();
    let ctx = ctx_at(40, &props);
    let tree = export_showcase(&ctx);
    let (phone, desktop) = device_offsets(&ctx);
    assert_eq!(tree.find("phone").unwrap().style.transform.translate.x, phone);
    assert_eq!(tree.find("desktop").unwrap().style.transform.translate.x, desktop);
    assert_eq!(tree.find("export-title").unwrap().style.opacity, 0.0);

    let later = export_showcase(&ctx_at(80, &props));
    let title = later.find("export-title").unwrap();
    assert_eq!(title.style.opacity, 1.0);
    assert_eq!(title.as_text(), Some("Export anywhere"));
    assert!(later.find("tabs").is_some());
}

#[test]
fn each_device_shows_a_card() {
    let props = LaunchProps::default();
    let tree = export_showcase(&ctx_at(100, &props));
    for key in ["phone", "desktop"] {
        assert!(tree.find(key).unwrap().find("social-card").is_some(), "{key}");
    }
}

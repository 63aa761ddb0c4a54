use super::*;
use crate::config::props::LaunchProps;
use crate::foundation::core::Fps;
use crate::scene::style::Paint;

fn card_at(frame: i64, props: &SocialCardProps) -> Node {
    let launch = LaunchProps::default();
    let ctx = SceneCtx::new(frame, Fps::integer(30), &launch);
    social_card(&ctx, props)
}

fn opacity(tree: &Node, key: &str) -> f64 {
    tree.find(key).map(|n| n.style.opacity).unwrap()
}

#[test]
fn default_card_shows_stock_copy() {
    let card = card_at(0, &SocialCardProps::default());
    assert_eq!(card.key.as_deref(), Some("social-card"));
    assert_eq!(card.style.width, Some(Dimension::Px(400.0)));
    assert_eq!(card.style.background, Some(Paint::Solid(Color::BLACK)));
    assert_eq!(card.find("name").and_then(Node::as_text), Some("Mockly"));
    assert_eq!(card.find("handle").and_then(Node::as_text), Some("@mockly.app"));
    assert_eq!(
        card.find("headline").and_then(Node::as_text),
        Some("Create beautiful social cards")
    );
    assert!(card.find("verified").is_some());
    assert!(card.find("image").is_none());
    assert!(card.texts().contains(&"M"));
}

#[test]
fn static_card_ignores_the_frame() {
    let props = SocialCardProps::default();
    assert_eq!(card_at(0, &props), card_at(37, &props));
    for key in ["name", "handle", "headline", "body"] {
        assert_eq!(opacity(&card_at(0, &props), key), 1.0);
    }
}

#[test]
fn animated_card_staggers_its_entrance() {
    let props = SocialCardProps {
        animated: true,
        show_image: true,
        ..SocialCardProps::default()
    };

    let start = card_at(0, &props);
    assert_eq!(start.find("avatar").unwrap().style.transform.scale, 0.0);
    for key in ["name", "handle", "headline", "body", "image"] {
        assert_eq!(opacity(&start, key), 0.0, "{key}");
    }

    let mid = card_at(35, &props);
    assert_eq!(opacity(&mid, "name"), 1.0);
    assert_eq!(opacity(&mid, "handle"), 1.0);
    assert!(opacity(&mid, "headline") > 0.0 && opacity(&mid, "headline") < 1.0);
    assert_eq!(opacity(&mid, "body"), 0.0);
    assert_eq!(opacity(&mid, "verified"), opacity(&mid, "name"));

    let done = card_at(100, &props);
    for key in ["name", "handle", "headline", "body", "image"] {
        assert_eq!(opacity(&done, key), 1.0, "{key}");
    }
    let avatar_scale = done.find("avatar").unwrap().style.transform.scale;
    assert!((avatar_scale - 1.0).abs() < 1e-6);
}

#[test]
fn image_geometry_from_width_inset_and_aspect() {
    let props = SocialCardProps::default();
    let g = props.image_geometry();
    assert_eq!(g.width, 380.0);
    assert_eq!(g.height, 214.0);
    assert_eq!(g.radius, 12.0);

    let tight = SocialCardProps {
        image_inset: 0.0,
        image_aspect_ratio: 1.0,
        ..SocialCardProps::default()
    };
    let g = tight.image_geometry();
    assert_eq!((g.width, g.height, g.radius), (400.0, 400.0, 4.0));

    let wide_inset = SocialCardProps {
        image_inset: 30.0,
        image_aspect_ratio: 0.0,
        ..SocialCardProps::default()
    };
    let g = wide_inset.image_geometry();
    assert_eq!(g.radius, 16.0);
    assert_eq!(g.height, 191.0);
}

#[test]
fn missing_image_url_shows_placeholder() {
    let props = SocialCardProps {
        show_image: true,
        ..SocialCardProps::default()
    };
    let card = card_at(0, &props);
    assert_eq!(
        card.find("image-placeholder").and_then(Node::as_text),
        Some("Your Image")
    );

    let props = SocialCardProps {
        image_url: Some("https://example.com/cat.png".to_owned()),
        ..props
    };
    let card = card_at(0, &props);
    assert!(card.find("image-placeholder").is_none());
    let image = card.find("image").unwrap();
    assert!(matches!(
        &image.children[0].kind,
        crate::scene::node::NodeKind::Image { src, .. } if src == "https://example.com/cat.png"
    ));
}

#[test]
fn optional_height_verified_and_scale() {
    let props = SocialCardProps {
        height: Some(200.0),
        show_verified: false,
        scale: 0.6,
        ..SocialCardProps::default()
    };
    let card = card_at(0, &props);
    assert_eq!(card.style.height, Some(Dimension::Px(200.0)));
    assert!(card.find("verified").is_none());
    assert_eq!(card.style.transform.scale, 0.6);
}

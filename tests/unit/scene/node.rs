use super::*;

fn sample_tree() -> Node {
    Node::column()
        .key("card")
        .child(Node::text("Mockly").key("name"))
        .child(
            Node::row()
                .key("meta")
                .child(Node::text("@mockly.app").key("handle"))
                .child(Node::verified(Color::hex(0x499aea), 20.0).key("badge")),
        )
        .child(Node::text("Body copy"))
}

#[test]
fn walk_is_depth_first_pre_order() {
    let tree = sample_tree();
    let keys: Vec<Option<&str>> = tree.walk().map(|n| n.key.as_deref()).collect();
    assert_eq!(
        keys,
        vec![
            Some("card"),
            Some("name"),
            Some("meta"),
            Some("handle"),
            Some("badge"),
            None
        ]
    );
    assert_eq!(tree.count(), 6);
}

#[test]
fn find_and_texts() {
    let tree = sample_tree();
    assert_eq!(tree.find("handle").and_then(Node::as_text), Some("@mockly.app"));
    assert!(tree.find("missing").is_none());
    assert_eq!(tree.texts(), vec!["Mockly", "@mockly.app", "Body copy"]);
}

#[test]
fn child_if_skips_none() {
    let n = Node::container()
        .child_if(None)
        .child_if(Some(Node::text("x")));
    assert_eq!(n.children.len(), 1);
}

#[test]
fn opacity_is_clamped_and_nan_hides() {
    assert_eq!(Node::container().opacity(1.7).style.opacity, 1.0);
    assert_eq!(Node::container().opacity(-0.2).style.opacity, 0.0);
    assert_eq!(Node::container().opacity(f64::NAN).style.opacity, 0.0);
    assert_eq!(Node::container().opacity(0.4).style.opacity, 0.4);
}

#[test]
fn fill_covers_parent() {
    let n = Node::fill();
    assert_eq!(n.style.position, Some(Position::Absolute));
    assert_eq!(n.style.top, Some(Dimension::Px(0.0)));
    assert_eq!(n.style.width, Some(Dimension::Percent(100.0)));
    assert_eq!(n.style.height, Some(Dimension::Percent(100.0)));
    assert_eq!(n.style.direction, Some(FlexDirection::Column));
}

#[test]
fn builders_set_style_fields() {
    let n = Node::row()
        .center()
        .gap(12.0)
        .padding(Edges::symmetric(8.0, 16.0))
        .background(Color::BLACK)
        .radius(12.0)
        .border(1.0, Color::WHITE, BorderSides::Bottom)
        .shadow(8.0, 32.0, Color::BLACK.with_alpha(0.3))
        .translate(10.0, -5.0)
        .scale(0.5)
        .clip()
        .blur(8.0);
    assert_eq!(n.style.align_items, Some(Align::Center));
    assert_eq!(n.style.justify_content, Some(Align::Center));
    assert_eq!(n.style.gap, Some(12.0));
    assert_eq!(n.style.padding.map(|p| p.left), Some(16.0));
    assert_eq!(n.style.background, Some(Paint::Solid(Color::BLACK)));
    assert_eq!(n.style.border_radius, Some(Dimension::Px(12.0)));
    assert_eq!(n.style.border.map(|b| b.sides), Some(BorderSides::Bottom));
    assert_eq!(n.style.transform.translate, Vec2::new(10.0, -5.0));
    assert_eq!(n.style.transform.scale, 0.5);
    assert!(n.style.clip);
    assert_eq!(n.style.blur, Some(8.0));
}

#[test]
fn images_cover_their_box() {
    let img = Node::image("https://example.com/a.png");
    assert_eq!(
        img.kind,
        NodeKind::Image {
            src: "https://example.com/a.png".to_owned(),
            fit: ImageFit::Cover
        }
    );
}

#[test]
fn serialization_omits_defaults() {
    let json = serde_json::to_value(Node::text("hi")).unwrap();
    assert_eq!(json, serde_json::json!({"kind": {"text": "hi"}, "style": {}}));

    let json = serde_json::to_value(Node::container().opacity(0.5).key("k")).unwrap();
    assert_eq!(json["key"], "k");
    assert_eq!(json["style"]["opacity"], 0.5);
    assert!(json["style"].get("transform").is_none());
}

#[test]
fn deserializes_what_it_serializes() {
    let tree = sample_tree().opacity(0.25).translate(3.0, 4.0);
    let json = serde_json::to_string(&tree).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

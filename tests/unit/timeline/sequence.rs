use super::*;

fn seq(name: &str, from: u64, duration: u64) -> Sequence {
    Sequence::new(name, from, duration, SceneKind::Intro)
}

#[test]
fn range_and_local_frame() {
    let s = seq("reveal", 90, 90);
    assert_eq!(s.range(), FrameRange::from_len(FrameIndex(90), 90));
    assert_eq!(s.local_frame(FrameIndex(90)), 0);
    assert_eq!(s.local_frame(FrameIndex(95)), 5);
    assert_eq!(s.local_frame(FrameIndex(80)), -10);

    let late = seq("late", 0, u64::MAX);
    assert!(late.local_frame(FrameIndex(u64::MAX - 1)) > 0);
}

#[test]
fn active_yields_covering_sequences_in_declaration_order() {
    let t = Timeline::new(vec![seq("wall", 0, 100), seq("cta", 50, 50), seq("tail", 100, 10)]);
    let names = |f| t.active(FrameIndex(f)).map(|s| s.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names(10), vec!["wall"]);
    assert_eq!(names(60), vec!["wall", "cta"]);
    assert_eq!(names(100), vec!["tail"]);
    assert!(names(110).is_empty());
    assert_eq!(t.end(), FrameIndex(110));
}

#[test]
fn validate_accepts_contiguous_and_overlapping_coverage() {
    Timeline::new(vec![seq("a", 0, 10), seq("b", 10, 10)])
        .validate(20)
        .unwrap();
    Timeline::new(vec![seq("a", 0, 15), seq("b", 5, 15)])
        .validate(20)
        .unwrap();
}

#[test]
fn validate_rejects_structural_problems() {
    let cases = [
        (Timeline::default(), "no sequences"),
        (Timeline::new(vec![seq(" ", 0, 20)]), "non-empty"),
        (Timeline::new(vec![seq("a", 0, 10), seq("a", 10, 10)]), "duplicate"),
        (Timeline::new(vec![seq("a", 0, 20), seq("b", 5, 0)]), "at least one frame"),
        (Timeline::new(vec![seq("a", 0, 25)]), "past the composition end"),
        (Timeline::new(vec![seq("a", u64::MAX, 2)]), "overflows"),
        (Timeline::new(vec![seq("a", 0, 10), seq("b", 12, 8)]), "frame 10"),
    ];
    for (t, needle) in cases {
        let err = t.validate(20).unwrap_err();
        assert!(err.to_string().contains(needle), "{err} should mention {needle}");
    }
}

#[test]
fn first_uncovered_finds_gaps_and_tails() {
    let t = Timeline::new(vec![seq("b", 10, 10), seq("a", 0, 10)]);
    assert_eq!(t.first_uncovered(20), None);
    assert_eq!(t.first_uncovered(25), Some(FrameIndex(20)));

    let t = Timeline::new(vec![seq("a", 5, 10)]);
    assert_eq!(t.first_uncovered(15), Some(FrameIndex(0)));
}

#[test]
fn serializes_as_a_plain_list() {
    let t = Timeline::new(vec![Sequence::new("cta", 510, 30, SceneKind::Cta)]);
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"name": "cta", "from": 510, "duration": 30, "scene": "cta"}])
    );
    let back: Timeline = serde_json::from_value(json).unwrap();
    assert_eq!(back, t);
}

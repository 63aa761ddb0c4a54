use super::*;

#[test]
fn frame_range_is_half_open() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
    assert!(!r.is_empty());
}

#[test]
fn frame_range_rejects_start_after_end() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn from_len_saturates_at_u64_max() {
    let r = FrameRange::from_len(FrameIndex(u64::MAX - 1), 10);
    assert_eq!(r.end, FrameIndex(u64::MAX));
    assert_eq!(r.len_frames(), 1);
}

#[test]
fn frames_iterates_every_index() {
    let r = FrameRange::from_len(FrameIndex(3), 3);
    let got: Vec<u64> = r.frames().map(|f| f.0).collect();
    assert_eq!(got, vec![3, 4, 5]);
}

#[test]
fn offset_from_is_signed() {
    assert_eq!(FrameIndex(95).offset_from(FrameIndex(90)), 5);
    assert_eq!(FrameIndex(80).offset_from(FrameIndex(90)), -10);
}

#[test]
fn offset_from_saturates_past_i64() {
    assert_eq!(FrameIndex(u64::MAX - 1).offset_from(FrameIndex(10)), i64::MAX);
    assert_eq!(FrameIndex(0).offset_from(FrameIndex(u64::MAX)), i64::MIN);
    let big = i64::MAX as u64 + 12;
    assert_eq!(FrameIndex(big).offset_from(FrameIndex(100)), i64::MAX - 88);
}

#[test]
fn fps_validation_and_conversions() {
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());

    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.as_f64() - 29.97).abs() < 0.001);

    let fps = Fps::integer(30);
    assert_eq!(fps.as_f64(), 30.0);
    assert!((fps.frame_duration_secs() - 1.0 / 30.0).abs() < 1e-15);
    assert!((fps.frames_to_secs(540.0) - 18.0).abs() < 1e-12);
    assert!((fps.frames_to_secs(-15.0) + 0.5).abs() < 1e-12);
}

use super::*;
use crate::foundation::color::Color;
use crate::scenes::SceneKind;
use crate::timeline::sequence::Sequence;

#[test]
fn default_config_is_eighteen_seconds_of_1080p30() {
    let c = VideoConfig::default();
    assert_eq!(c.fps, Fps::integer(30));
    assert_eq!((c.canvas.width, c.canvas.height), (1920, 1080));
    assert_eq!(c.duration_frames, 540);
    assert!((c.duration_secs() - 18.0).abs() < 1e-12);
    assert_eq!(c.range(), FrameRange::from_len(FrameIndex(0), 540));
    c.validate().unwrap();
}

#[test]
fn config_validation_rejects_degenerate_values() {
    let zero_duration = VideoConfig {
        duration_frames: 0,
        ..VideoConfig::default()
    };
    assert!(zero_duration.validate().is_err());

    let zero_canvas = VideoConfig {
        canvas: Canvas {
            width: 0,
            height: 1080,
        },
        ..VideoConfig::default()
    };
    assert!(zero_canvas.validate().is_err());
}

#[test]
fn every_cut_builds_a_valid_video() {
    for cut in Cut::ALL {
        let v = LaunchVideo::new(LaunchProps::default(), cut).unwrap();
        assert_eq!(v.duration_frames(), 540);
        assert_eq!(v.timeline(), &cut.timeline());
    }
    assert_eq!(
        LaunchVideo::default(),
        LaunchVideo::new(LaunchProps::default(), Cut::Launch).unwrap()
    );
}

#[test]
fn with_timeline_rejects_gaps_and_overruns() {
    let gap = Timeline::new(vec![
        Sequence::new("a", 0, 10, SceneKind::Intro),
        Sequence::new("b", 20, 10, SceneKind::Cta),
    ]);
    let config = VideoConfig {
        duration_frames: 30,
        ..VideoConfig::default()
    };
    let err = LaunchVideo::with_timeline(config, LaunchProps::default(), gap).unwrap_err();
    assert!(err.to_string().contains("frame 10"));

    let overrun = Timeline::new(vec![Sequence::new("a", 0, 40, SceneKind::Intro)]);
    assert!(LaunchVideo::with_timeline(config, LaunchProps::default(), overrun).is_err());

    let fits = Timeline::new(vec![Sequence::new("a", 0, 30, SceneKind::Intro)]);
    let v = LaunchVideo::with_timeline(config, LaunchProps::default(), fits).unwrap();
    assert_eq!(v.duration_frames(), 30);
}

#[test]
fn translucent_background_fails_video_validation() {
    let props = LaunchProps {
        background_color: Color::BLACK.with_alpha(0.5),
        ..LaunchProps::default()
    };
    assert!(LaunchVideo::new(props, Cut::Launch).is_err());
}

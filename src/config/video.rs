use serde::{Deserialize, Serialize};

use crate::config::props::LaunchProps;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{LaunchError, LaunchResult};
use crate::timeline::cut::Cut;
use crate::timeline::sequence::Timeline;

/// Playback parameters owned by the rendering host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Frame rate.
    pub fps: Fps,
    /// Output resolution.
    pub canvas: Canvas,
    /// Total length in frames.
    pub duration_frames: u64,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            fps: Fps::integer(30),
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            duration_frames: 540,
        }
    }
}

impl VideoConfig {
    /// Validate playback parameters.
    pub fn validate(&self) -> LaunchResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(LaunchError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(LaunchError::validation("canvas width/height must be > 0"));
        }
        if self.duration_frames == 0 {
            return Err(LaunchError::validation("duration must be > 0 frames"));
        }
        Ok(())
    }

    /// Whole-video frame range.
    pub fn range(&self) -> FrameRange {
        FrameRange::from_len(FrameIndex(0), self.duration_frames)
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_frames as f64)
    }
}

/// Composition root: playback config, props and timeline, validated together.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LaunchVideo {
    config: VideoConfig,
    props: LaunchProps,
    timeline: Timeline,
}

impl LaunchVideo {
    /// Build the video for a preset cut with the default playback config.
    pub fn new(props: LaunchProps, cut: Cut) -> LaunchResult<Self> {
        Self::with_timeline(VideoConfig::default(), props, cut.timeline())
    }

    /// Build from explicit parts.
    pub fn with_timeline(
        config: VideoConfig,
        props: LaunchProps,
        timeline: Timeline,
    ) -> LaunchResult<Self> {
        let video = Self {
            config,
            props,
            timeline,
        };
        video.validate()?;
        Ok(video)
    }

    /// Re-check every part.
    pub fn validate(&self) -> LaunchResult<()> {
        self.config.validate()?;
        self.props.validate()?;
        self.timeline.validate(self.config.duration_frames)
    }

    /// Playback config.
    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    /// Props.
    pub fn props(&self) -> &LaunchProps {
        &self.props
    }

    /// Timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Total length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.config.duration_frames
    }
}

impl Default for LaunchVideo {
    fn default() -> Self {
        Self {
            config: VideoConfig::default(),
            props: LaunchProps::default(),
            timeline: Cut::default().timeline(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/video.rs"]
mod tests;

use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps, FrameRange};
use crate::foundation::error::LaunchResult;
use crate::render::pipeline::RenderedFrame;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Output resolution.
    pub canvas: Canvas,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Composition background.
    pub background: Color,
    /// Frames that will be pushed.
    pub range: FrameRange,
}

/// Sink contract for consuming evaluated frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing frame order within the
/// requested render range.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> LaunchResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, frame: &RenderedFrame) -> LaunchResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> LaunchResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<RenderedFrame>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[RenderedFrame] {
        &self.frames
    }

    /// Return `true` once `end` was called.
    pub fn is_finished(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LaunchResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &RenderedFrame) -> LaunchResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> LaunchResult<()> {
        self.ended = true;
        Ok(())
    }
}

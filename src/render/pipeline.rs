use std::sync::Arc;

use rayon::prelude::*;

use crate::config::video::LaunchVideo;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::eval::evaluator::{ActiveScene, Evaluator, Frame};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{LaunchError, LaunchResult};
use crate::render::fingerprint::{FrameFingerprint, fingerprint_tree};
use crate::scene::node::Node;

/// Evaluated frame as emitted by the pipeline.
///
/// With static-frame elision, consecutive frames with identical trees share one `root`.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFrame {
    /// Timeline frame.
    pub index: FrameIndex,
    /// Active sequences in paint order.
    pub active: Vec<ActiveScene>,
    /// Visual tree.
    pub root: Arc<Node>,
    /// Fingerprint of `root` over the composition background.
    pub fingerprint: FrameFingerprint,
}

impl RenderedFrame {
    fn from_frame(frame: Frame) -> Self {
        let fingerprint = fingerprint_tree(frame.background, &frame.root);
        Self {
            index: frame.frame,
            active: frame.active,
            root: Arc::new(frame.root),
            fingerprint,
        }
    }
}

/// Evaluate and fingerprint a single frame.
pub fn render_frame(video: &LaunchVideo, frame: FrameIndex) -> LaunchResult<RenderedFrame> {
    Evaluator::eval_frame(video, frame).map(RenderedFrame::from_frame)
}

/// Render a range of frames (inclusive start, exclusive end) sequentially.
pub fn render_frames(video: &LaunchVideo, range: FrameRange) -> LaunchResult<Vec<RenderedFrame>> {
    render_frames_with_stats(video, range, &RenderThreading::default()).map(|(frames, _)| frames)
}

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Evaluate frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Share the tree of a frame identical to its predecessor instead of keeping a copy.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Aggregated rendering counters.
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames emitted with their own tree.
    pub frames_rendered: u64,
    /// Frames reusing the previous frame's tree via static-frame elision.
    pub frames_elided: u64,
}

impl RenderStats {
    fn absorb(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_rendered += other.frames_rendered;
        self.frames_elided += other.frames_elided;
    }
}

/// Render a frame range and return both frames and stats.
pub fn render_frames_with_stats(
    video: &LaunchVideo,
    range: FrameRange,
    threading: &RenderThreading,
) -> LaunchResult<(Vec<RenderedFrame>, RenderStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = drive(video, range, threading, |chunk| {
        out.extend(chunk);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Render a frame range straight into `sink`, chunk by chunk.
#[tracing::instrument(skip(video, sink, threading))]
pub fn render_to_sink(
    video: &LaunchVideo,
    range: FrameRange,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
) -> LaunchResult<RenderStats> {
    check_render_range(video, range)?;
    let config = video.config();
    sink.begin(SinkConfig {
        canvas: config.canvas,
        fps: config.fps,
        background: video.props().background_color,
        range,
    })?;
    let stats = drive(video, range, threading, |chunk| {
        for f in &chunk {
            sink.push_frame(f)?;
        }
        Ok(())
    })?;
    sink.end()?;
    tracing::info!(
        frames = stats.frames_total,
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "render finished"
    );
    Ok(stats)
}

/// Check that `range` is renderable for `video` before any output is touched.
///
/// The range must be non-empty and end within the composition duration.
pub fn check_render_range(video: &LaunchVideo, range: FrameRange) -> LaunchResult<()> {
    if range.is_empty() {
        return Err(LaunchError::validation("render range must be non-empty"));
    }
    if range.end.0 > video.duration_frames() {
        return Err(LaunchError::validation(
            "render range must be within composition duration",
        ));
    }
    video.validate()
}

fn drive(
    video: &LaunchVideo,
    range: FrameRange,
    threading: &RenderThreading,
    mut emit: impl FnMut(Vec<RenderedFrame>) -> LaunchResult<()>,
) -> LaunchResult<RenderStats> {
    check_render_range(video, range)?;

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut stats = RenderStats::default();
    let mut prev: Option<RenderedFrame> = None;
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| LaunchError::evaluation(format!("invalid chunk range: {e}")))?;

        let frames = match &pool {
            Some(pool) => eval_chunk_parallel(video, chunk, pool)?,
            None => eval_chunk_sequential(video, chunk)?,
        };
        let (frames, chunk_stats) = if threading.static_frame_elision {
            elide_static(frames, &mut prev)
        } else {
            let n = frames.len() as u64;
            (
                frames,
                RenderStats {
                    frames_total: n,
                    frames_rendered: n,
                    frames_elided: 0,
                },
            )
        };
        tracing::debug!(
            start = chunk_start,
            end = chunk_end,
            elided = chunk_stats.frames_elided,
            "chunk evaluated"
        );
        stats.absorb(chunk_stats);
        emit(frames)?;
        chunk_start = chunk_end;
    }
    Ok(stats)
}

fn eval_chunk_sequential(
    video: &LaunchVideo,
    range: FrameRange,
) -> LaunchResult<Vec<RenderedFrame>> {
    range.frames().map(|f| render_frame(video, f)).collect()
}

fn eval_chunk_parallel(
    video: &LaunchVideo,
    range: FrameRange,
    pool: &rayon::ThreadPool,
) -> LaunchResult<Vec<RenderedFrame>> {
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| render_frame(video, FrameIndex(f)))
            .collect::<LaunchResult<Vec<_>>>()
    })
}

fn elide_static(
    frames: Vec<RenderedFrame>,
    prev: &mut Option<RenderedFrame>,
) -> (Vec<RenderedFrame>, RenderStats) {
    let mut stats = RenderStats::default();
    let mut out = Vec::with_capacity(frames.len());
    for mut f in frames {
        stats.frames_total += 1;
        match prev.as_ref() {
            Some(p) if p.fingerprint == f.fingerprint => {
                f.root = Arc::clone(&p.root);
                stats.frames_elided += 1;
            }
            _ => stats.frames_rendered += 1,
        }
        *prev = Some(f.clone());
        out.push(f);
    }
    (out, stats)
}

fn build_thread_pool(threads: Option<usize>) -> LaunchResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(LaunchError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| LaunchError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;

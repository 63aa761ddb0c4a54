//! Frame-driven scene composition for the Mockly launch video.
//!
//! Every scene is a pure function from a frame index and static props to an immutable visual
//! tree. A timeline maps frame ranges to scenes; the evaluator stitches the active scenes of a
//! frame into one full-canvas tree that a rendering host rasterizes and encodes.
//!
//! - Build a [`LaunchVideo`] from [`LaunchProps`] and a [`Cut`]
//! - Evaluate single frames with [`Evaluator::eval_frame`]
//! - Stream a range into a [`FrameSink`] with [`render_to_sink`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Reusable visual components.
pub mod components;
/// Playback config, props and the composition root.
pub mod config;
/// Static content tables.
pub mod content;
/// Frame sinks.
pub mod encode;
/// Frame evaluation.
pub mod eval;
/// Range rendering.
pub mod render;
/// Immutable visual tree model.
pub mod scene;
/// Scene functions.
pub mod scenes;
/// Scene placement over time.
pub mod timeline;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Vec2};
pub use crate::foundation::error::{LaunchError, LaunchResult};

pub use crate::animation::cycle::{cycle, cycle_index};
pub use crate::animation::interpolate::{
    Extrapolate, InterpolateOpts, Interpolation, interpolate, interpolate_with,
};
pub use crate::animation::spring::{Spring, SpringConfig, spring};

pub use crate::components::social_card::{SocialCardProps, social_card};
pub use crate::config::props::LaunchProps;
pub use crate::config::video::{LaunchVideo, VideoConfig};
pub use crate::encode::jsonl::JsonLinesSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::eval::context::SceneCtx;
pub use crate::eval::evaluator::{ActiveScene, Evaluator, Frame};
pub use crate::render::fingerprint::{FrameFingerprint, fingerprint_tree};
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, RenderedFrame, check_render_range, render_frame, render_frames,
    render_frames_with_stats, render_to_sink,
};
pub use crate::scene::node::{Node, NodeKind};
pub use crate::scene::style::Style;
pub use crate::scenes::SceneKind;
pub use crate::timeline::cut::Cut;
pub use crate::timeline::sequence::{Sequence, Timeline};

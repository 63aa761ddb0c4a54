use serde::Serialize;

use crate::config::video::LaunchVideo;
use crate::eval::context::SceneCtx;
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{LaunchError, LaunchResult};
use crate::scene::node::Node;
use crate::scenes::SceneKind;

/// Sequence active at an evaluated frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActiveScene {
    /// Sequence name.
    pub name: String,
    /// Scene rendered by the sequence.
    pub scene: SceneKind,
    /// Scene-local frame (0 at the sequence start).
    pub local_frame: i64,
}

/// Fully evaluated frame handed to the rendering host.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    /// Timeline frame.
    pub frame: FrameIndex,
    /// Output resolution.
    pub canvas: Canvas,
    /// Composition background under every scene.
    pub background: Color,
    /// Active sequences in paint order.
    pub active: Vec<ActiveScene>,
    /// Full-canvas root; one child per active scene, in paint order.
    pub root: Node,
}

/// Stateless evaluator from timeline to visual tree.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame of `video`.
    ///
    /// Fails only for frames outside `[0, duration)`.
    #[tracing::instrument(skip(video))]
    pub fn eval_frame(video: &LaunchVideo, frame: FrameIndex) -> LaunchResult<Frame> {
        let duration = video.duration_frames();
        if frame.0 >= duration {
            return Err(LaunchError::evaluation(format!(
                "frame {} is out of bounds (duration {duration})",
                frame.0
            )));
        }

        let config = video.config();
        let props = video.props();
        let mut active = Vec::new();
        let mut root = Node::fill()
            .key("root")
            .size_px(f64::from(config.canvas.width), f64::from(config.canvas.height))
            .background(props.background_color)
            .clip();

        for seq in video.timeline().active(frame) {
            let local_frame = seq.local_frame(frame);
            let ctx = SceneCtx::new(local_frame, config.fps, props);
            root = root.child(seq.scene.render(&ctx));
            active.push(ActiveScene {
                name: seq.name.clone(),
                scene: seq.scene,
                local_frame,
            });
        }
        if active.is_empty() {
            tracing::warn!(frame = frame.0, "no sequence covers frame");
        }

        Ok(Frame {
            frame,
            canvas: config.canvas,
            background: props.background_color,
            active,
            root,
        })
    }

    /// Evaluate a single scene at a scene-local frame, outside any timeline.
    pub fn eval_scene(video: &LaunchVideo, scene: SceneKind, local_frame: i64) -> Node {
        let ctx = SceneCtx::new(local_frame, video.config().fps, video.props());
        scene.render(&ctx)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::LaunchResult;
use crate::render::pipeline::RenderedFrame;
use crate::scene::node::Node;

/// Sink writing one JSON object per frame, one per line:
/// `{"frame":N,"scenes":[...],"root":{...}}`.
///
/// Frames sharing a tree with the previous frame (static-frame elision) reuse its serialized
/// text instead of serializing again.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    last: Option<(Arc<Node>, String)>,
    lines: u64,
}

#[derive(Serialize)]
struct Line<'a> {
    frame: FrameIndex,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scenes: Vec<&'a str>,
    root: &'a serde_json::value::RawValue,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            lines: 0,
        }
    }

    /// Records written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn root_json(&mut self, root: &Arc<Node>) -> LaunchResult<String> {
        if let Some((prev, text)) = &self.last
            && Arc::ptr_eq(prev, root)
        {
            return Ok(text.clone());
        }
        let text = serde_json::to_string(root.as_ref())?;
        self.last = Some((Arc::clone(root), text.clone()));
        Ok(text)
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> LaunchResult<()> {
        self.last = None;
        self.lines = 0;
        Ok(())
    }

    fn push_frame(&mut self, frame: &RenderedFrame) -> LaunchResult<()> {
        let root = self.root_json(&frame.root)?;
        let raw = serde_json::value::RawValue::from_string(root)?;
        let line = Line {
            frame: frame.index,
            scenes: frame.active.iter().map(|a| a.name.as_str()).collect(),
            root: &raw,
        };
        serde_json::to_writer(&mut self.out, &line)?;
        self.out.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    fn end(&mut self) -> LaunchResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/jsonl.rs"]
mod tests;

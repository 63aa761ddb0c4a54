use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{LaunchError, LaunchResult};
use crate::scenes::SceneKind;

/// One scene placed on the timeline over `[from, from + duration)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Unique sequence name.
    pub name: String,
    /// First timeline frame.
    pub from: FrameIndex,
    /// Length in frames.
    pub duration: u64,
    /// Scene rendered while active.
    pub scene: SceneKind,
}

impl Sequence {
    /// Build a sequence.
    pub fn new(name: impl Into<String>, from: u64, duration: u64, scene: SceneKind) -> Self {
        Self {
            name: name.into(),
            from: FrameIndex(from),
            duration,
            scene,
        }
    }

    /// Half-open frame range covered by this sequence.
    pub fn range(&self) -> FrameRange {
        FrameRange::from_len(self.from, self.duration)
    }

    /// Scene-local frame for timeline frame `frame` (negative before the start).
    pub fn local_frame(&self, frame: FrameIndex) -> i64 {
        frame.offset_from(self.from)
    }
}

/// Ordered list of sequences. Declaration order is paint order where sequences overlap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    sequences: Vec<Sequence>,
}

impl Timeline {
    /// Wrap sequences without validating them; see [`Timeline::validate`].
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self { sequences }
    }

    /// All sequences in declaration order.
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Sequences covering `frame`, in paint order.
    pub fn active(&self, frame: FrameIndex) -> impl Iterator<Item = &Sequence> {
        self.sequences
            .iter()
            .filter(move |s| s.range().contains(frame))
    }

    /// One past the last frame any sequence covers.
    pub fn end(&self) -> FrameIndex {
        self.sequences
            .iter()
            .map(|s| s.range().end)
            .max()
            .unwrap_or(FrameIndex(0))
    }

    /// Check the timeline against a composition of `duration` frames.
    ///
    /// Rejects empty or duplicate-named sequences, sequences running past the end, and frames
    /// no sequence covers.
    pub fn validate(&self, duration: u64) -> LaunchResult<()> {
        if self.sequences.is_empty() {
            return Err(LaunchError::validation("timeline has no sequences"));
        }

        let mut names = HashSet::new();
        for s in &self.sequences {
            if s.name.trim().is_empty() {
                return Err(LaunchError::validation("sequence name must be non-empty"));
            }
            if !names.insert(s.name.as_str()) {
                return Err(LaunchError::validation(format!(
                    "duplicate sequence name '{}'",
                    s.name
                )));
            }
            if s.duration == 0 {
                return Err(LaunchError::validation(format!(
                    "sequence '{}' must last at least one frame",
                    s.name
                )));
            }
            let end = s.from.0.checked_add(s.duration).ok_or_else(|| {
                LaunchError::validation(format!("sequence '{}' range overflows", s.name))
            })?;
            if end > duration {
                return Err(LaunchError::validation(format!(
                    "sequence '{}' ends at frame {end}, past the composition end {duration}",
                    s.name
                )));
            }
        }

        if let Some(gap) = self.first_uncovered(duration) {
            return Err(LaunchError::validation(format!(
                "frame {} is not covered by any sequence",
                gap.0
            )));
        }
        Ok(())
    }

    /// First frame in `[0, duration)` no sequence covers.
    pub fn first_uncovered(&self, duration: u64) -> Option<FrameIndex> {
        let mut ranges: Vec<FrameRange> = self.sequences.iter().map(Sequence::range).collect();
        ranges.sort_by_key(|r| r.start);

        let mut covered = 0u64;
        for r in ranges {
            if r.start.0 > covered {
                break;
            }
            covered = covered.max(r.end.0);
        }
        (covered < duration).then_some(FrameIndex(covered))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;

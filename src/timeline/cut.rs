use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::foundation::error::LaunchError;
use crate::scenes::SceneKind;
use crate::timeline::sequence::{Sequence, Timeline};

/// Named timeline preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cut {
    /// Shipped cut: intro, card reveal, transformations, export mockups, call to action.
    #[default]
    Launch,
    /// Alternate cut built around the feed mockups and the scrolling wall, with the call to
    /// action overlaid on the blurred wall.
    Showcase,
}

impl Cut {
    /// Every preset.
    pub const ALL: [Cut; 2] = [Cut::Launch, Cut::Showcase];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Cut::Launch => "launch",
            Cut::Showcase => "showcase",
        }
    }

    /// Sequences of this cut in paint order.
    pub fn timeline(self) -> Timeline {
        let seqs = match self {
            Cut::Launch => vec![
                Sequence::new("intro", 0, 90, SceneKind::Intro),
                Sequence::new("card_reveal", 90, 90, SceneKind::CardReveal),
                Sequence::new("transformations", 180, 180, SceneKind::Transformations),
                Sequence::new("export_showcase", 360, 150, SceneKind::ExportShowcase),
                Sequence::new("cta", 510, 30, SceneKind::Cta),
            ],
            Cut::Showcase => vec![
                Sequence::new("intro", 0, 90, SceneKind::Intro),
                Sequence::new("social_showcase", 90, 150, SceneKind::SocialShowcase),
                Sequence::new("export_showcase", 240, 120, SceneKind::ExportShowcase),
                Sequence::new("scrolling_cards", 360, 180, SceneKind::ScrollingCards),
                Sequence::new("cta", 480, 60, SceneKind::Cta),
            ],
        };
        Timeline::new(seqs)
    }
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cut {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| {
                LaunchError::validation(format!(
                    "unknown cut '{s}' (expected one of: launch, showcase)"
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/cut.rs"]
mod tests;

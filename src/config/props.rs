use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::content::tables::brand;
use crate::foundation::color::Color;
use crate::foundation::error::{LaunchError, LaunchResult};

/// Externally supplied parameters of the launch video.
///
/// Accepts camelCase keys as well as snake_case.
/// Missing keys fall back to the documented defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LaunchProps {
    /// Dark primary tone (CTA badge text).
    #[serde(default = "default_primary", alias = "primary_color")]
    pub primary_color: Color,
    /// Accent tone (badges, logo highlight).
    #[serde(default = "default_accent", alias = "accent_color")]
    pub accent_color: Color,
    /// Composition background behind every scene.
    #[serde(default = "default_background", alias = "background_color")]
    pub background_color: Color,
}

fn default_primary() -> Color {
    brand::SURFACE
}

fn default_accent() -> Color {
    brand::BLUE
}

fn default_background() -> Color {
    brand::SURFACE
}

impl Default for LaunchProps {
    fn default() -> Self {
        Self {
            primary_color: default_primary(),
            accent_color: default_accent(),
            background_color: default_background(),
        }
    }
}

impl LaunchProps {
    /// Parse props from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LaunchResult<Self> {
        let props: Self = serde_json::from_reader(r)
            .map_err(|e| LaunchError::validation(format!("parse launch props JSON: {e}")))?;
        props.validate()?;
        Ok(props)
    }

    /// Parse props from a JSON string.
    pub fn from_json_str(s: &str) -> LaunchResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse props from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LaunchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LaunchError::validation(format!("open launch props JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check invariants the scenes rely on.
    pub fn validate(&self) -> LaunchResult<()> {
        if self.background_color.a != 255 {
            return Err(LaunchError::validation(format!(
                "backgroundColor must be opaque, got {}",
                self.background_color
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/props.rs"]
mod tests;

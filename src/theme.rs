//! Display Theme Module
//! Advisory styling for the rendering collaborator. The engine never draws;
//! it hands out a `Theme` value and per-result `DisplayHints` and leaves the
//! rest to the caller.

use serde::{Deserialize, Serialize};

use crate::ranking::Preference;

/// Chart styling passed explicitly to the render call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub panel: String,
    pub text: String,
    pub title: String,
    /// Accent used when lower values are preferred.
    pub accent_lower: String,
    /// Accent used when higher values are preferred.
    pub accent_higher: String,
    pub scatter_point: String,
    pub grid_alpha: f32,
    /// Per-parameter colors for stacked weighted-score bars.
    pub stack_palette: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#0d1b2a".into(),
            panel: "#1b263b".into(),
            text: "#e0f7fa".into(),
            title: "#80d0c7".into(),
            accent_lower: "#00bcd4".into(),
            accent_higher: "#ff9800".into(),
            scatter_point: "#80d0c7".into(),
            grid_alpha: 0.2,
            stack_palette: vec![
                "#FF6F61".into(),
                "#FFD54F".into(),
                "#4FC3F7".into(),
                "#81C784".into(),
                "#BA68C8".into(),
            ],
        }
    }
}

impl Theme {
    /// Suggested bar/point color for a preference direction.
    pub fn accent_for(&self, preference: Preference) -> &str {
        match preference {
            Preference::Lower => &self.accent_lower,
            Preference::Higher => &self.accent_higher,
        }
    }
}

/// Rendering advice attached to a ranking result. Purely advisory: the
/// log-scale flag is detected from the data, never applied to it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DisplayHints {
    /// Value spread exceeds three orders of magnitude; a log axis reads better.
    pub log_scale: bool,
    /// Preference direction, for accent color selection (`Theme::accent_for`).
    pub preference: Preference,
    /// Horizontal bars (labels on the y-axis) suggested.
    pub horizontal: bool,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Collect the colors of every matching rule. When `false` the match
    /// pass stops at the first hit and the swatch is a single color.
    #[serde(default = "default_allow_multiple_matches")]
    pub allow_multiple_matches: bool,
    /// Blend consecutive matched colors across the swatch width instead of
    /// drawing solid blocks.
    #[serde(default)]
    pub use_gradient_blend: bool,
    /// Offset applied to the label region within the annotated row.
    #[serde(default = "default_label_indent")]
    pub label_indent: (f32, f32),
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_allow_multiple_matches() -> bool {
    true
}

fn default_label_indent() -> (f32, f32) {
    (14.0, 0.0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_multiple_matches: true,
            use_gradient_blend: false,
            label_indent: default_label_indent(),
            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

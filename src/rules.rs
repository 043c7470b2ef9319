use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Which item attribute a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Exact match against the item's tag.
    Tag,
    /// Match text parsed as a non-negative layer index.
    Layer,
    /// Exact match against the item's display name.
    Name,
    /// Item owns a component of the named type.
    Component,
}

impl RuleKind {
    pub const ALL: [RuleKind; 4] = [
        RuleKind::Tag,
        RuleKind::Layer,
        RuleKind::Name,
        RuleKind::Component,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RuleKind::Tag => "Tag",
            RuleKind::Layer => "Layer",
            RuleKind::Name => "Name",
            RuleKind::Component => "Component",
        }
    }
}

/// One user-authored row of the rule list. The interpretation of
/// `match_text` depends on `kind`; the editing surface keeps it valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub kind: RuleKind,
    pub match_text: String,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub override_label_color: bool,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
}

fn default_label_color() -> Color {
    Color::BLACK
}

impl Rule {
    pub fn new(kind: RuleKind, match_text: impl Into<String>, color: Color) -> Self {
        Self {
            kind,
            match_text: match_text.into(),
            color,
            override_label_color: false,
            label_color: Color::BLACK,
        }
    }
}

pub fn load_rules(path: &str) -> anyhow::Result<Vec<Rule>> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

pub fn save_rules(path: &str, rules: &[Rule]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(rules)?;
    std::fs::write(path, json)?;
    Ok(())
}

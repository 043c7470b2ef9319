use crate::item::TreeItem;
use crate::rules::{Rule, RuleKind};

/// A rule whose match text cannot be interpreted for its kind. The rule is
/// skipped for the rest of the pass; matching never aborts on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRule {
    pub kind: RuleKind,
    pub match_text: String,
}

impl std::fmt::Display for MalformedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rule with unusable match text '{}'",
            self.kind.label(),
            self.match_text
        )
    }
}

/// Decide whether a single rule applies to a single item.
pub fn rule_matches(rule: &Rule, item: &dyn TreeItem) -> Result<bool, MalformedRule> {
    match rule.kind {
        RuleKind::Tag => Ok(rule.match_text == item.tag()),
        RuleKind::Layer => match rule.match_text.trim().parse::<u32>() {
            Ok(layer) => Ok(layer == item.layer_index()),
            Err(_) => Err(MalformedRule {
                kind: rule.kind,
                match_text: rule.match_text.clone(),
            }),
        },
        RuleKind::Name => Ok(rule.match_text == item.display_name()),
        RuleKind::Component => {
            if rule.match_text.is_empty() {
                Ok(false)
            } else {
                Ok(item.has_component(&rule.match_text))
            }
        }
    }
}

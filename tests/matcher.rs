use tree_tint::color::Color;
use tree_tint::matcher::rule_matches;
use tree_tint::rules::{Rule, RuleKind};
use tree_tint::scene::SceneNode;

fn grunt() -> SceneNode {
    SceneNode::new("Grunt")
        .tag("Enemy")
        .layer(2)
        .component("PatrolBrain")
}

#[test]
fn tag_rule_requires_exact_equality() {
    let rule = Rule::new(RuleKind::Tag, "Enemy", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(true));

    let rule = Rule::new(RuleKind::Tag, "enemy", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(false));
}

#[test]
fn layer_rule_compares_the_parsed_index() {
    let rule = Rule::new(RuleKind::Layer, "2", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(true));

    let rule = Rule::new(RuleKind::Layer, "3", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(false));
}

#[test]
fn layer_rule_tolerates_surrounding_whitespace() {
    let rule = Rule::new(RuleKind::Layer, " 2 ", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(true));
}

#[test]
fn unparsable_layer_text_is_reported_not_matched() {
    let rule = Rule::new(RuleKind::Layer, "abc", Color::WHITE);
    let err = rule_matches(&rule, &grunt()).unwrap_err();
    assert_eq!(err.kind, RuleKind::Layer);
    assert_eq!(err.match_text, "abc");
}

#[test]
fn negative_layer_text_is_malformed() {
    let rule = Rule::new(RuleKind::Layer, "-1", Color::WHITE);
    assert!(rule_matches(&rule, &grunt()).is_err());
}

#[test]
fn name_rule_matches_the_display_name() {
    let rule = Rule::new(RuleKind::Name, "Grunt", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(true));

    let rule = Rule::new(RuleKind::Name, "Gru", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(false));
}

#[test]
fn component_rule_checks_ownership() {
    let rule = Rule::new(RuleKind::Component, "PatrolBrain", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(true));
}

#[test]
fn empty_component_text_never_matches() {
    let rule = Rule::new(RuleKind::Component, "", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(false));
}

#[test]
fn unknown_component_type_is_no_match_not_an_error() {
    // Stale descriptors are expected, e.g. after the host reloads its
    // type universe.
    let rule = Rule::new(RuleKind::Component, "RemovedBehaviour", Color::WHITE);
    assert_eq!(rule_matches(&rule, &grunt()), Ok(false));
}

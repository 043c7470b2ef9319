use tree_tint::color::Color;
use tree_tint::rules::{load_rules, save_rules, Rule, RuleKind};
use tree_tint::settings::Settings;

#[test]
fn rules_roundtrip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    let path = path.to_str().unwrap();

    let mut boss = Rule::new(RuleKind::Name, "Boss", Color::rgb(0, 0, 255));
    boss.override_label_color = true;
    boss.label_color = Color::rgb(255, 255, 0);
    let rules = vec![
        Rule::new(RuleKind::Tag, "Enemy", Color::rgb(255, 0, 0)),
        Rule::new(RuleKind::Layer, "8", Color::rgb(40, 120, 40)),
        boss,
    ];

    save_rules(path, &rules).unwrap();
    assert_eq!(load_rules(path).unwrap(), rules);
}

#[test]
fn missing_rule_fields_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(&path, r#"[{"kind":"tag","match_text":"Enemy"}]"#).unwrap();

    let rules = load_rules(path.to_str().unwrap()).unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].color, Color::WHITE);
    assert!(!rules[0].override_label_color);
    assert_eq!(rules[0].label_color, Color::BLACK);
}

#[test]
fn missing_rules_file_loads_as_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    assert!(load_rules(path.to_str().unwrap()).unwrap().is_empty());
}

#[test]
fn settings_roundtrip_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();

    let settings = Settings {
        allow_multiple_matches: false,
        use_gradient_blend: true,
        label_indent: (20.0, 2.0),
        debug_logging: true,
    };
    settings.save(path).unwrap();
    assert_eq!(Settings::load(path).unwrap(), settings);
}

#[test]
fn partial_settings_file_keeps_field_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"use_gradient_blend":true}"#).unwrap();

    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.use_gradient_blend);
    assert!(settings.allow_multiple_matches);
    assert_eq!(settings.label_indent, (14.0, 0.0));
    assert!(!settings.debug_logging);
}

#[test]
fn missing_settings_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert_eq!(
        Settings::load(path.to_str().unwrap()).unwrap(),
        Settings::default()
    );
}

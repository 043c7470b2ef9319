use tree_tint::annotate::AnnotationContext;
use tree_tint::logging;
use tree_tint::rules::load_rules;
use tree_tint::scene::sample_scene;
use tree_tint::settings::Settings;
use tree_tint::viewer::ViewerApp;

use eframe::egui;

const RULES_FILE: &str = "rules.json";
const SETTINGS_FILE: &str = "settings.json";

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging);

    let rules = match load_rules(RULES_FILE) {
        Ok(rules) => rules,
        Err(e) => {
            tracing::warn!("failed to load rules from {RULES_FILE}: {e}");
            Vec::new()
        }
    };
    tracing::info!(rule_count = rules.len(), "starting viewer");

    let context = AnnotationContext::new(rules, settings);
    let scene = sample_scene();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([460.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tree Tint",
        native_options,
        Box::new(move |_cc| {
            Box::new(ViewerApp::new(
                context,
                scene,
                RULES_FILE.to_string(),
                SETTINGS_FILE.to_string(),
            ))
        }),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

use crate::annotate::AnnotationContext;
use crate::color::Color;
use crate::rules::{save_rules, Rule, RuleKind};
use crate::viewer::{from_color32, to_color32};
use eframe::egui;

/// Window for editing the rule list and the engine configuration in place.
///
/// Component-type choices are supplied by the host up front; the editor
/// never enumerates types itself. Every applied edit saves both files and
/// clears the swatch cache, since edits change what cached fingerprints
/// should render as.
pub struct RulesEditor {
    component_types: Vec<String>,
    error: Option<String>,
}

impl RulesEditor {
    pub fn new(component_types: Vec<String>) -> Self {
        Self {
            component_types,
            error: None,
        }
    }

    /// Show the editor. Returns `true` when edits were applied this frame,
    /// meaning the host should drop any textures keyed by old fingerprints.
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        open: &mut bool,
        context: &mut AnnotationContext,
        rules_path: &str,
        settings_path: &str,
    ) -> bool {
        let mut changed = false;
        egui::Window::new("Annotation Rules")
            .open(open)
            .show(ctx, |ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                }

                let rule_count = context.rules.len();
                let mut remove: Option<usize> = None;
                let mut swap: Option<(usize, usize)> = None;
                egui::ScrollArea::vertical()
                    .max_height(280.0)
                    .show(ui, |ui| {
                        for (idx, rule) in context.rules.iter_mut().enumerate() {
                            ui.horizontal(|ui| {
                                egui::ComboBox::from_id_source(("rule-kind", idx))
                                    .selected_text(rule.kind.label())
                                    .show_ui(ui, |ui| {
                                        for kind in RuleKind::ALL {
                                            if ui
                                                .selectable_value(&mut rule.kind, kind, kind.label())
                                                .changed()
                                            {
                                                changed = true;
                                            }
                                        }
                                    });

                                if rule.kind == RuleKind::Component
                                    && !self.component_types.is_empty()
                                {
                                    egui::ComboBox::from_id_source(("rule-component", idx))
                                        .selected_text(if rule.match_text.is_empty() {
                                            "component type"
                                        } else {
                                            rule.match_text.as_str()
                                        })
                                        .show_ui(ui, |ui| {
                                            for name in &self.component_types {
                                                if ui
                                                    .selectable_value(
                                                        &mut rule.match_text,
                                                        name.clone(),
                                                        name,
                                                    )
                                                    .changed()
                                                {
                                                    changed = true;
                                                }
                                            }
                                        });
                                } else if ui.text_edit_singleline(&mut rule.match_text).changed() {
                                    changed = true;
                                }

                                let mut color = to_color32(rule.color);
                                if ui.color_edit_button_srgba(&mut color).changed() {
                                    rule.color = from_color32(color);
                                    changed = true;
                                }

                                if ui
                                    .checkbox(&mut rule.override_label_color, "label")
                                    .on_hover_text("Recolor the row label instead of the contrast default")
                                    .changed()
                                {
                                    changed = true;
                                }
                                if rule.override_label_color {
                                    let mut label = to_color32(rule.label_color);
                                    if ui.color_edit_button_srgba(&mut label).changed() {
                                        rule.label_color = from_color32(label);
                                        changed = true;
                                    }
                                }

                                if ui.add_enabled(idx > 0, egui::Button::new("Up")).clicked() {
                                    swap = Some((idx - 1, idx));
                                }
                                if ui
                                    .add_enabled(idx + 1 < rule_count, egui::Button::new("Down"))
                                    .clicked()
                                {
                                    swap = Some((idx, idx + 1));
                                }
                                if ui.button("Remove").clicked() {
                                    remove = Some(idx);
                                }
                            });
                        }
                    });

                if let Some(idx) = remove {
                    context.rules.remove(idx);
                    changed = true;
                }
                if let Some((a, b)) = swap {
                    context.rules.swap(a, b);
                    changed = true;
                }
                if ui.button("Add rule").clicked() {
                    context
                        .rules
                        .push(Rule::new(RuleKind::Tag, "", Color::WHITE));
                    changed = true;
                }

                ui.separator();
                if ui
                    .checkbox(
                        &mut context.settings.allow_multiple_matches,
                        "Collect every matching rule",
                    )
                    .changed()
                {
                    changed = true;
                }
                if ui
                    .checkbox(
                        &mut context.settings.use_gradient_blend,
                        "Blend matched colors as a gradient",
                    )
                    .changed()
                {
                    changed = true;
                }
                ui.horizontal(|ui| {
                    ui.label("Label indent X");
                    if ui
                        .add(egui::DragValue::new(&mut context.settings.label_indent.0).speed(0.5))
                        .changed()
                    {
                        changed = true;
                    }
                    ui.label("Y");
                    if ui
                        .add(egui::DragValue::new(&mut context.settings.label_indent.1).speed(0.5))
                        .changed()
                    {
                        changed = true;
                    }
                });
            });

        if changed {
            self.apply(context, rules_path, settings_path);
        }
        changed
    }

    fn apply(&mut self, context: &mut AnnotationContext, rules_path: &str, settings_path: &str) {
        context.clear_cache();
        self.error = None;
        if let Err(e) = save_rules(rules_path, &context.rules) {
            self.error = Some(format!("Failed to save rules: {e}"));
        } else if let Err(e) = context.settings.save(settings_path) {
            self.error = Some(format!("Failed to save settings: {e}"));
        } else {
            tracing::debug!(rule_count = context.rules.len(), "rule set saved");
        }
    }
}

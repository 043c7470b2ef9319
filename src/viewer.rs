use crate::annotate::{AnnotationContext, DrawInstruction, Rect};
use crate::diagnostics::append_annotation_log;
use crate::item::TreeItem;
use crate::rules_editor::RulesEditor;
use crate::scene::SceneNode;
use eframe::egui;
use std::collections::HashMap;

pub const ROW_HEIGHT: f32 = 20.0;
const CHILD_INDENT: f32 = 16.0;

pub fn to_color32(color: crate::color::Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn from_color32(color: egui::Color32) -> crate::color::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    crate::color::Color::rgba(r, g, b, a)
}

/// Demo host: walks the sample scene once per frame and hands every
/// visible row to the annotation engine. Owns the redraw loop, the drawing
/// primitives, and the GPU textures the engine's pixel buffers are
/// uploaded into, keyed by swatch fingerprint.
pub struct ViewerApp {
    pub context: AnnotationContext,
    pub scene: SceneNode,
    pub show_editor: bool,
    pub error: Option<String>,
    editor: RulesEditor,
    rules_path: String,
    settings_path: String,
    textures: HashMap<u64, egui::TextureHandle>,
}

impl ViewerApp {
    pub fn new(
        context: AnnotationContext,
        scene: SceneNode,
        rules_path: String,
        settings_path: String,
    ) -> Self {
        let editor = RulesEditor::new(scene.collect_component_types());
        Self {
            context,
            scene,
            show_editor: false,
            error: None,
            editor,
            rules_path,
            settings_path,
            textures: HashMap::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for diag in self.context.take_diagnostics() {
            let line = diag.to_string();
            append_annotation_log(&line);
            self.error = Some(line);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Tree Tint");
                if ui.button("Rules…").clicked() {
                    self.show_editor = !self.show_editor;
                }
            });
            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err);
            }
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_node(ui, &self.scene, 0, &self.context, &mut self.textures);
            });
        });

        let mut show_editor = self.show_editor;
        if show_editor {
            let applied = self.editor.ui(
                ctx,
                &mut show_editor,
                &mut self.context,
                &self.rules_path,
                &self.settings_path,
            );
            if applied {
                // Old fingerprints may now render differently; re-upload on
                // demand from the rebuilt cache.
                self.textures.clear();
            }
        }
        self.show_editor = show_editor;
    }
}

fn draw_node(
    ui: &mut egui::Ui,
    node: &SceneNode,
    depth: usize,
    context: &AnnotationContext,
    textures: &mut HashMap<u64, egui::TextureHandle>,
) {
    let width = ui.available_width();
    let (row, _) = ui.allocate_exact_size(egui::vec2(width, ROW_HEIGHT), egui::Sense::hover());
    let indent = depth as f32 * CHILD_INDENT;
    let target = Rect::new(
        row.min.x + indent,
        row.min.y,
        (row.width() - indent).max(0.0),
        row.height(),
    );

    match context.annotate(node, target) {
        Some(instruction) => {
            let texture = swatch_texture(ui.ctx(), textures, &instruction);
            ui.painter().image(
                texture,
                to_egui_rect(instruction.swatch_rect),
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
            let mut text = egui::RichText::new(node.display_name())
                .color(to_color32(instruction.label_color));
            if instruction.label_bold {
                text = text.strong();
            }
            place_label(ui, to_egui_rect(instruction.label_rect), text);
        }
        None => {
            let mut text = egui::RichText::new(node.display_name());
            if !node.is_active() {
                text = text.weak();
            }
            place_label(ui, to_egui_rect(target), text);
        }
    }

    for child in &node.children {
        draw_node(ui, child, depth + 1, context, textures);
    }
}

fn place_label(ui: &mut egui::Ui, rect: egui::Rect, text: egui::RichText) {
    ui.allocate_ui_at_rect(rect, |ui| {
        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
            ui.label(text);
        });
    });
}

fn swatch_texture(
    ctx: &egui::Context,
    textures: &mut HashMap<u64, egui::TextureHandle>,
    instruction: &DrawInstruction,
) -> egui::TextureId {
    let handle = textures.entry(instruction.fingerprint).or_insert_with(|| {
        let swatch = &instruction.swatch;
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [swatch.width() as usize, swatch.height() as usize],
            swatch.pixels(),
        );
        ctx.load_texture(
            format!("swatch-{:016x}", instruction.fingerprint),
            image,
            egui::TextureOptions::NEAREST,
        )
    });
    handle.id()
}

fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(rect.x, rect.y), egui::vec2(rect.width, rect.height))
}

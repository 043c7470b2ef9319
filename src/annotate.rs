use crate::cache::{fingerprint, SwatchCache};
use crate::color::Color;
use crate::contrast;
use crate::diagnostics::Diagnostic;
use crate::item::TreeItem;
use crate::matcher::rule_matches;
use crate::rules::Rule;
use crate::settings::Settings;
use crate::swatch::Swatch;
use std::sync::{Arc, Mutex};

/// How far the swatch extends past the row rectangle on every side.
pub const SWATCH_BACKING_PAD: f32 = 1.0;

/// Axis-aligned rectangle in the host's 2D coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn expanded(self, pad: f32) -> Rect {
        Rect {
            x: self.x - pad,
            y: self.y - pad,
            width: self.width + 2.0 * pad,
            height: self.height + 2.0 * pad,
        }
    }

    /// Shift the origin by `(dx, dy)` and shrink the extent accordingly.
    pub fn indented(self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: (self.width - dx).max(0.0),
            height: (self.height - dy).max(0.0),
        }
    }
}

/// Everything the host needs to render one annotated row: a backing swatch
/// and a restyled label. Drawing itself stays with the host.
#[derive(Debug, Clone)]
pub struct DrawInstruction {
    pub swatch_rect: Rect,
    pub swatch: Arc<Swatch>,
    /// Cache key of the swatch; stable across frames, so hosts can key
    /// uploaded GPU textures by it.
    pub fingerprint: u64,
    pub label_rect: Rect,
    pub label_color: Color,
    pub label_bold: bool,
}

/// Shared state of the annotation engine: the rule list, the engine
/// configuration, the swatch cache, and pending diagnostics.
///
/// Constructed once at startup and passed by reference into every
/// [`annotate`] call. The settings surface mutates `rules` and `settings`
/// between redraws and must call [`clear_cache`] after any edit that
/// changes what a cached fingerprint renders as.
///
/// [`annotate`]: AnnotationContext::annotate
/// [`clear_cache`]: AnnotationContext::clear_cache
#[derive(Debug, Default)]
pub struct AnnotationContext {
    pub rules: Vec<Rule>,
    pub settings: Settings,
    cache: SwatchCache,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl AnnotationContext {
    pub fn new(rules: Vec<Rule>, settings: Settings) -> Self {
        Self {
            rules,
            settings,
            cache: SwatchCache::new(),
            diagnostics: Mutex::new(Vec::new()),
        }
    }

    pub fn cache(&self) -> &SwatchCache {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Drain the diagnostics collected since the last call.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|mut pending| std::mem::take(&mut *pending))
            .unwrap_or_default()
    }

    /// Classify one item and produce its draw instruction, or `None` when
    /// no rule matches. Invoked by the host once per visible row per
    /// redraw; performs no tree traversal and retains no reference to the
    /// item or the rules past the call.
    pub fn annotate(&self, item: &dyn TreeItem, rect: Rect) -> Option<DrawInstruction> {
        if self.rules.is_empty() {
            return None;
        }

        let mut matched: Vec<Color> = Vec::new();
        let mut label_override: Option<Color> = None;
        for (index, rule) in self.rules.iter().enumerate() {
            match rule_matches(rule, item) {
                Ok(true) => {
                    matched.push(rule.color);
                    if label_override.is_none() && rule.override_label_color {
                        label_override = Some(rule.label_color);
                    }
                    if !self.settings.allow_multiple_matches {
                        break;
                    }
                }
                Ok(false) => {}
                Err(detail) => self.report(Diagnostic::MalformedRule { index, detail }),
            }
        }

        let first = *matched.first()?;
        let fp = fingerprint(&matched);
        let swatch = self
            .cache
            .get_or_create(fp, &matched, self.settings.use_gradient_blend);

        let mut label_color = label_override.unwrap_or_else(|| contrast::invert(first));
        if !item.is_active() {
            label_color = label_color.dimmed();
        }

        let (dx, dy) = self.settings.label_indent;
        Some(DrawInstruction {
            swatch_rect: rect.expanded(SWATCH_BACKING_PAD),
            swatch,
            fingerprint: fp,
            label_rect: rect.indented(dx, dy),
            label_color,
            label_bold: true,
        })
    }

    fn report(&self, diag: Diagnostic) {
        tracing::warn!("{diag}");
        if let Ok(mut pending) = self.diagnostics.lock() {
            pending.push(diag);
        }
    }
}

use std::cell::RefCell;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight, Wrap};

use super::{Font, TextSettings, TextShaper, rich};

/// A [`TextShaper`] backed by cosmic-text.
///
/// Text is shaped at `font_size * scaling` and the extents are divided by the
/// scaling factor on the way out.
pub struct CosmicShaper {
    font_system: RefCell<FontSystem>,
}

impl std::fmt::Debug for CosmicShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicShaper").finish_non_exhaustive()
    }
}

impl Default for CosmicShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl CosmicShaper {
    /// Uses the system font database.
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new())
    }

    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self {
            font_system: RefCell::new(font_system),
        }
    }

    fn family(font: &Font) -> Family<'_> {
        match font.family() {
            "serif" => Family::Serif,
            "sans-serif" => Family::SansSerif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        }
    }

    /// Shapes `settings` and returns `(widest line, total height)` in logical units.
    fn extents(&self, settings: &TextSettings<'_>) -> (f32, f32) {
        let scaling = settings.effective_scaling();
        let font_size = settings.font_size * scaling;
        let metrics = Metrics::new(font_size, font_size * settings.line_height);
        // Buffer refuses a zero line height.
        if !(metrics.font_size > 0.0 && metrics.line_height > 0.0) {
            return (0.0, 0.0);
        }

        let mut guard = self.font_system.borrow_mut();
        let font_system: &mut FontSystem = &mut guard;

        let mut buffer = Buffer::new(font_system, metrics);
        match settings.wrap_width() {
            Some(width) => {
                buffer.set_wrap(font_system, Wrap::WordOrGlyph);
                buffer.set_size(font_system, Some(width * scaling), None);
            }
            None => {
                buffer.set_wrap(font_system, Wrap::None);
                buffer.set_size(font_system, None, None);
            }
        }

        let attrs = Attrs::new().family(Self::family(settings.font));
        if settings.rich_text {
            let spans = rich::parse(settings.text);
            let spans = spans.iter().map(|span| {
                let mut span_attrs = attrs.clone();
                if span.bold {
                    span_attrs = span_attrs.weight(Weight::BOLD);
                }
                if span.italic {
                    span_attrs = span_attrs.style(Style::Italic);
                }
                if let Some(size) = span.size {
                    let size = size * scaling;
                    let line_height = size * settings.line_height;
                    span_attrs = span_attrs.metrics(Metrics::new(size, line_height));
                }
                (span.text, span_attrs)
            });
            buffer.set_rich_text(font_system, spans, &attrs, Shaping::Advanced, None);
        } else {
            buffer.set_text(font_system, settings.text, &attrs, Shaping::Advanced);
        }
        buffer.shape_until_scroll(font_system, false);

        let (width, height) = buffer
            .layout_runs()
            .fold((0.0f32, 0.0f32), |(width, height), run| {
                (width.max(run.line_w), height.max(run.line_top + run.line_height))
            });
        let height = height.max(metrics.line_height);

        (width / scaling, height / scaling)
    }
}

impl TextShaper for CosmicShaper {
    fn compute_text_width(&self, settings: &TextSettings<'_>) -> f32 {
        self.extents(settings).0
    }

    fn compute_text_height(&self, settings: &TextSettings<'_>) -> f32 {
        self.extents(settings).1
    }
}

use std::borrow::Cow;

use super::{TextSettings, TextShaper, rich};

/// A font-free backend with a fixed advance per glyph.
///
/// Advances are snapped to whole device pixels, so like a rasterising backend
/// the results depend on the scaling factor. Wrapping is greedy on whitespace;
/// a word wider than the boundary overflows its own line. Rich text tags are
/// stripped but size overrides are not applied.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicShaper {
    /// Glyph advance as a fraction of the font size.
    pub advance: f32,
}

impl Default for HeuristicShaper {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl HeuristicShaper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_advance(advance: f32) -> Self {
        Self { advance }
    }

    /// Logical advance of one glyph.
    pub fn glyph_advance(&self, settings: &TextSettings<'_>) -> f32 {
        let scaling = settings.effective_scaling();
        (self.advance * settings.font_size * scaling).round() / scaling
    }

    fn visible<'a>(settings: &TextSettings<'a>) -> Cow<'a, str> {
        if settings.rich_text {
            Cow::Owned(rich::strip(settings.text))
        } else {
            Cow::Borrowed(settings.text)
        }
    }

    fn lines(&self, settings: &TextSettings<'_>) -> Vec<usize> {
        let advance = self.glyph_advance(settings);
        // Small slack so a boundary equal to the natural width keeps one line.
        let max_chars = settings
            .wrap_width()
            .map(|width| (((width + 1e-3) / advance).floor() as usize).max(1));
        line_lengths(&Self::visible(settings), max_chars)
    }
}

fn line_lengths(text: &str, max_chars: Option<usize>) -> Vec<usize> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let Some(max) = max_chars else {
            lines.push(paragraph.chars().count());
            continue;
        };

        let mut current = 0;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            if current == 0 {
                current = len;
            } else if current + 1 + len <= max {
                current += 1 + len;
            } else {
                lines.push(current);
                current = len;
            }
        }
        lines.push(current);
    }
    lines
}

impl TextShaper for HeuristicShaper {
    fn compute_text_width(&self, settings: &TextSettings<'_>) -> f32 {
        let longest = self.lines(settings).into_iter().max().unwrap_or(0);
        longest as f32 * self.glyph_advance(settings)
    }

    fn compute_text_height(&self, settings: &TextSettings<'_>) -> f32 {
        let lines = self.lines(settings).len().max(1);
        lines as f32 * settings.font_size * settings.line_height
    }
}

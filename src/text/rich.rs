//! Minimal inline formatting tags.
//!
//! Recognised: `<b>`, `<i>`, `<size=N>` and their closing tags. Anything else,
//! including a closing tag with no matching opener, stays in the text as typed.

/// A run of text sharing one format.
#[derive(Clone, Debug, PartialEq)]
pub struct RichSpan<'a> {
    pub text: &'a str,
    pub bold: bool,
    pub italic: bool,
    /// Font size override in logical units.
    pub size: Option<f32>,
}

impl<'a> RichSpan<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            bold: false,
            italic: false,
            size: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Tag {
    Bold,
    BoldEnd,
    Italic,
    ItalicEnd,
    Size(f32),
    SizeEnd,
}

impl Tag {
    fn read(body: &str) -> Option<Self> {
        match body {
            "b" => Some(Self::Bold),
            "/b" => Some(Self::BoldEnd),
            "i" => Some(Self::Italic),
            "/i" => Some(Self::ItalicEnd),
            "/size" => Some(Self::SizeEnd),
            _ => {
                let value = body.strip_prefix("size=")?;
                let value = value.strip_suffix("px").unwrap_or(value);
                let size: f32 = value.trim().parse().ok()?;
                (size.is_finite() && size > 0.0).then_some(Self::Size(size))
            }
        }
    }
}

#[derive(Default)]
struct Format {
    bold: u32,
    italic: u32,
    sizes: Vec<f32>,
}

impl Format {
    fn accepts(&self, tag: Tag) -> bool {
        match tag {
            Tag::BoldEnd => self.bold > 0,
            Tag::ItalicEnd => self.italic > 0,
            Tag::SizeEnd => !self.sizes.is_empty(),
            _ => true,
        }
    }

    fn apply(&mut self, tag: Tag) {
        match tag {
            Tag::Bold => self.bold += 1,
            Tag::BoldEnd => self.bold -= 1,
            Tag::Italic => self.italic += 1,
            Tag::ItalicEnd => self.italic -= 1,
            Tag::Size(size) => self.sizes.push(size),
            Tag::SizeEnd => {
                self.sizes.pop();
            }
        }
    }

    fn span<'a>(&self, text: &'a str) -> RichSpan<'a> {
        RichSpan {
            text,
            bold: self.bold > 0,
            italic: self.italic > 0,
            size: self.sizes.last().copied(),
        }
    }
}

/// Splits `text` into formatted spans, dropping recognised tags.
///
/// Empty runs are skipped, so markup-only input yields no spans.
pub fn parse(text: &str) -> Vec<RichSpan<'_>> {
    let mut spans = Vec::new();
    let mut format = Format::default();
    let mut run_start = 0;
    let mut cursor = 0;

    while let Some(rel) = text[cursor..].find('<') {
        let open = cursor + rel;
        let Some(rel_close) = text[open..].find('>') else {
            break;
        };
        let close = open + rel_close;

        match Tag::read(&text[open + 1..close]).filter(|tag| format.accepts(*tag)) {
            Some(tag) => {
                if open > run_start {
                    spans.push(format.span(&text[run_start..open]));
                }
                format.apply(tag);
                run_start = close + 1;
                cursor = close + 1;
            }
            None => cursor = open + 1,
        }
    }

    if run_start < text.len() {
        spans.push(format.span(&text[run_start..]));
    }
    spans
}

/// The visible characters of `text` once recognised tags are removed.
pub fn strip(text: &str) -> String {
    parse(text).into_iter().map(|span| span.text).collect()
}

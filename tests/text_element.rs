use std::cell::RefCell;

use approx::assert_relative_eq;
use luna_text::{
    HasText, MeasureMode, Node, Panel, Renderer, TextElement, TextSettings, TextShaper, Vec2,
    ViewDataStore, Widget, text::Font,
};

/// Reports `width_per_char * chars` and one 18.3 unit line per started
/// `wrap` block of width, logging each request.
#[derive(Default)]
struct RecordingShaper {
    requests: RefCell<Vec<(String, f32)>>,
}

impl RecordingShaper {
    const CHAR_WIDTH: f32 = 7.25;
    const LINE: f32 = 18.3;

    fn natural_width(text: &str) -> f32 {
        text.chars().count() as f32 * Self::CHAR_WIDTH
    }
}

impl TextShaper for RecordingShaper {
    fn compute_text_width(&self, settings: &TextSettings<'_>) -> f32 {
        self.requests
            .borrow_mut()
            .push((settings.text.to_owned(), settings.word_wrap_width));
        Self::natural_width(settings.text)
    }

    fn compute_text_height(&self, settings: &TextSettings<'_>) -> f32 {
        self.requests
            .borrow_mut()
            .push((settings.text.to_owned(), settings.word_wrap_width));
        let natural = Self::natural_width(settings.text);
        let lines = match settings.wrap_width() {
            Some(wrap) => (natural / wrap).ceil().max(1.0),
            None => 1.0,
        };
        lines * Self::LINE
    }
}

fn measure(element: &TextElement, shaper: &dyn TextShaper) -> Vec2 {
    element.measure(
        shaper,
        0.0,
        MeasureMode::Unconstrained,
        0.0,
        MeasureMode::Unconstrained,
    )
}

#[test]
fn unmeasurable_until_font_then_ceiling_extents() {
    let shaper = RecordingShaper::default();
    let element = TextElement::new();
    assert_eq!(element.text(), "");
    assert!(measure(&element, &shaper).is_nan());
    assert!(shaper.requests.borrow().is_empty());

    let mut element = element.font(Font::sans_serif());
    element.set_text("Hello");
    let size = measure(&element, &shaper);

    // 5 * 7.25 = 36.25 -> 37; one line at a 37 unit wrap, 18.3 -> 19.
    assert_relative_eq!(size.x, 37.0);
    assert_relative_eq!(size.y, 19.0);

    let requests = shaper.requests.borrow();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], ("Hello".to_owned(), 0.0));
    assert_eq!(requests[1], ("Hello".to_owned(), 37.0));
}

#[test]
fn at_most_never_reports_more_than_the_bound() {
    let shaper = RecordingShaper::default();
    let element = TextElement::with_text("a fairly long label").font(Font::sans_serif());

    for bound in [0.0, 10.0, 50.5, 138.7, 1000.0] {
        let size = element.measure(
            &shaper,
            bound,
            MeasureMode::AtMost,
            0.0,
            MeasureMode::Unconstrained,
        );
        assert!(size.x <= bound, "{} > {bound}", size.x);
    }
}

#[test]
fn narrow_bound_wraps_to_more_lines() {
    let shaper = RecordingShaper::default();
    let element = TextElement::with_text("0123456789").font(Font::sans_serif());

    let wide = element.measure(
        &shaper,
        200.0,
        MeasureMode::AtMost,
        0.0,
        MeasureMode::Unconstrained,
    );
    let narrow = element.measure(
        &shaper,
        40.0,
        MeasureMode::AtMost,
        0.0,
        MeasureMode::Unconstrained,
    );

    assert_relative_eq!(wide.x, 73.0);
    assert_relative_eq!(narrow.x, 40.0);
    // 72.5 at a 40 unit wrap is 2 lines.
    assert_relative_eq!(narrow.y, (2.0 * RecordingShaper::LINE).ceil());
    assert!(narrow.y > wide.y);
}

#[test]
fn view_data_survives_a_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view_data.json");

    let mut store = ViewDataStore::new();
    let panel = Panel::new(2.0).with_view_data(store.sender());
    let mut title = TextElement::new().view_data_key("title");
    title.base_mut().attach(panel.clone());
    let mut body = TextElement::new();
    body.base_mut().attach(panel);

    title.set_text("Inbox");
    body.set_text("not persisted");
    store.save(&path).unwrap();

    let loaded = ViewDataStore::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);

    let mut restored = TextElement::new().view_data_key("title");
    restored.restore_view_data(&loaded);
    assert_eq!(restored.text(), "Inbox");
}

#[test]
fn loading_a_missing_snapshot_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = ViewDataStore::load(dir.path().join("absent.json")).unwrap_err();
    assert!(format!("{err:#}").contains("reading view data"));
}

#[test]
fn frame_loop_repaints_only_changed_text() {
    let shaper = RecordingShaper::default();
    let mut node = Node::new(
        TextElement::with_text("Hello").font(Font::sans_serif()),
        Vec2::new(10.0, 20.0),
    );
    let mut ren = Renderer::new();

    for _ in 0..3 {
        ren.begin_frame();
        node.layout(&shaper, f32::INFINITY);
        node.collect(&mut ren);
    }
    // Painted in the first frame only.
    assert!(ren.end_frame().is_empty());
    assert_eq!(shaper.requests.borrow().len(), 2);

    node.widget_mut().set_text("Hello");
    ren.begin_frame();
    node.layout(&shaper, f32::INFINITY);
    assert!(!node.collect(&mut ren));

    node.widget_mut().set_text("World");
    ren.begin_frame();
    node.layout(&shaper, f32::INFINITY);
    assert!(node.collect(&mut ren));
    assert_eq!(ren.end_frame().len(), 1);
    assert_eq!(shaper.requests.borrow().len(), 4);
}

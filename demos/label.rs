use luna_text::{
    CosmicShaper, HasText, MeasureMode, Node, Panel, Renderer, Result, TextElement, Vec2,
    ViewDataStore, Widget,
    style::tokens::{Colour, Typography},
    text::Font,
};

fn main() -> Result<()> {
    luna_text::init_logging();

    let shaper = CosmicShaper::new();
    let mut store = ViewDataStore::new();
    let panel = Panel::new(2.0).with_view_data(store.sender());

    let heading = TextElement::with_text("<b>Inbox</b>")
        .font(Font::sans_serif())
        .font_size(Typography::HEADING)
        .color(Colour::PRIMARY)
        .view_data_key("inbox.heading");
    let mut heading = Node::new(heading, Vec2::ZERO);
    heading.widget_mut().base_mut().attach(panel.clone());

    let caption = TextElement::with_text("3 unread messages from people you follow")
        .font(Font::sans_serif())
        .font_size(Typography::CAPTION)
        .color(Colour::TEXT_MUTED);
    let mut caption = Node::new(caption, Vec2::new(0.0, 40.0));
    caption.widget_mut().base_mut().attach(panel);

    let mut ren = Renderer::new();
    for (frame, text) in ["<b>Inbox</b>", "<b>Inbox</b> (3)"].into_iter().enumerate() {
        heading.widget_mut().set_text(text);

        ren.begin_frame();
        let heading_size = heading.layout(&shaper, 240.0);
        let caption_size = caption.layout(&shaper, 240.0);
        heading.collect(&mut ren);
        caption.collect(&mut ren);

        log::info!("frame {frame}: heading {heading_size}, caption {caption_size}");
        for prim in ren.end_frame() {
            log::info!("  {prim:?}");
        }
    }

    let exact = caption.widget().measure(
        &shaper,
        120.0,
        MeasureMode::Exactly,
        0.0,
        MeasureMode::Unconstrained,
    );
    log::info!("caption wrapped at 120: {exact}");

    store.pump();
    log::info!("view data: {}", store.to_json()?);
    Ok(())
}

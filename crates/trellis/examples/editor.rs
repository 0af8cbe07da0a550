//! A headless tour of the toolkit: build a tiny editor, drive it with
//! synthetic input, and save its buffer through the filesystem trait.
//!
//! A real host would pump a window's event loop into [`App::event`]
//! and hand a GPU-backed [`trellis::RenderBackend`] to
//! [`App::render`]; here a recording backend stands in so the example
//! runs anywhere.

use geom::Expanse;
use trellis::tutils::TestRender;
use trellis::widgets::{Button, Column, TextBox};
use trellis::{
    App, Event, Filesystem, Key, MouseAction, MouseEvent, Result, Signal, Sizing, StdFs,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut app = App::new(Column::new())?;
    let root = app.core.root();
    let save = app.core.add_child(
        root,
        Button::new("Save")
            .with_width(Sizing::Fixed(100))
            .with_height(Sizing::Fixed(50)),
    )?;
    let text = app.core.add_child(
        root,
        TextBox::new()
            .with_width(Sizing::Ratio(1.0))
            .with_height(Sizing::Fixed(350)),
    )?;
    app.set_root_size(Expanse::new(200, 400));

    let mut backend = TestRender::new();
    app.render(&mut backend)?;

    // Click the text box, type into it, then click Save.
    let frame = |app: &mut App, e: Event| -> Result<()> {
        app.event(e)?;
        app.render(&mut TestRender::new())
    };
    frame(&mut app, Event::Mouse(MouseEvent::new(MouseAction::Down, 100, 100)))?;
    frame(&mut app, Event::Mouse(MouseEvent::new(MouseAction::Up, 100, 100)))?;
    for c in "hello".chars() {
        frame(&mut app, Event::Key(Key::Char(c)))?;
    }
    frame(&mut app, Event::Mouse(MouseEvent::new(MouseAction::Down, 50, 25)))?;
    frame(&mut app, Event::Mouse(MouseEvent::new(MouseAction::Up, 50, 25)))?;

    for (source, signal) in app.take_signals() {
        if source == save && signal == Signal::Clicked {
            let content = app
                .core
                .with_widget::<TextBox, _>(text, |tb, _| tb.text().to_string())?;
            StdFs
                .write(std::path::Path::new("test.txt"), &content)
                .map_err(|e| trellis::Error::Invalid(e.to_string()))?;
            tracing::info!("saved {} bytes to test.txt", content.len());
        }
    }

    println!("{}", app.core.dump());
    Ok(())
}

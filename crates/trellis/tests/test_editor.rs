//! A minimal editor wired up the way a host would: a save button, a
//! text box, and a filesystem collaborator.

use std::path::Path;
use std::sync::Arc;

use geom::Expanse;
use trellis::tutils::Harness;
use trellis::widgets::{Button, Column, TextBox};
use trellis::{Filesystem, MemFs, Result, Signal, Sizing, StdFs};

fn editor() -> Result<Harness> {
    let mut h = Harness::with_size(Column::new(), Expanse::new(200, 400))?;
    let root = h.app.core.root();
    let save = h.app.core.add_child(
        root,
        Button::new("Save")
            .with_width(Sizing::Fixed(100))
            .with_height(Sizing::Fixed(50)),
    )?;
    let text = h.app.core.add_child(
        root,
        TextBox::new()
            .with_width(Sizing::Ratio(1.0))
            .with_height(Sizing::Fixed(350)),
    )?;
    h.app.core.set_id(save, "save")?;
    h.app.core.set_id(text, "editor")?;
    h.redraw()?;
    Ok(h)
}

fn save_if_clicked(h: &mut Harness, fs: &dyn Filesystem, path: &Path) -> Result<bool> {
    let save = h.app.core.node_for_id("save").ok_or(trellis::Error::UnknownNode)?;
    let mut saved = false;
    for (source, signal) in h.signals() {
        if source == save && signal == Signal::Clicked {
            let text = h.app.core.node_for_id("editor").ok_or(trellis::Error::UnknownNode)?;
            let content = h
                .app
                .core
                .with_widget::<TextBox, _>(text, |tb, _| tb.text().to_string())?;
            fs.write(path, &content)
                .map_err(|e| trellis::Error::Invalid(e.to_string()))?;
            saved = true;
        }
    }
    Ok(saved)
}

#[test]
fn typed_text_round_trips_through_the_filesystem() -> Result<()> {
    let mut h = editor()?;
    h.click(100, 100)?;
    h.type_text("hello")?;
    h.click(50, 25)?;

    let dir = tempfile::tempdir().map_err(|e| trellis::Error::Invalid(e.to_string()))?;
    let path = dir.path().join("test.txt");
    let fs = StdFs;
    assert!(save_if_clicked(&mut h, &fs, &path)?);
    assert_eq!(
        fs.read(&path)
            .map_err(|e| trellis::Error::Invalid(e.to_string()))?,
        "hello"
    );
    Ok(())
}

#[test]
fn reloaded_text_is_editable() -> Result<()> {
    let fs = Arc::new(MemFs::new());
    fs.add_file("/draft.txt", "hell");

    let mut h = editor()?;
    let text = h.app.core.node_for_id("editor").ok_or(trellis::Error::UnknownNode)?;
    let loaded = fs
        .read(Path::new("/draft.txt"))
        .map_err(|e| trellis::Error::Invalid(e.to_string()))?;
    h.app
        .core
        .with_widget::<TextBox, _>(text, |tb, _| tb.set_text(loaded))?;
    h.click(100, 100)?;
    h.type_text("o")?;
    h.app
        .core
        .with_widget::<TextBox, _>(text, |tb, _| assert_eq!(tb.text(), "hello"))?;
    Ok(())
}

#[test]
fn save_failures_surface_to_the_host() -> Result<()> {
    let fs = MemFs::new();
    fs.fail_writes(true);
    let mut h = editor()?;
    h.click(50, 25)?;
    assert!(save_if_clicked(&mut h, &fs, Path::new("/test.txt")).is_err());
    Ok(())
}

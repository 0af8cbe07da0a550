//! The file selector, driven against an in-memory filesystem.

use std::path::PathBuf;
use std::sync::Arc;

use geom::Expanse;
use trellis::tutils::Harness;
use trellis::widgets::FileSelector;
use trellis::{MemFs, Result, Signal};

// Entry rows are 24px, the path box and button bar 32px each; the
// Open and Cancel buttons are 80px wide. Coordinates below index into
// that geometry.
fn selector() -> Result<Harness> {
    let fs = MemFs::new();
    fs.add_dir("/docs");
    fs.add_file("/readme.txt", "hello");
    fs.add_file("/docs/a.txt", "a");
    fs.add_file("/docs/b.txt", "b");
    Harness::with_size(FileSelector::new(Arc::new(fs)), Expanse::new(200, 400))
}

fn shown_path(h: &mut Harness) -> Result<PathBuf> {
    let root = h.app.core.root();
    h.app
        .core
        .with_widget::<FileSelector, _>(root, |f, _| f.path().clone())
}

fn selected(h: &mut Harness) -> Result<Option<String>> {
    let root = h.app.core.root();
    h.app
        .core
        .with_widget::<FileSelector, _>(root, |f, _| f.selected_entry().map(String::from))
}

#[test]
fn lists_the_start_directory_with_a_parent_entry() -> Result<()> {
    let mut h = selector()?;
    assert_eq!(shown_path(&mut h)?, PathBuf::from("/"));
    assert!(h.render.contains_text(".."));
    assert!(h.render.contains_text("docs"));
    assert!(h.render.contains_text("readme.txt"));
    assert!(h.render.contains_text("/"));
    Ok(())
}

#[test]
fn clicking_a_directory_navigates_into_it() -> Result<()> {
    let mut h = selector()?;
    // Row 1 is "docs" ("/" sorts ".." first).
    h.click(100, 30)?;
    assert_eq!(shown_path(&mut h)?, PathBuf::from("/docs"));
    assert!(h.render.contains_text("a.txt"));
    assert!(h.render.contains_text("b.txt"));

    // And ".." leads back up.
    h.click(100, 10)?;
    assert_eq!(shown_path(&mut h)?, PathBuf::from("/"));
    Ok(())
}

#[test]
fn selecting_a_file_and_opening_emits_its_path() -> Result<()> {
    let mut h = selector()?;
    h.click(100, 30)?; // into /docs
    h.click(100, 30)?; // select a.txt
    assert_eq!(selected(&mut h)?, Some("a.txt".to_string()));

    // /docs lists three rows, so the bar starts at 72 + 32 = 104.
    // Open is the left button.
    h.click(40, 120)?;
    let root = h.app.core.root();
    assert_eq!(
        h.signals(),
        vec![(root, Signal::FileChosen(PathBuf::from("/docs/a.txt")))]
    );
    Ok(())
}

#[test]
fn open_without_a_selection_does_nothing() -> Result<()> {
    let mut h = selector()?;
    // Three rows at "/" as well.
    h.click(40, 120)?;
    assert!(h.signals().is_empty());
    Ok(())
}

#[test]
fn cancel_emits_dismissed() -> Result<()> {
    let mut h = selector()?;
    h.click(120, 120)?;
    let root = h.app.core.root();
    assert_eq!(
        h.signals(),
        vec![(root, Signal::Dismissed("file_selector".to_string()))]
    );
    Ok(())
}

#[test]
fn navigating_to_the_current_directory_keeps_the_selection() -> Result<()> {
    let mut h = selector()?;
    h.click(100, 30)?; // into /docs
    h.click(100, 30)?; // select a.txt
    let root = h.app.core.root();
    h.app.core.with_widget::<FileSelector, _>(root, |f, ctx| {
        f.set_path(ctx, PathBuf::from("/docs"))
    })??;
    assert_eq!(selected(&mut h)?, Some("a.txt".to_string()));
    Ok(())
}

#[test]
fn selection_resets_on_navigation() -> Result<()> {
    let mut h = selector()?;
    h.click(100, 30)?; // into /docs
    h.click(100, 30)?; // select a.txt
    h.click(100, 10)?; // back to /
    assert_eq!(selected(&mut h)?, None);
    Ok(())
}

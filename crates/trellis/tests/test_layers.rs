//! The layer stack: z-order, exclusive hit testing, and dismissal.

use geom::Point;
use trellis::tutils::Harness;
use trellis::widgets::{Button, Layers, Rectangle};
use trellis::{Error, Result, Sizing};

fn dialog() -> Rectangle {
    Rectangle::new()
        .with_width(Sizing::Fixed(40))
        .with_height(Sizing::Fixed(40))
}

fn base() -> Button {
    Button::new("base")
        .with_width(Sizing::Ratio(1.0))
        .with_height(Sizing::Ratio(1.0))
}

#[test]
fn only_the_topmost_layer_is_hit() -> Result<()> {
    let mut h = Harness::new(Layers::new())?;
    let layers = h.app.core.root();
    let base = h.app.core.push_layer(layers, base())?;
    let dialog = h.app.core.push_layer(layers, dialog())?;
    h.redraw()?;

    assert_eq!(h.app.core.level(layers)?, 1);
    // Inside the dialog.
    assert_eq!(h.app.core.locate(Point::new(20, 20)), Some(dialog));
    // Over the base button, but the dialog layer is topmost, so the
    // probe falls through to the stack itself.
    assert_eq!(h.app.core.locate(Point::new(60, 60)), Some(layers));
    assert_ne!(h.app.core.locate(Point::new(60, 60)), Some(base));
    Ok(())
}

#[test]
fn clicking_outside_the_top_layer_pops_to_base() -> Result<()> {
    let mut h = Harness::new(Layers::new())?;
    let layers = h.app.core.root();
    let base = h.app.core.push_layer(layers, base())?;
    let second = h.app.core.push_layer(layers, dialog())?;
    let third = h.app.core.push_layer(layers, dialog())?;
    h.redraw()?;
    assert_eq!(h.app.core.level(layers)?, 2);

    h.click(60, 60)?;
    assert!(!h.app.core.contains(second));
    assert!(!h.app.core.contains(third));
    assert!(h.app.core.contains(base));
    assert_eq!(h.app.core.level(layers)?, 0);
    // With the stack reduced the base is reachable again.
    assert_eq!(h.app.core.locate(Point::new(60, 60)), Some(base));
    Ok(())
}

#[test]
fn clicking_beside_the_base_layer_is_a_no_op() -> Result<()> {
    let mut h = Harness::new(Layers::new())?;
    let layers = h.app.core.root();
    let dialog = h.app.core.push_layer(layers, dialog())?;
    h.redraw()?;
    h.click(60, 60)?;
    assert!(h.app.core.contains(dialog));
    assert_eq!(h.app.core.level(layers)?, 0);
    Ok(())
}

#[test]
fn set_layer_replaces_in_place() -> Result<()> {
    let mut h = Harness::new(Layers::new())?;
    let layers = h.app.core.root();
    let base = h.app.core.push_layer(layers, base())?;
    let old = h.app.core.push_layer(layers, dialog())?;
    h.redraw()?;

    let new = h.app.core.set_layer(layers, 1, dialog())?;
    assert!(!h.app.core.contains(old));
    assert_eq!(h.app.core.children(layers), &[base, new]);

    // One past the top pushes.
    let pushed = h.app.core.set_layer(layers, 2, dialog())?;
    assert_eq!(h.app.core.level(layers)?, 2);
    assert_eq!(h.app.core.children(layers), &[base, new, pushed]);

    // Beyond that would leave a hole.
    assert!(matches!(
        h.app.core.set_layer(layers, 4, dialog()),
        Err(Error::Invalid(_))
    ));
    Ok(())
}

#[test]
fn layer_operations_require_a_layers_node() -> Result<()> {
    let mut h = Harness::new(Layers::new())?;
    let layers = h.app.core.root();
    let base = h.app.core.push_layer(layers, base())?;
    assert!(matches!(
        h.app.core.push_layer(base, dialog()),
        Err(Error::Invalid(_))
    ));
    assert!(matches!(h.app.core.level(base), Err(Error::Invalid(_))));
    assert!(matches!(
        h.app.core.pop_layers(base),
        Err(Error::Invalid(_))
    ));
    Ok(())
}

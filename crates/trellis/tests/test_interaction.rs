//! Pointer and keyboard state across the tree.

use std::time::Duration;

use geom::{Expanse, Rect};
use trellis::tutils::Harness;
use trellis::MouseAction;
use trellis::widgets::{Button, Column, Rectangle, TextBox};
use trellis::{Result, Signal, Sizing};

fn button_and_textbox() -> Result<Harness> {
    let mut h = Harness::with_size(Column::new(), Expanse::new(200, 400))?;
    let root = h.app.core.root();
    h.app.core.add_child(
        root,
        Button::new("ok")
            .with_width(Sizing::Fixed(100))
            .with_height(Sizing::Fixed(50)),
    )?;
    h.app.core.add_child(
        root,
        TextBox::new()
            .with_width(Sizing::Ratio(1.0))
            .with_height(Sizing::Fixed(350)),
    )?;
    h.redraw()?;
    Ok(h)
}

#[test]
fn hover_sets_hot() -> Result<()> {
    let mut h = button_and_textbox()?;
    let button = h.app.core.children(h.app.core.root())[0];
    h.mouse(MouseAction::Move, 50, 25)?;
    assert_eq!(h.app.interaction.hot, Some(button));
    h.mouse(MouseAction::Move, 150, 30)?;
    assert_ne!(h.app.interaction.hot, Some(button));
    Ok(())
}

#[test]
fn completed_click_activates_and_signals() -> Result<()> {
    let mut h = button_and_textbox()?;
    let button = h.app.core.children(h.app.core.root())[0];

    h.mouse(MouseAction::Down, 50, 25)?;
    assert_eq!(h.app.interaction.about_to_active, Some(button));
    assert_eq!(h.app.interaction.active, None);
    assert!(h.signals().is_empty());

    h.mouse(MouseAction::Up, 50, 25)?;
    assert_eq!(h.app.interaction.about_to_active, None);
    assert_eq!(h.app.interaction.active, Some(button));
    assert_eq!(h.signals(), vec![(button, Signal::Clicked)]);
    Ok(())
}

#[test]
fn click_on_empty_space_clears_active() -> Result<()> {
    let mut h = button_and_textbox()?;
    h.click(50, 25)?;
    assert!(h.app.interaction.active.is_some());
    h.signals();
    // The root's edge is outside every widget.
    h.click(0, 25)?;
    assert_eq!(h.app.interaction.active, None);
    assert!(h.signals().is_empty());
    Ok(())
}

#[test]
fn double_click_window_is_clock_driven() -> Result<()> {
    let mut h = button_and_textbox()?;
    h.click(50, 25)?;
    assert!(!h.app.interaction.double_clicked);

    h.clock.advance(Duration::from_millis(100));
    h.click(50, 25)?;
    assert!(h.app.interaction.double_clicked);

    h.clock.advance(Duration::from_millis(600));
    h.click(50, 25)?;
    assert!(!h.app.interaction.double_clicked);
    Ok(())
}

#[test]
fn keys_go_to_the_active_widget_only() -> Result<()> {
    let mut h = button_and_textbox()?;
    let textbox = h.app.core.children(h.app.core.root())[1];

    // Nothing active yet; keys fall on the floor.
    h.type_text("zz")?;
    h.app
        .core
        .with_widget::<TextBox, _>(textbox, |tb, _| assert_eq!(tb.text(), ""))?;

    h.click(100, 100)?;
    assert_eq!(h.app.interaction.active, Some(textbox));
    h.type_text("hi")?;
    h.app
        .core
        .with_widget::<TextBox, _>(textbox, |tb, _| assert_eq!(tb.text(), "hi"))?;
    Ok(())
}

#[test]
fn backspace_removes_whole_characters() -> Result<()> {
    let mut h = button_and_textbox()?;
    let textbox = h.app.core.children(h.app.core.root())[1];
    h.click(100, 100)?;
    h.type_text("a€")?;
    h.key(trellis::Key::Backspace)?;
    h.app
        .core
        .with_widget::<TextBox, _>(textbox, |tb, _| assert_eq!(tb.text(), "a"))?;
    Ok(())
}

#[test]
fn a_jittered_click_is_still_a_click() -> Result<()> {
    let mut h = button_and_textbox()?;
    let button = h.app.core.children(h.app.core.root())[0];

    // One pixel of motion between press and release must not turn the
    // click into a drag.
    h.mouse(MouseAction::Down, 50, 25)?;
    h.mouse(MouseAction::Move, 51, 25)?;
    assert_eq!(h.app.interaction.dragging, None);

    h.mouse(MouseAction::Up, 51, 25)?;
    assert_eq!(h.app.interaction.active, Some(button));
    assert_eq!(h.signals(), vec![(button, Signal::Clicked)]);
    Ok(())
}

#[test]
fn dragging_overrides_position_and_suppresses_the_click() -> Result<()> {
    let mut h = Harness::with_size(Column::new(), Expanse::new(200, 400))?;
    let root = h.app.core.root();
    let block = h.app.core.add_child(
        root,
        Rectangle::new()
            .with_width(Sizing::Fixed(50))
            .with_height(Sizing::Fixed(50)),
    )?;
    h.redraw()?;

    h.mouse(MouseAction::Down, 20, 20)?;
    // The first motion only anchors the drag.
    h.mouse(MouseAction::Move, 20, 20)?;
    assert_eq!(h.app.interaction.dragging, None);
    h.mouse(MouseAction::Move, 30, 40)?;
    assert_eq!(h.app.interaction.dragging, Some(block));
    // Committed layout follows the drag: origin moved by the pointer
    // delta from the anchor.
    assert_eq!(h.app.core.rect(block), Some(Rect::new(10, 20, 50, 50)));

    h.mouse(MouseAction::Up, 30, 40)?;
    assert_eq!(h.app.interaction.dragging, None);
    // No click completed, so nothing became active and no signal
    // fired.
    assert_eq!(h.app.interaction.active, None);
    assert!(h.signals().is_empty());
    // The next layout pass snaps the block back to its laid-out spot.
    assert_eq!(h.app.core.rect(block), Some(Rect::new(0, 0, 50, 50)));
    Ok(())
}

#[test]
fn stale_interaction_handles_are_pruned() -> Result<()> {
    let mut h = button_and_textbox()?;
    let button = h.app.core.children(h.app.core.root())[0];
    h.click(50, 25)?;
    assert_eq!(h.app.interaction.active, Some(button));

    h.app.core.remove_subtree(button)?;
    h.redraw()?;
    // The next event notices the node is gone.
    h.mouse(MouseAction::Move, 150, 300)?;
    assert_eq!(h.app.interaction.active, None);
    Ok(())
}

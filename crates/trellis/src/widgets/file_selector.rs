//! A file selection dialog.

use std::path::PathBuf;
use std::sync::Arc;

use geom::{Point, Rect};

use crate::core::context::{Ctx, HitCtx, LayoutCtx};
use crate::core::error::Result;
use crate::core::event::Signal;
use crate::core::fs::Filesystem;
use crate::core::id::{NodeId, TypedId};
use crate::core::layout::{stack_layout, Axis, Constraint, Sizing};
use crate::widget::{EventOutcome, Widget, WidgetKind};
use crate::widgets::button::Button;
use crate::widgets::container::{Column, Row};
use crate::widgets::textbox::TextBox;

const ENTRY_HEIGHT: i32 = 24;
const BAR_HEIGHT: i32 = 32;

/// A file browser built from the primitive widgets: a column of entry
/// buttons, a path display, and Open/Cancel buttons.
///
/// Clicking a directory entry navigates into it; `..` leads a listing
/// back to the parent. Clicking a file entry highlights it, and Open
/// then emits [`Signal::FileChosen`] with the full path. Cancel emits
/// [`Signal::Dismissed`]. The selector never touches the disk
/// directly; everything goes through the [`Filesystem`] it was given.
pub struct FileSelector {
    fs: Arc<dyn Filesystem>,
    path: PathBuf,
    entries: Vec<String>,
    selected: Option<usize>,
    list: Option<NodeId>,
    path_box: Option<TypedId<TextBox>>,
    open_btn: Option<NodeId>,
    cancel_btn: Option<NodeId>,
    entry_btns: Vec<NodeId>,
}

impl FileSelector {
    /// A selector that will open on the filesystem's start directory
    /// once mounted.
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self {
            fs,
            path: PathBuf::new(),
            entries: Vec::new(),
            selected: None,
            list: None,
            path_box: None,
            open_btn: None,
            cancel_btn: None,
            entry_btns: Vec::new(),
        }
    }

    /// The directory currently being listed.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// The highlighted entry name, if a file is selected.
    pub fn selected_entry(&self) -> Option<&str> {
        self.selected.map(|i| self.entries[i].as_str())
    }

    /// Navigate to a directory, rebuilding the entry list. Setting the
    /// path the selector is already showing is a no-op and keeps the
    /// current selection.
    pub fn set_path(&mut self, ctx: &mut Ctx, path: PathBuf) -> Result<()> {
        if path == self.path {
            return Ok(());
        }
        let Some(list) = self.list else {
            // Not mounted yet; on_mount will call back in.
            self.path = path;
            return Ok(());
        };
        tracing::debug!(path = %path.display(), "navigating");
        self.path = path;
        self.selected = None;
        self.entries = vec!["..".to_string()];
        match self.fs.list_dir(&self.path) {
            Ok(mut names) => {
                names.sort();
                self.entries.extend(names);
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "cannot list directory");
            }
        }
        ctx.clear_children(list)?;
        self.entry_btns.clear();
        for name in &self.entries {
            let btn = ctx.add_child_to(
                list,
                Button::new(name.clone())
                    .with_width(Sizing::Ratio(1.0))
                    .with_height(Sizing::Fixed(ENTRY_HEIGHT)),
            )?;
            self.entry_btns.push(btn);
        }
        if let Some(pb) = self.path_box {
            let text = self.path.display().to_string();
            ctx.with_widget::<TextBox, _>(pb.id(), |tb, _| tb.set_text(text))?;
        }
        Ok(())
    }

    fn entry_clicked(&mut self, ctx: &mut Ctx, index: usize) -> Result<EventOutcome> {
        let name = self.entries[index].clone();
        let target = if name == ".." {
            match self.path.parent() {
                Some(parent) => parent.to_path_buf(),
                // Already at the top; nothing to do.
                None => return Ok(EventOutcome::Consume),
            }
        } else {
            self.path.join(&name)
        };
        if self.fs.is_dir(&target) {
            self.set_path(ctx, target)?;
            return Ok(EventOutcome::Handle);
        }
        if self.fs.is_file(&target) {
            self.selected = Some(index);
            for (i, btn) in self.entry_btns.clone().into_iter().enumerate() {
                ctx.with_widget::<Button, _>(btn, |b, _| b.set_selected(i == index))?;
            }
            return Ok(EventOutcome::Handle);
        }
        tracing::warn!(path = %target.display(), "entry vanished from under the selector");
        Ok(EventOutcome::Consume)
    }
}

impl Widget for FileSelector {
    fn kind(&self) -> WidgetKind {
        WidgetKind::FileSelector
    }

    fn on_mount(&mut self, ctx: &mut Ctx) -> Result<()> {
        self.list = Some(ctx.add_child(Column::new().with_width(Sizing::Ratio(1.0)))?);
        self.path_box = Some(TypedId::new(ctx.add_child(
            TextBox::new()
                .with_width(Sizing::Ratio(1.0))
                .with_height(Sizing::Fixed(BAR_HEIGHT)),
        )?));
        let bar = ctx.add_child(Row::new().with_height(Sizing::Fixed(BAR_HEIGHT)))?;
        self.open_btn = Some(ctx.add_child_to(
            bar,
            Button::new("Open")
                .with_width(Sizing::Fixed(80))
                .with_height(Sizing::Fixed(BAR_HEIGHT)),
        )?);
        self.cancel_btn = Some(ctx.add_child_to(
            bar,
            Button::new("Cancel")
                .with_width(Sizing::Fixed(80))
                .with_height(Sizing::Fixed(BAR_HEIGHT)),
        )?);
        let start = if self.path.as_os_str().is_empty() {
            self.fs.start_dir()
        } else {
            std::mem::take(&mut self.path)
        };
        // Force the initial listing even if start matches the default.
        self.path = PathBuf::new();
        self.set_path(ctx, start)
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, c: &Constraint) -> Result<Rect> {
        stack_layout(ctx, c, Axis::Vertical, Sizing::Undefined, Sizing::Undefined)
    }

    fn hit_test(&self, ctx: &HitCtx, p: Point) -> Option<NodeId> {
        ctx.hit_children_first(p)
    }

    fn on_signal(&mut self, ctx: &mut Ctx, source: NodeId, signal: &Signal) -> Result<EventOutcome> {
        if *signal != Signal::Clicked {
            return Ok(EventOutcome::Ignore);
        }
        if Some(source) == self.cancel_btn {
            ctx.emit(Signal::Dismissed("file_selector".to_string()));
            return Ok(EventOutcome::Handle);
        }
        if Some(source) == self.open_btn {
            return match self.selected {
                Some(i) => {
                    let chosen = self.path.join(&self.entries[i]);
                    ctx.emit(Signal::FileChosen(chosen));
                    Ok(EventOutcome::Handle)
                }
                // Open without a selection does nothing.
                None => Ok(EventOutcome::Consume),
            };
        }
        if let Some(index) = self.entry_btns.iter().position(|b| *b == source) {
            return self.entry_clicked(ctx, index);
        }
        Ok(EventOutcome::Ignore)
    }
}

//! The editing session: document state, dispatch, and history.

use crate::color::Color;
use crate::command::{BuiltinCommand, Command};
use crate::event::{EventSink, SessionEvent};
use crate::export::ExportFormat;
use crate::font::FontSizeStep;
use crate::history::HistoryLog;
use crate::minutes::MeetingMinutes;
use crate::selection::{SelectionRange, SelectionTracker};
use crate::style::InlineStyle;
use crate::surface::EditSurface;
use tracing::{debug, trace};

/// A single minutes-editing session.
///
/// Owns the editable surface, the serialized document state, the undo/redo
/// log, the selection tracker, and the cumulative font-size step. One
/// session per mounted editor; nothing is shared across sessions and
/// nothing persists once the session is dropped.
///
/// # Selection contract
///
/// The host calls [`capture_selection`](Self::capture_selection) whenever
/// the user signals selection intent: focus entering the surface, key
/// release, mouse release, and the pointer-down phase of a toolbar
/// interaction (before the click steals focus). Every mutating dispatch
/// restores the captured selection first, so the mutation lands on the
/// range the user intended rather than wherever focus ended up.
///
/// # Examples
///
/// ```
/// use minutes_editor::{Command, EditSurface, EditorSession, MarkupSurface, SelectionRange};
///
/// let mut session = EditorSession::mount(MarkupSurface::new(), "<p>Hello</p>", None);
///
/// session.surface_mut().set_selection(SelectionRange::new(3, 8));
/// session.capture_selection();
/// session.dispatch(Command::AdjustFontSize(1));
///
/// assert!(session.content().contains("font-size: 18px"));
/// assert_eq!(session.font_step(), 1);
/// ```
pub struct EditorSession<S: EditSurface> {
    surface: S,
    document: String,
    history: HistoryLog,
    tracker: SelectionTracker,
    font_step: FontSizeStep,
    minutes: Option<MeetingMinutes>,
    events: Option<EventSink>,
    restoring: bool,
}

impl<S: EditSurface> EditorSession<S> {
    /// Mount a session over `surface` with the initial document.
    pub fn mount(mut surface: S, markup: &str, minutes: Option<MeetingMinutes>) -> Self {
        surface.set_content(markup);
        surface.take_changed();
        Self {
            surface,
            document: markup.to_string(),
            history: HistoryLog::new(markup),
            tracker: SelectionTracker::new(),
            font_step: FontSizeStep::new(),
            minutes,
            events: None,
            restoring: false,
        }
    }

    /// Replace the session's source document (e.g., regenerated minutes).
    ///
    /// Re-initializes the history to a single entry; prior edits become
    /// unreachable. The font-size step and captured selection survive, as
    /// they belong to the toolbar rather than the document.
    pub fn load_source(&mut self, markup: &str, minutes: Option<MeetingMinutes>) {
        self.surface.set_content(markup);
        self.surface.take_changed();
        self.document = markup.to_string();
        self.history.reset(markup);
        self.minutes = minutes;
    }

    /// Register the sink receiving export/share/start-over requests.
    pub fn set_event_sink(&mut self, sink: impl FnMut(SessionEvent) + 'static) {
        self.events = Some(Box::new(sink));
    }

    /// Current serialized document.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.document
    }

    /// Structured minutes metadata, when supplied at mount.
    #[must_use]
    pub fn minutes(&self) -> Option<&MeetingMinutes> {
        self.minutes.as_ref()
    }

    /// Current cumulative font-size step.
    #[must_use]
    pub fn font_step(&self) -> i32 {
        self.font_step.step()
    }

    /// Check if an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The undo/redo log.
    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The editable surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the editable surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Capture the surface's current selection.
    ///
    /// No-op when there is no selection or it falls outside the surface;
    /// the previously captured range is retained.
    pub fn capture_selection(&mut self) {
        self.tracker
            .capture(self.surface.selection(), self.surface.len_chars());
    }

    /// Dispatch a toolbar command against the restored selection.
    pub fn dispatch(&mut self, command: Command) {
        trace!(?command, "dispatch");
        match command {
            Command::Bold => self.exec(BuiltinCommand::Bold, None),
            Command::Italic => self.exec(BuiltinCommand::Italic, None),
            Command::Underline => self.exec(BuiltinCommand::Underline, None),
            Command::Strikethrough => self.exec(BuiltinCommand::Strikethrough, None),
            Command::BulletList => self.exec(BuiltinCommand::UnorderedList, None),
            Command::NumberedList => self.exec(BuiltinCommand::OrderedList, None),
            Command::InsertText(text) => self.exec(BuiltinCommand::InsertText, Some(&text)),
            Command::InsertEmoji(text) => self.insert_emoji(&text),
            Command::AdjustFontSize(delta) => self.change_font_size(delta),
            Command::TextColor(color) => self.apply_color(color),
        }
    }

    /// Execute a built-in command at the restored selection.
    ///
    /// The surface command set is best-effort: failure is swallowed and the
    /// state still synchronizes, so an applied-but-unchanged document never
    /// desyncs (the history dedup absorbs it).
    pub fn exec(&mut self, command: BuiltinCommand, value: Option<&str>) {
        self.restore_selection();
        if !self.surface.execute(command, value) {
            debug!(command = command.name(), "builtin command not applied");
        }
        self.sync_after_edit();
    }

    /// Apply a foreground color to the restored selection.
    ///
    /// Tries the built-in `foreColor` command first and falls back to an
    /// inline-style wrap when the surface refuses it.
    pub fn apply_color(&mut self, color: Color) {
        self.restore_selection();
        if self
            .surface
            .execute(BuiltinCommand::ForeColor, Some(&color.to_css()))
        {
            self.sync_after_edit();
        } else {
            debug!(color = %color, "foreColor unsupported, wrapping inline");
            self.wrap_selection(InlineStyle::color(color));
        }
    }

    /// Adjust the cumulative font-size step and re-apply the resulting
    /// absolute size to the restored selection.
    ///
    /// The step clamps at its bounds but the style is re-applied on every
    /// call; the history dedup absorbs any redundant snapshot.
    pub fn change_font_size(&mut self, delta: i32) {
        let size_px = self.font_step.adjust(delta);
        self.restore_selection();
        self.wrap_selection(InlineStyle::font_size(size_px));
    }

    /// Insert an emoji at the restored selection (plain-text insertion).
    pub fn insert_emoji(&mut self, emoji: &str) {
        if !crate::emoji::is_single_grapheme(emoji) {
            trace!(emoji, "multi-grapheme emoji insertion");
        }
        self.exec(BuiltinCommand::InsertText, Some(emoji));
    }

    /// Wrap the restored selection in an inline style container.
    ///
    /// A collapsed or missing selection is a no-op: no document change and
    /// no history entry.
    pub fn apply_inline_style(&mut self, style: InlineStyle) {
        self.restore_selection();
        self.wrap_selection(style);
    }

    /// Step back one snapshot. No-op at the oldest state.
    pub fn undo(&mut self) {
        let Some(content) = self.history.undo().map(ToOwned::to_owned) else {
            return;
        };
        self.apply_snapshot(&content);
    }

    /// Step forward one snapshot. No-op at the newest state.
    pub fn redo(&mut self) {
        let Some(content) = self.history.redo().map(ToOwned::to_owned) else {
            return;
        };
        self.apply_snapshot(&content);
    }

    /// Change-notification handler for user edits on the surface (typing,
    /// direct mutation). Suppressed while an undo/redo write is in flight.
    pub fn on_surface_change(&mut self) {
        if !self.surface.take_changed() {
            return;
        }
        if self.restoring {
            return;
        }
        let content = self.surface.content();
        self.history.push(&content);
        self.document = content;
    }

    /// Signal an export request; rendering the file is the host's job.
    pub fn request_export(&mut self, format: ExportFormat) {
        self.emit(SessionEvent::ExportRequested(format));
    }

    /// Signal a share request.
    pub fn request_share(&mut self) {
        self.emit(SessionEvent::ShareRequested);
    }

    /// Signal that the user wants to discard the session and start over.
    pub fn start_over(&mut self) {
        self.emit(SessionEvent::StartOverRequested);
    }

    fn restore_selection(&mut self) {
        if let Some(range) = self.tracker.restore() {
            self.surface.set_selection(range);
        }
    }

    /// Strategy 2: manual inline wrap at the surface's current selection.
    fn wrap_selection(&mut self, style: InlineStyle) {
        let Some(range) = self.surface.selection() else {
            return;
        };
        if range.is_collapsed() {
            return;
        }
        let (start, _) = range.normalized();
        let inner = self.surface.extract_range(range);
        let open = format!("<span style=\"{}\">", style.css());
        self.surface.insert_at(start, &format!("{open}{inner}</span>"));

        // Reselect the wrapped content so chained commands compose.
        let inner_start = start + open.chars().count();
        let inner_end = inner_start + inner.chars().count();
        self.surface
            .set_selection(SelectionRange::new(inner_start, inner_end));
        self.sync_after_edit();
    }

    /// Read the surface back, replace the document state, and record the
    /// snapshot.
    fn sync_after_edit(&mut self) {
        self.surface.take_changed();
        let content = self.surface.content();
        self.history.push(&content);
        self.document = content;
    }

    /// Write a history snapshot into the surface under the guard flag, so
    /// the change notification is not recorded as a new edit.
    fn apply_snapshot(&mut self, content: &str) {
        self.restoring = true;
        self.surface.set_content(content);
        // Drain the programmatic-write notification while guarded.
        self.on_surface_change();
        self.restoring = false;
        self.document = content.to_string();
    }

    fn emit(&mut self, event: SessionEvent) {
        debug!(?event, "session event");
        if let Some(sink) = self.events.as_mut() {
            sink(event);
        }
    }
}

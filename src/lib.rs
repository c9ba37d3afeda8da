//! Rich-text minutes editing engine.
//!
//! `minutes_editor` implements the editing core of a transcript-to-minutes
//! application: selection preservation across toolbar interactions, command
//! dispatch against an editable surface, and a linear undo/redo log over
//! serialized document snapshots.
//!
//! The live editable region is abstracted behind [`EditSurface`]; the crate
//! ships [`MarkupSurface`], a rope-backed in-memory implementation that
//! works headless and doubles as a test surface. Built-in formatting
//! commands are best-effort capabilities — when a surface refuses one (for
//! example color), the dispatcher falls back to wrapping the selection in
//! an inline style container.
//!
//! # Examples
//!
//! ```
//! use minutes_editor::{Command, EditSurface, EditorSession, MarkupSurface, SelectionRange};
//!
//! let mut session = EditorSession::mount(MarkupSurface::new(), "<p>Hello</p>", None);
//!
//! // The host captures the selection on pointer-down, before the toolbar
//! // click collapses it.
//! session.surface_mut().set_selection(SelectionRange::new(3, 8));
//! session.capture_selection();
//!
//! session.dispatch(Command::Bold);
//! assert_eq!(session.content(), "<p><b>Hello</b></p>");
//!
//! session.undo();
//! assert_eq!(session.content(), "<p>Hello</p>");
//! session.redo();
//! assert_eq!(session.content(), "<p><b>Hello</b></p>");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow SelectionRange, ExportFormat etc
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::cast_sign_loss)] // Font sizes are clamped before the cast
#![allow(clippy::format_push_string)] // format! with push_str is fine

pub mod color;
pub mod command;
pub mod emoji;
pub mod error;
pub mod event;
pub mod export;
pub mod font;
pub mod history;
pub mod markup;
pub mod minutes;
pub mod selection;
pub mod session;
pub mod style;
pub mod surface;

// Re-export core types at crate root
pub use color::Color;
pub use command::{BuiltinCommand, Command};
pub use error::{Error, Result};
pub use event::{EventSink, SessionEvent};
pub use export::ExportFormat;
pub use font::FontSizeStep;
pub use history::HistoryLog;
pub use markup::MarkupSurface;
pub use minutes::{ActionItem, Decision, DiscussionPoint, MeetingMinutes};
pub use selection::{SelectionRange, SelectionTracker};
pub use session::EditorSession;
pub use style::{InlineStyle, TextAttributes};
pub use surface::EditSurface;

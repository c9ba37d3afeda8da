//! Rope-backed in-memory editable surface.

use crate::command::BuiltinCommand;
use crate::selection::SelectionRange;
use crate::surface::EditSurface;
use ropey::Rope;

/// In-memory editable surface over a serialized markup string.
///
/// Content lives in a rope and is addressed by character offsets, matching
/// the selection model. The surface implements the tag-wrapping formatting
/// commands directly; `foreColor` is reported unsupported so the
/// dispatcher's inline-style fallback carries color instead.
///
/// Doubles as the headless surface for tests and server-side use.
///
/// # Examples
///
/// ```
/// use minutes_editor::{BuiltinCommand, EditSurface, MarkupSurface, SelectionRange};
///
/// let mut surface = MarkupSurface::with_markup("<p>Hello</p>");
/// surface.set_selection(SelectionRange::new(3, 8));
/// assert!(surface.execute(BuiltinCommand::Bold, None));
/// assert_eq!(surface.content(), "<p><b>Hello</b></p>");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkupSurface {
    rope: Rope,
    selection: Option<SelectionRange>,
    changed: bool,
}

impl MarkupSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with initial markup.
    #[must_use]
    pub fn with_markup(markup: &str) -> Self {
        Self {
            rope: Rope::from_str(markup),
            selection: None,
            changed: false,
        }
    }

    fn clamp(&self, offset: usize) -> usize {
        offset.min(self.rope.len_chars())
    }

    fn clamped(&self, range: SelectionRange) -> SelectionRange {
        SelectionRange::new(self.clamp(range.anchor), self.clamp(range.focus))
    }

    /// Wrap the current selection in a tag pair and reselect the wrapped
    /// content so chained commands compose.
    fn wrap_tag(&mut self, tag: &str) -> bool {
        let Some(range) = self.selection else {
            return false;
        };
        if range.is_collapsed() {
            return false;
        }
        let (start, _) = self.clamped(range).normalized();
        let inner = self.extract_range(range);
        let open = format!("<{tag}>");
        self.insert_at(start, &format!("{open}{inner}</{tag}>"));
        let inner_start = start + open.chars().count();
        self.selection = Some(SelectionRange::new(
            inner_start,
            inner_start + inner.chars().count(),
        ));
        true
    }

    fn wrap_list(&mut self, tag: &str) -> bool {
        match self.selection {
            Some(range) if !range.is_collapsed() => {
                let (start, _) = self.clamped(range).normalized();
                let inner = self.extract_range(range);
                let open = format!("<{tag}><li>");
                self.insert_at(start, &format!("{open}{inner}</li></{tag}>"));
                let inner_start = start + open.chars().count();
                self.selection = Some(SelectionRange::new(
                    inner_start,
                    inner_start + inner.chars().count(),
                ));
                true
            }
            // Caret: start an empty list block and place the caret inside it.
            Some(range) => {
                let start = self.clamp(range.anchor);
                let open = format!("<{tag}><li>");
                self.insert_at(start, &format!("{open}</li></{tag}>"));
                self.selection = Some(SelectionRange::caret(start + open.chars().count()));
                true
            }
            None => false,
        }
    }

    fn insert_text(&mut self, text: &str) -> bool {
        let Some(range) = self.selection else {
            return false;
        };
        let (start, _) = self.clamped(range).normalized();
        if !range.is_collapsed() {
            self.extract_range(range);
        }
        self.insert_at(start, text);
        self.selection = Some(SelectionRange::caret(start + text.chars().count()));
        true
    }
}

impl EditSurface for MarkupSurface {
    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn set_content(&mut self, markup: &str) {
        self.rope = Rope::from_str(markup);
        self.selection = None;
        self.changed = true;
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    fn set_selection(&mut self, range: SelectionRange) {
        self.selection = Some(self.clamped(range));
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn execute(&mut self, command: BuiltinCommand, value: Option<&str>) -> bool {
        let applied = match command {
            BuiltinCommand::Bold => self.wrap_tag("b"),
            BuiltinCommand::Italic => self.wrap_tag("i"),
            BuiltinCommand::Underline => self.wrap_tag("u"),
            BuiltinCommand::Strikethrough => self.wrap_tag("s"),
            BuiltinCommand::UnorderedList => self.wrap_list("ul"),
            BuiltinCommand::OrderedList => self.wrap_list("ol"),
            BuiltinCommand::InsertText => match value {
                Some(text) if !text.is_empty() => self.insert_text(text),
                _ => false,
            },
            // Color is the dispatcher's inline-style fallback.
            BuiltinCommand::ForeColor => false,
        };
        if applied {
            self.changed = true;
        }
        applied
    }

    fn extract_range(&mut self, range: SelectionRange) -> String {
        let (start, end) = self.clamped(range).normalized();
        if start >= end {
            return String::new();
        }
        let inner = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        self.changed = true;
        inner
    }

    fn insert_at(&mut self, offset: usize, markup: &str) {
        let offset = self.clamp(offset);
        self.rope.insert(offset, markup);
        self.changed = true;
    }

    fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

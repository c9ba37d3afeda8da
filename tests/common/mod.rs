//! Shared test doubles for driving the session API.

#![allow(dead_code)] // Not every test file uses every helper

use minutes_editor::{BuiltinCommand, EditSurface, SelectionRange};

/// Route engine tracing to the test writer. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Scriptable surface that records every built-in command it is asked to
/// run.
///
/// Commands listed in `supported` mutate a plain string model the way a
/// cooperative environment would; everything else reports failure, like an
/// environment missing that command. A supported command with no modelled
/// mutation still reports success, which is exactly the "applied but
/// nothing changed" case the history dedup has to absorb.
pub struct RecordingSurface {
    content: String,
    selection: Option<SelectionRange>,
    supported: Vec<BuiltinCommand>,
    pub executed: Vec<(&'static str, Option<String>)>,
    changed: bool,
}

impl RecordingSurface {
    pub fn new(content: &str, supported: &[BuiltinCommand]) -> Self {
        Self {
            content: content.to_string(),
            selection: None,
            supported: supported.to_vec(),
            executed: Vec::new(),
            changed: false,
        }
    }

    fn byte_of(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(byte, _)| byte)
    }

    fn clamp(&self, offset: usize) -> usize {
        offset.min(self.content.chars().count())
    }

    /// Model of the environment's `foreColor`: wrap the selection in a
    /// `<font color="...">` element and reselect the wrapped text.
    fn apply_font_color(&mut self, value: &str) -> bool {
        let Some(range) = self.selection else {
            return false;
        };
        if range.is_collapsed() {
            return false;
        }
        let (start, end) = range.normalized();
        let (byte_start, byte_end) = (self.byte_of(start), self.byte_of(end));
        let inner = self.content[byte_start..byte_end].to_string();
        let open = format!("<font color=\"{value}\">");
        self.content
            .replace_range(byte_start..byte_end, &format!("{open}{inner}</font>"));
        let inner_start = start + open.chars().count();
        self.selection = Some(SelectionRange::new(
            inner_start,
            inner_start + inner.chars().count(),
        ));
        true
    }

    fn apply_insert_text(&mut self, text: &str) -> bool {
        let Some(range) = self.selection else {
            return false;
        };
        let (start, end) = range.normalized();
        let (byte_start, byte_end) = (self.byte_of(start), self.byte_of(end));
        self.content.replace_range(byte_start..byte_end, text);
        self.selection = Some(SelectionRange::caret(start + text.chars().count()));
        true
    }
}

impl EditSurface for RecordingSurface {
    fn content(&self) -> String {
        self.content.clone()
    }

    fn set_content(&mut self, markup: &str) {
        self.content = markup.to_string();
        self.selection = None;
        self.changed = true;
    }

    fn len_chars(&self) -> usize {
        self.content.chars().count()
    }

    fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    fn set_selection(&mut self, range: SelectionRange) {
        self.selection = Some(SelectionRange::new(
            self.clamp(range.anchor),
            self.clamp(range.focus),
        ));
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn execute(&mut self, command: BuiltinCommand, value: Option<&str>) -> bool {
        self.executed
            .push((command.name(), value.map(ToOwned::to_owned)));
        if !self.supported.contains(&command) {
            return false;
        }
        let applied = match command {
            BuiltinCommand::ForeColor => {
                let Some(value) = value else { return false };
                self.apply_font_color(value)
            }
            BuiltinCommand::InsertText => {
                let Some(value) = value else { return false };
                self.apply_insert_text(value)
            }
            // Claimed as supported but not modelled: success, no mutation.
            _ => true,
        };
        if applied {
            self.changed = true;
        }
        applied
    }

    fn extract_range(&mut self, range: SelectionRange) -> String {
        let (start, end) = range.normalized();
        let (byte_start, byte_end) = (self.byte_of(start), self.byte_of(end));
        if byte_start >= byte_end {
            return String::new();
        }
        let inner = self.content[byte_start..byte_end].to_string();
        self.content.replace_range(byte_start..byte_end, "");
        self.changed = true;
        inner
    }

    fn insert_at(&mut self, offset: usize, markup: &str) {
        let byte = self.byte_of(self.clamp(offset));
        self.content.insert_str(byte, markup);
        self.changed = true;
    }

    fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

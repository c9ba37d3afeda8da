//! The editable surface abstraction.

use crate::command::BuiltinCommand;
use crate::selection::SelectionRange;

/// A live editable region holding the serialized document.
///
/// The engine addresses the surface through character offsets into its
/// serialized content: the selection model, range extraction, and insertion
/// all speak offsets, so the same dispatcher drives a real rendering
/// environment or the in-memory [`MarkupSurface`](crate::MarkupSurface).
///
/// Implementations degrade gracefully rather than erroring: unsupported
/// commands return `false`, out-of-range offsets clamp, and a missing
/// selection makes range operations no-ops.
///
/// Every mutation raises an edge-triggered change flag. The session's
/// synchronization step consumes it via [`take_changed`](Self::take_changed)
/// unless the undo/redo guard is active, in which case the flag is drained
/// without recording a new history entry.
pub trait EditSurface {
    /// Current serialized content.
    fn content(&self) -> String;

    /// Replace the entire content.
    ///
    /// Used only for programmatic writes (undo/redo and source loads).
    /// Drops the current selection.
    fn set_content(&mut self, markup: &str);

    /// Content length in characters.
    fn len_chars(&self) -> usize;

    /// Current selection, if any.
    fn selection(&self) -> Option<SelectionRange>;

    /// Replace the current selection, clamping to the content bounds.
    fn set_selection(&mut self, range: SelectionRange);

    /// Drop the current selection.
    fn clear_selection(&mut self);

    /// Execute a built-in formatting command at the current selection.
    ///
    /// Returns `false` when the command is unsupported or could not be
    /// applied.
    fn execute(&mut self, command: BuiltinCommand, value: Option<&str>) -> bool;

    /// Remove and return the content covered by `range`.
    fn extract_range(&mut self, range: SelectionRange) -> String;

    /// Insert markup at a character offset.
    fn insert_at(&mut self, offset: usize, markup: &str);

    /// Consume the change flag raised by the last mutation.
    fn take_changed(&mut self) -> bool;
}

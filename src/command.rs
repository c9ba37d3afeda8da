//! Toolbar commands and the built-in command vocabulary.

use crate::color::Color;

/// Built-in formatting commands understood by an editable surface.
///
/// These mirror the rich-text command vocabulary of the environments the
/// engine targets. Surfaces execute them best-effort: an unsupported or
/// failed command reports `false` instead of raising an error, and the
/// dispatcher decides whether a fallback exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinCommand {
    /// Toggle bold over the selection.
    Bold,
    /// Toggle italic over the selection.
    Italic,
    /// Toggle underline over the selection.
    Underline,
    /// Toggle strikethrough over the selection.
    Strikethrough,
    /// Turn the selection into a bullet list.
    UnorderedList,
    /// Turn the selection into a numbered list.
    OrderedList,
    /// Insert plain text at the selection.
    InsertText,
    /// Set the foreground color of the selection.
    ForeColor,
}

impl BuiltinCommand {
    /// Wire name of the command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikeThrough",
            Self::UnorderedList => "insertUnorderedList",
            Self::OrderedList => "insertOrderedList",
            Self::InsertText => "insertText",
            Self::ForeColor => "foreColor",
        }
    }
}

/// A toolbar action dispatched against the editing session.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Bold the selection.
    Bold,
    /// Italicize the selection.
    Italic,
    /// Underline the selection.
    Underline,
    /// Strike through the selection.
    Strikethrough,
    /// Wrap the selection in a bullet list.
    BulletList,
    /// Wrap the selection in a numbered list.
    NumberedList,
    /// Insert plain text at the selection.
    InsertText(String),
    /// Insert an emoji at the selection. Treated as plain-text insertion.
    InsertEmoji(String),
    /// Adjust the cumulative font-size step by a relative delta.
    AdjustFontSize(i32),
    /// Apply a foreground color to the selection.
    TextColor(Color),
}

//! Inline styling for manually wrapped selections.
//!
//! Most formatting goes through the surface's built-in commands. When a
//! command is unavailable (color on some surfaces) or has no built-in form
//! (font size), the dispatcher wraps the selection in an inline container
//! whose `style` attribute is rendered from an [`InlineStyle`].

use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Text attributes expressible through built-in formatting commands.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold weight.
        const BOLD          = 0x01;
        /// Italic slant.
        const ITALIC        = 0x02;
        /// Underlined text.
        const UNDERLINE     = 0x04;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x08;
    }
}

/// Style payload for an inline wrap container.
///
/// Unset fields are omitted from the rendered `style` attribute, so a
/// container only carries the properties the command asked for.
///
/// # Examples
///
/// ```
/// use minutes_editor::{Color, InlineStyle};
///
/// let style = InlineStyle::font_size(18).with_color(Color::RED);
/// assert_eq!(style.css(), "font-size: 18px; color: #ff0000");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    /// Absolute font size in pixels.
    pub font_size_px: Option<u32>,
    /// Foreground color.
    pub color: Option<Color>,
    /// Attribute flags.
    pub attributes: TextAttributes,
}

impl InlineStyle {
    /// Style carrying only a font size.
    #[must_use]
    pub fn font_size(px: u32) -> Self {
        Self {
            font_size_px: Some(px),
            ..Self::default()
        }
    }

    /// Style carrying only a foreground color.
    #[must_use]
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Return the style with a font size set.
    #[must_use]
    pub const fn with_font_size(mut self, px: u32) -> Self {
        self.font_size_px = Some(px);
        self
    }

    /// Return the style with a color set.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Return the style with attribute flags added.
    #[must_use]
    pub fn with_attributes(mut self, attributes: TextAttributes) -> Self {
        self.attributes |= attributes;
        self
    }

    /// Check whether the style carries no properties at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.font_size_px.is_none() && self.color.is_none() && self.attributes.is_empty()
    }

    /// Merge styles; `other` wins where both set the same property.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            font_size_px: other.font_size_px.or(self.font_size_px),
            color: other.color.or(self.color),
            attributes: self.attributes | other.attributes,
        }
    }

    /// Render the CSS declarations for the container's `style` attribute.
    #[must_use]
    pub fn css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(px) = self.font_size_px {
            parts.push(format!("font-size: {px}px"));
        }
        if let Some(color) = self.color {
            parts.push(format!("color: {color}"));
        }
        if self.attributes.contains(TextAttributes::BOLD) {
            parts.push("font-weight: bold".to_string());
        }
        if self.attributes.contains(TextAttributes::ITALIC) {
            parts.push("font-style: italic".to_string());
        }
        let mut decorations = Vec::new();
        if self.attributes.contains(TextAttributes::UNDERLINE) {
            decorations.push("underline");
        }
        if self.attributes.contains(TextAttributes::STRIKETHROUGH) {
            decorations.push("line-through");
        }
        if !decorations.is_empty() {
            parts.push(format!("text-decoration: {}", decorations.join(" ")));
        }
        parts.join("; ")
    }
}

//! Emoji palette for the toolbar picker.
//!
//! Insertion itself is plain-text insertion through the dispatcher; this
//! module only supplies the default picker palette and a grapheme check.

use unicode_segmentation::UnicodeSegmentation;

/// Default emoji palette offered by the toolbar picker.
pub const PALETTE: [&str; 16] = [
    "\u{1F600}",        // 😀
    "\u{1F601}",        // 😁
    "\u{1F602}",        // 😂
    "\u{1F60A}",        // 😊
    "\u{1F60D}",        // 😍
    "\u{1F60E}",        // 😎
    "\u{1F914}",        // 🤔
    "\u{1F44D}",        // 👍
    "\u{1F44F}",        // 👏
    "\u{1F389}",        // 🎉
    "\u{2705}",         // ✅
    "\u{1F4CC}",        // 📌
    "\u{1F4DD}",        // 📝
    "\u{1F4A1}",        // 💡
    "\u{26A0}\u{FE0F}", // ⚠️
    "\u{2757}",         // ❗
];

/// Check that `text` is a single grapheme cluster.
///
/// Several palette entries are multi-codepoint sequences (variation
/// selectors, ZWJ joins), so char counts are the wrong measure here.
#[must_use]
pub fn is_single_grapheme(text: &str) -> bool {
    let mut graphemes = text.graphemes(true);
    graphemes.next().is_some() && graphemes.next().is_none()
}

//! WebDriver key codepoints for Element Send Keys.
//!
//! The remote end interprets these private-use codepoints as keyboard keys
//! rather than text. Only the keys the test suite sends are listed.

pub const BACK_SPACE: char = '\u{e003}';
pub const TAB: char = '\u{e004}';
pub const ENTER: char = '\u{e007}';
pub const ESCAPE: char = '\u{e00c}';

/// A string of `n` backspace presses, for erasing typed input.
pub fn backspaces(n: usize) -> String {
    std::iter::repeat_n(BACK_SPACE, n).collect()
}

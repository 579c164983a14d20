use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Display width of a single character in terminal cells.
pub fn char_display_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(grapheme);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset`, clamped to the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> usize {
    if offset >= s.len() {
        return s.len();
    }
    s[offset..]
        .grapheme_indices(true)
        .nth(1)
        .map(|(i, _)| offset + i)
        .unwrap_or(s.len())
}

/// Byte offset of the grapheme boundary before `offset`, clamped to zero.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> usize {
    let clamped = offset.min(s.len());
    s[..clamped]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

//! Shared rendering utilities and helpers.
//!
//! Cursor positioning and character-aware text fitting. Widths are counted in
//! `char`s, which is what the archive's filenames and `pdftotext` output
//! need; wide glyphs are not special-cased.

/// Marker appended to text cut short by [`fit_to_width`].
const ELLIPSIS: char = '…';

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `width` characters.
///
/// Text that is cut short ends in `…`. Never splits a multi-byte character.
///
/// ```
/// use tie_archive::ui::helpers::fit_to_width;
///
/// assert_eq!(fit_to_width("The Tie That Binds", 8), "The Tie…");
/// assert_eq!(fit_to_width("short", 8), "short");
/// ```
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted: String = text.chars().take(width - 1).collect();
    fitted.push(ELLIPSIS);
    fitted
}

/// Fits `text` to exactly `width` characters, padding with spaces.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let fitted = fit_to_width(text, width);
    let padding = width.saturating_sub(fitted.chars().count());
    format!("{fitted}{}", " ".repeat(padding))
}

/// Replaces characters a terminal would interpret.
///
/// Tabs expand to four spaces; form feeds and other control characters are
/// dropped.
#[must_use]
pub fn sanitize_line(line: &str) -> String {
    let mut clean = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\t' => clean.push_str("    "),
            c if c.is_control() => {}
            c => clean.push(c),
        }
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters_not_bytes() {
        assert_eq!(fit_to_width("Café Noir", 4), "Caf…");
        assert_eq!(fit_to_width("Café", 4), "Café");
    }

    #[test]
    fn fit_handles_tiny_widths() {
        assert_eq!(fit_to_width("abc", 0), "");
        assert_eq!(fit_to_width("abc", 1), "…");
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
        assert_eq!(pad_to_width("é", 2).chars().count(), 2);
    }

    #[test]
    fn sanitize_strips_control_characters() {
        assert_eq!(sanitize_line("\u{c}Page 2\tend\r"), "Page 2    end");
        assert_eq!(sanitize_line("\u{1b}[31mred"), "[31mred");
    }
}

/// Elapsed seconds rendered as MM:SS for the timed-mode clock.
pub fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Map raw key input to a board letter: ASCII letters only, lowercased.
/// Everything else (digits, punctuation, control chars) is not a letter
/// intent and yields `None`.
pub fn normalize_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_lowercase())
    } else {
        None
    }
}

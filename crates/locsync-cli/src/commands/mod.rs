pub mod check;
pub mod merge;
pub mod sync;

/// Truncate a value for one-line console listings; char-safe.
pub(crate) fn preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars).collect();
    out.push('…');
    out
}

//! Leak records parsing - occasion count search within a range response.

/// Finds the leak occasion count for a hash suffix in a range response.
///
/// `records` is scanned in document order, one `SUFFIX:COUNT` entry per line
/// (`\n` and `\r\n` both accepted); the first line whose suffix equals
/// `suffix` wins. The comparison is case-sensitive, so the suffix must be
/// produced with the same casing as the records (uppercase).
///
/// # Returns
/// - `Some(count)` for a matching line with a positive count
/// - `Some(0)` if no line matches (confirmed absent)
/// - `None` if the matching line's count is missing, malformed or not positive
pub fn count_leak_occasions(records: &str, suffix: &str) -> Option<u64> {
    for line in records.lines() {
        let (line_suffix, count_text) = line.split_once(':').unwrap_or((line, ""));
        if line_suffix == suffix {
            return match count_text.parse::<u64>() {
                Ok(count) if count > 0 => Some(count),
                _ => None,
            };
        }
    }
    Some(0)
}

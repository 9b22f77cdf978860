//! Small text helpers shared by cards and headers.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

/// Uppercased first character of a name, or `?` when blank.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Short `YYYY-MM-DD HH:MM` label from an ISO 8601 timestamp.
///
/// Anything that does not look like ISO 8601 is shown as-is.
pub fn timestamp_label(created_at: Option<&str>) -> String {
    let Some(raw) = created_at else {
        return String::new();
    };
    let bytes = raw.as_bytes();
    if raw.len() >= 16 && raw.is_char_boundary(16) && bytes[4] == b'-' && bytes[10] == b'T' {
        format!("{} {}", &raw[..10], &raw[11..16])
    } else {
        raw.to_owned()
    }
}

use super::*;

#[test]
fn avatar_initial_uppercases_first_char() {
    assert_eq!(avatar_initial("alice"), "A");
    assert_eq!(avatar_initial("  bob"), "B");
    assert_eq!(avatar_initial("éva"), "É");
}

#[test]
fn avatar_initial_falls_back_for_blank() {
    assert_eq!(avatar_initial(""), "?");
    assert_eq!(avatar_initial("   "), "?");
}

#[test]
fn timestamp_label_shortens_iso() {
    assert_eq!(timestamp_label(Some("2024-03-09T14:05:59.123Z")), "2024-03-09 14:05");
}

#[test]
fn timestamp_label_passes_through_other_formats() {
    assert_eq!(timestamp_label(Some("yesterday")), "yesterday");
    assert_eq!(timestamp_label(None), "");
}

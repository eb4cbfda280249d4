use crate::normalize;

// === Comment stripping ===

#[test]
fn plain_line_passes_through() {
    assert_eq!(normalize("NODE 1"), Some("NODE 1"));
}

#[test]
fn trailing_comment_is_truncated() {
    assert_eq!(normalize("A ! comment"), Some("A"));
}

#[test]
fn full_line_comment_is_discarded() {
    assert_eq!(normalize("!A"), None);
}

#[test]
fn indented_comment_only_line_is_discarded() {
    // Marker past column 0, but nothing survives the trim.
    assert_eq!(normalize("   ! note"), None);
}

#[test]
fn only_first_marker_counts() {
    assert_eq!(normalize("A ! b ! c"), Some("A"));
}

#[test]
fn marker_adjacent_to_token() {
    assert_eq!(normalize("NCTRL=4!inline"), Some("NCTRL=4"));
}

// === Trimming and blanks ===

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(normalize("  NODE 1  "), Some("NODE 1"));
}

#[test]
fn empty_line_is_discarded() {
    assert_eq!(normalize(""), None);
}

#[test]
fn whitespace_only_line_is_discarded() {
    assert_eq!(normalize(" \t "), None);
}

#[test]
fn interior_whitespace_is_preserved() {
    assert_eq!(normalize("\tA  B\t"), Some("A  B"));
}

use super::{inline::Segment, span::Span};

/// Validates the segments produced for one line.
///
/// Asserts that:
/// - Segments are non-empty and within the line's span
/// - Segments are position-ordered and contiguous (no gaps or overlaps)
/// - Together they cover the whole line
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_segments(line: Span, segments: &[Segment]) {
    let mut expected_start = line.start;
    for seg in segments {
        assert!(
            !seg.span.is_empty(),
            "empty segment: {:?} in line {:?}",
            seg.span,
            line
        );
        assert_eq!(
            seg.span.start, expected_start,
            "gap or overlap before segment {:?} (expected start {})",
            seg.span, expected_start
        );
        assert!(
            seg.span.end <= line.end,
            "segment out of bounds: {:?} (line {:?})",
            seg.span,
            line
        );
        expected_start = seg.span.end;
    }
    assert_eq!(
        expected_start, line.end,
        "segments do not cover line {line:?}"
    );
}

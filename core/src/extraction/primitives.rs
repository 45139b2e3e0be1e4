/// Result of slicing a report around one or two markers
///
/// `Missing` and `Empty` both collapse to `""` in the string forms
/// ([`between`], [`before`], [`after`]); the distinction is only kept
/// for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice<'a> {
    /// Markers located, non-empty span
    Found(&'a str),
    /// A marker does not occur in the text
    Missing,
    /// Markers located but the span is empty or inverted
    Empty,
}

impl<'a> Slice<'a> {
    /// Returns the sliced text, or `""` when nothing was found
    pub fn as_str(&self) -> &'a str {
        match self {
            Slice::Found(s) => s,
            Slice::Missing | Slice::Empty => "",
        }
    }

    /// Returns whether a marker was absent
    pub fn is_missing(&self) -> bool {
        matches!(self, Slice::Missing)
    }
}

/// Slices the text between the first `start` and the last `end`
///
/// # Algorithm
///
/// 1. Locate the first occurrence of `start`
/// 2. Locate the last occurrence of `end`
/// 3. Span runs from the end of `start` up to the beginning of `end`
///
/// Anchoring on the last `end` tolerates the end marker also showing up
/// inside the section body.
pub fn slice_between<'a>(text: &'a str, start: &str, end: &str) -> Slice<'a> {
    let Some(start_pos) = text.find(start) else {
        return Slice::Missing;
    };
    let Some(end_pos) = text.rfind(end) else {
        return Slice::Missing;
    };

    let span_start = start_pos + start.len();
    if span_start >= end_pos {
        return Slice::Empty;
    }
    Slice::Found(&text[span_start..end_pos])
}

/// Slices the text preceding the first `marker`
pub fn slice_before<'a>(text: &'a str, marker: &str) -> Slice<'a> {
    match text.find(marker) {
        None => Slice::Missing,
        Some(0) => Slice::Empty,
        Some(pos) => Slice::Found(&text[..pos]),
    }
}

/// Slices the text following the first `marker`
pub fn slice_after<'a>(text: &'a str, marker: &str) -> Slice<'a> {
    let Some(pos) = text.find(marker) else {
        return Slice::Missing;
    };

    let span_start = pos + marker.len();
    if span_start >= text.len() {
        return Slice::Empty;
    }
    Slice::Found(&text[span_start..])
}

/// Substring after the first `start` and before the last `end`, or `""`
///
/// # Example
///
/// ```
/// use radparse_core::extraction::between;
///
/// assert_eq!(between("a[x]b[y]c", "[", "]"), "x]b[y");
/// assert_eq!(between("no markers", "[", "]"), "");
/// ```
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    slice_between(text, start, end).as_str()
}

/// Substring before the first `marker`, or `""` if it is absent
pub fn before<'a>(text: &'a str, marker: &str) -> &'a str {
    slice_before(text, marker).as_str()
}

/// Substring after the first `marker`, or `""` if it is absent or ends the text
pub fn after<'a>(text: &'a str, marker: &str) -> &'a str {
    slice_after(text, marker).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<<a>>", "<<", ">>", "a")]
    #[case("x START body END y", "START ", " END", "body")]
    #[case("S one E two E three", "S ", " E", "one E two")]
    #[case("S a S b E", "S ", " E", "a S b")]
    fn test_between_found(
        #[case] text: &str,
        #[case] start: &str,
        #[case] end: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(between(text, start, end), expected);
    }

    #[rstest]
    #[case("body END", "START", "END")]
    #[case("START body", "START", "END")]
    #[case("", "START", "END")]
    #[case("nothing here", "START", "END")]
    fn test_between_missing_marker(#[case] text: &str, #[case] start: &str, #[case] end: &str) {
        assert_eq!(slice_between(text, start, end), Slice::Missing);
        assert_eq!(between(text, start, end), "");
    }

    #[rstest]
    // end precedes start
    #[case("END body START", "START", "END")]
    // start and end adjacent
    #[case("STARTEND", "START", "END")]
    // overlapping markers
    #[case("abc", "ab", "bc")]
    // same marker used for both, single occurrence
    #[case("x|y", "|", "|")]
    fn test_between_inverted_or_empty(#[case] text: &str, #[case] start: &str, #[case] end: &str) {
        assert_eq!(slice_between(text, start, end), Slice::Empty);
        assert_eq!(between(text, start, end), "");
    }

    #[test]
    fn test_between_same_marker_twice() {
        assert_eq!(between("x|y|z", "|", "|"), "y");
    }

    #[test]
    fn test_between_multibyte_text() {
        assert_eq!(between("é[ñandú]ü", "[", "]"), "ñandú");
    }

    #[rstest]
    #[case("head::tail", "::", "head")]
    #[case("a::b::c", "::", "a")]
    fn test_before_found(#[case] text: &str, #[case] marker: &str, #[case] expected: &str) {
        assert_eq!(before(text, marker), expected);
    }

    #[test]
    fn test_before_missing_or_leading() {
        assert_eq!(slice_before("no marker", "::"), Slice::Missing);
        assert_eq!(before("no marker", "::"), "");
        assert_eq!(slice_before("::tail", "::"), Slice::Empty);
        assert_eq!(before("::tail", "::"), "");
    }

    #[rstest]
    #[case("head::tail", "::", "tail")]
    #[case("a::b::c", "::", "b::c")]
    fn test_after_found(#[case] text: &str, #[case] marker: &str, #[case] expected: &str) {
        assert_eq!(after(text, marker), expected);
    }

    #[test]
    fn test_after_missing_marker() {
        assert_eq!(slice_after("head tail", "::"), Slice::Missing);
        assert_eq!(after("head tail", "::"), "");
    }

    #[test]
    fn test_after_marker_at_end() {
        assert_eq!(slice_after("head::", "::"), Slice::Empty);
        assert_eq!(after("head::", "::"), "");
    }

    #[test]
    fn test_slice_helpers() {
        assert_eq!(Slice::Found("x").as_str(), "x");
        assert!(Slice::Missing.is_missing());
        assert!(!Slice::Empty.is_missing());
    }
}

// Header Markers
pub const DATE_PREFIX: &str = "**DATE<[";
pub const DATE_OPEN: &str = "**DATE<[**";

// Inline Section Markers
pub const CLINICAL_INFORMATION: &str = "CLINICAL INFORMATION: ";
pub const TECHNIQUE: &str = "TECHNIQUE: ";
pub const TECHNIQUE_INLINE: &str = " TECHNIQUE: ";
pub const COMPARISON: &str = "COMPARISON: ";
pub const COMPARISON_INLINE: &str = " COMPARISON: ";

// Block Section Markers
pub const FINDINGS_BLOCK: &str = "\n\nFINDINGS:\n\n";
pub const IMPRESSION_BLOCK: &str = "\n\nIMPRESSION:\n\n";

// Signature Markers
pub const SIGNATURE: &str = "Report Electronically Signed:";
pub const SIGNATURE_PREFIX: &str = "Report Electronically Signed: ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_values() {
        assert!(DATE_OPEN.starts_with(DATE_PREFIX));
        assert_eq!(TECHNIQUE_INLINE.trim_start(), TECHNIQUE);
        assert_eq!(COMPARISON_INLINE.trim_start(), COMPARISON);
        assert_eq!(SIGNATURE_PREFIX.trim_end(), SIGNATURE);
        assert_eq!(FINDINGS_BLOCK.trim(), "FINDINGS:");
        assert_eq!(IMPRESSION_BLOCK.trim(), "IMPRESSION:");
    }
}

use serde::{Deserialize, Serialize};

/// Marker the backend embeds in an otherwise-successful response when it
/// could not produce a summary (e.g. no captions on the video).
pub const ERROR_MARKER: &str = "Could not generate summary";

/// The structured successful response: summary text, video title, source link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    pub video_title: String,
    pub video_url: String,
}

impl SummaryResult {
    /// Whether the backend signaled failure in-band in the summary text.
    ///
    /// The result view renders a dedicated error layout for these instead of
    /// either format, and copy/download become no-ops.
    pub fn is_backend_error(&self) -> bool {
        self.summary.contains(ERROR_MARKER)
    }

    /// Split the summary into bullet display items.
    ///
    /// Fragments are separated by newlines or the `•` glyph; blank fragments
    /// are dropped and the rest trimmed, input order preserved.
    pub fn bullet_points(&self) -> Vec<&str> {
        self.summary
            .split(['\n', '•'])
            .map(str::trim)
            .filter(|point| !point.is_empty())
            .collect()
    }

    /// The plain-text document written by the download action.
    pub fn export_document(&self) -> String {
        format!("Summary of: {}\n\n{}", self.video_title, self.summary)
    }

    /// Filename for the download action, derived from the video title:
    /// every non-alphanumeric character becomes `_`, lower-cased, suffixed
    /// `_summary.txt`.
    pub fn export_file_name(&self) -> String {
        let stem: String = self
            .video_title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}_summary.txt", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(summary: &str) -> SummaryResult {
        SummaryResult {
            summary: summary.to_string(),
            video_title: "Test Video".to_string(),
            video_url: "https://www.youtube.com/watch?v=abc".to_string(),
        }
    }

    #[test]
    fn test_bullet_split_on_newlines() {
        let r = result("First point\nSecond point\n\nThird");
        assert_eq!(
            r.bullet_points(),
            vec!["First point", "Second point", "Third"]
        );
    }

    #[test]
    fn test_bullet_split_on_glyph() {
        let r = result("• one • two • three");
        assert_eq!(r.bullet_points(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_bullet_split_mixed_separators_preserves_order() {
        let r = result("alpha\n• beta\ngamma •delta");
        assert_eq!(r.bullet_points(), vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn test_bullet_split_drops_whitespace_fragments() {
        let r = result("  \n only point \n   \n");
        assert_eq!(r.bullet_points(), vec!["only point"]);
    }

    #[test]
    fn test_error_marker_detection() {
        assert!(result("Could not generate summary for this video.").is_backend_error());
        assert!(!result("A perfectly fine summary").is_backend_error());
    }

    #[test]
    fn test_export_document_layout() {
        let r = result("Body text");
        assert_eq!(r.export_document(), "Summary of: Test Video\n\nBody text");
    }

    #[test]
    fn test_export_file_name_sanitizes_title() {
        let mut r = result("irrelevant");
        r.video_title = "My Video! #1".to_string();
        // '!' , ' ' and '#' each become '_'
        assert_eq!(r.export_file_name(), "my_video___1_summary.txt");
    }

    #[test]
    fn test_export_file_name_lowercases() {
        let mut r = result("irrelevant");
        r.video_title = "ABC".to_string();
        assert_eq!(r.export_file_name(), "abc_summary.txt");
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let r: SummaryResult = serde_json::from_str(
            r#"{"summary":"s","videoTitle":"t","videoUrl":"u"}"#,
        )
        .unwrap();
        assert_eq!(r.summary, "s");
        assert_eq!(r.video_title, "t");
        assert_eq!(r.video_url, "u");
    }
}

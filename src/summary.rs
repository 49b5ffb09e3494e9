/// Thread summary data and the plain-text renderings used by the
/// copy / download / report actions.
use serde::{Deserialize, Serialize};
use url::Url;

/// Summary of one thread, as returned by the summarize endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadSummary {
    pub author: String,
    pub tweet_count: usize,
    /// URL of the thread the summary was generated from. The endpoint
    /// keys this as `original_url`.
    #[serde(rename = "original_url")]
    pub source_url: String,
    pub bullet_points: Vec<String>,
}

impl ThreadSummary {
    /// A single numbered point, as placed on the clipboard by "copy point".
    pub fn point_line(&self, index: usize) -> Option<String> {
        self.bullet_points
            .get(index)
            .map(|text| format!("{}. {}", index + 1, text))
    }

    /// Full summary text for the "copy all" action.
    pub fn clipboard_text(&self, page_url: &str) -> String {
        let mut text = format!(
            "Thread Summary by {} ({} tweets)\n\n",
            self.author, self.tweet_count
        );

        for (index, point) in self.bullet_points.iter().enumerate() {
            text.push_str(&format!("{}. {}\n\n", index + 1, point));
        }

        text.push_str(&format!("Generated by ThreadCraft - {}", page_url));
        text
    }

    /// Plain-text document for the download action. Section headers are
    /// part of the file format and must stay as-is.
    pub fn download_text(&self, generated_on: &str, origin: &str) -> String {
        let mut content = format!("Thread Summary\n{}\n\n", "=".repeat(50));
        content.push_str(&format!("Author: {}\n", self.author));
        content.push_str(&format!("Tweet Count: {}\n", self.tweet_count));
        content.push_str(&format!("Original URL: {}\n", self.source_url));
        content.push_str(&format!("Generated: {}\n\n", generated_on));
        content.push_str(&format!("Summary:\n{}\n\n", "-".repeat(20)));

        for (index, point) in self.bullet_points.iter().enumerate() {
            content.push_str(&format!("{}. {}\n\n", index + 1, point));
        }

        content.push_str(&format!("\n{}\n", "=".repeat(50)));
        content.push_str("Generated by ThreadCraft - AI-Powered Thread Summarizer\n");
        content.push_str(&format!("{}\n", origin));
        content
    }

    /// File name for the downloaded summary.
    pub fn download_file_name(&self, timestamp_ms: i64) -> String {
        format!("thread-summary-{}-{}.txt", self.author, timestamp_ms)
    }
}

/// Envelope of the summarize endpoint's JSON response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryResponse {
    pub success: bool,
    #[serde(default)]
    pub summary: Option<ThreadSummary>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub processing_time: Option<f64>,
}

const ISSUE_TRACKER_URL: &str = "https://github.com/your-repo/threadcraft/issues/new";

/// Build the prefilled GitHub issue URL for the report-issue action.
pub fn issue_report_url(
    thread_url: &str,
    error_message: &str,
    user_agent: &str,
    timestamp: &str,
) -> String {
    let thread_url = if thread_url.is_empty() {
        "No URL provided"
    } else {
        thread_url
    };
    let error_message = if error_message.is_empty() {
        "Unknown error"
    } else {
        error_message
    };

    let body = format!(
        "**Error Report**\n\n\
         **URL:** {thread_url}\n\
         **Error:** {error_message}\n\
         **Browser:** {user_agent}\n\
         **Timestamp:** {timestamp}\n\n\
         **Additional Details:**\n(Please describe what you were trying to do)"
    );

    // ISSUE_TRACKER_URL is a constant and always parses
    let mut url = Url::parse(ISSUE_TRACKER_URL).expect("issue tracker URL is well-formed");
    url.query_pairs_mut()
        .append_pair("title", "Thread Processing Error")
        .append_pair("body", &body);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> ThreadSummary {
        ThreadSummary {
            author: "rustlang".to_string(),
            tweet_count: 7,
            source_url: "https://x.com/rustlang/status/123".to_string(),
            bullet_points: vec![
                "Borrowing rules prevent data races.".to_string(),
                "Lifetimes are mostly inferred.".to_string(),
            ],
        }
    }

    #[test]
    fn test_point_line() {
        let summary = sample_summary();
        assert_eq!(
            summary.point_line(0),
            Some("1. Borrowing rules prevent data races.".to_string())
        );
        assert_eq!(
            summary.point_line(1),
            Some("2. Lifetimes are mostly inferred.".to_string())
        );
        assert_eq!(summary.point_line(2), None);
    }

    #[test]
    fn test_clipboard_text() {
        let summary = sample_summary();
        let text = summary.clipboard_text("https://threadcraft.example/result");

        assert!(text.starts_with("Thread Summary by rustlang (7 tweets)\n\n"));
        assert!(text.contains("1. Borrowing rules prevent data races.\n\n"));
        assert!(text.contains("2. Lifetimes are mostly inferred.\n\n"));
        assert!(text.ends_with("Generated by ThreadCraft - https://threadcraft.example/result"));
    }

    #[test]
    fn test_download_text_sections() {
        let summary = sample_summary();
        let text = summary.download_text("2026-08-25", "https://threadcraft.example");

        assert!(text.starts_with(&format!("Thread Summary\n{}\n\n", "=".repeat(50))));
        assert!(text.contains("Author: rustlang\n"));
        assert!(text.contains("Tweet Count: 7\n"));
        assert!(text.contains("Original URL: https://x.com/rustlang/status/123\n"));
        assert!(text.contains("Generated: 2026-08-25\n"));
        assert!(text.contains(&format!("Summary:\n{}\n\n", "-".repeat(20))));
        assert!(text.contains("1. Borrowing rules prevent data races.\n\n"));
        assert!(text.contains("Generated by ThreadCraft - AI-Powered Thread Summarizer\n"));
        assert!(text.ends_with("https://threadcraft.example\n"));
    }

    #[test]
    fn test_download_file_name() {
        let summary = sample_summary();
        assert_eq!(
            summary.download_file_name(1700000000000),
            "thread-summary-rustlang-1700000000000.txt"
        );
    }

    #[test]
    fn test_summary_response_deserialization() {
        let json = r#"{
            "success": true,
            "summary": {
                "author": "rustlang",
                "tweet_count": 7,
                "original_url": "https://x.com/rustlang/status/123",
                "bullet_points": ["a", "b"]
            },
            "processing_time": 4.2
        }"#;

        let response: SummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.summary.unwrap().bullet_points.len(), 2);
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_summary_response_matches_endpoint_shape() {
        // Exact shape the summarize endpoint produces on success,
        // including the extra per-summary timing key we ignore
        let json = r#"{
            "success": true,
            "summary": {
                "bullet_points": ["a", "b", "c"],
                "author": "rustlang",
                "tweet_count": 9,
                "original_url": "https://x.com/rustlang/status/123",
                "processing_time_seconds": 4.21
            },
            "processing_time": 4.21
        }"#;

        let response: SummaryResponse = serde_json::from_str(json).unwrap();
        let summary = response.summary.unwrap();
        assert_eq!(summary.source_url, "https://x.com/rustlang/status/123");
        assert_eq!(summary.tweet_count, 9);
        assert_eq!(summary.bullet_points.len(), 3);
    }

    #[test]
    fn test_summary_response_error_case() {
        let json = r#"{"success": false, "error": "Failed to scrape thread"}"#;
        let response: SummaryResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.summary, None);
        assert_eq!(response.error, Some("Failed to scrape thread".to_string()));
    }

    #[test]
    fn test_issue_report_url() {
        let url = issue_report_url(
            "https://x.com/user/status/1",
            "Scrape failed",
            "TestBrowser/1.0",
            "2026-08-25T12:00:00Z",
        );

        assert!(url.starts_with("https://github.com/your-repo/threadcraft/issues/new?"));
        assert!(url.contains("title=Thread+Processing+Error"));
        assert!(url.contains("Scrape+failed"));
        assert!(url.contains("TestBrowser%2F1.0"));
    }

    #[test]
    fn test_issue_report_url_placeholders() {
        let url = issue_report_url("", "", "TestBrowser/1.0", "now");
        assert!(url.contains("No+URL+provided"));
        assert!(url.contains("Unknown+error"));
    }
}

//! Common helpers shared across TheAudioDB tools.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Render an unexpected failure as tool text.
///
/// The tool boundary never surfaces structured faults; whatever goes
/// wrong becomes a descriptive plain-text message for the caller.
pub fn failure_text(context: &str, subject: &str, message: &str) -> CallToolResult {
    let text = format!("Error {} '{}': {}", context, subject, message);
    warn!("{}", text);
    success_result(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_failure_text_shape() {
        let result = failure_text("searching for artist", "Coldplay", "thread panicked");
        assert_eq!(
            text_of(&result),
            "Error searching for artist 'Coldplay': thread panicked"
        );
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_error_result_flag() {
        let result = error_result("boom");
        assert!(result.is_error.unwrap_or(false));
    }
}

//! Track search tool (placeholder).
//!
//! TheAudioDB `searchtrack.php` endpoint is not wired up yet; this tool
//! always returns an explanatory message with the URL a real lookup
//! would use, and never performs network I/O.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::audiodb::format_track_placeholder;

use super::common::success_result;

/// Parameters for the track search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchTrackParams {
    /// The name of the musical artist.
    #[schemars(description = "The name of the musical artist")]
    pub artist_name: String,

    /// The name of the track/song.
    #[schemars(description = "The name of the track/song")]
    pub track_name: String,
}

/// Track search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchTrackTool;

impl SearchTrackTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_track";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for track/song information by artist name and track name, returning song details and metadata";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    ///
    /// Always returns the placeholder text, regardless of whether the
    /// artist or track exists.
    pub fn execute(params: &SearchTrackParams) -> CallToolResult {
        info!(
            "MCP Tool called: search_track with artist_name='{}', track_name='{}'",
            params.artist_name, params.track_name
        );

        success_result(format_track_placeholder(
            &params.artist_name,
            &params.track_name,
        ))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let artist_name = arguments
            .get("artist_name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'artist_name' parameter".to_string())?
            .to_string();

        let track_name = arguments
            .get("track_name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'track_name' parameter".to_string())?
            .to_string();

        let params = SearchTrackParams {
            artist_name,
            track_name,
        };

        let result = Self::execute(&params);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchTrackParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    ///
    /// No network call is made, so unlike the other tools this one runs
    /// directly on the async task.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: SearchTrackParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

impl Default for SearchTrackTool {
    fn default() -> Self {
        Self::new()
    }
}

//! Artist search tool.
//!
//! Looks up a single artist on TheAudioDB and returns a formatted
//! information block (biography, genre, formation year, labels, images).

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::audiodb::{AudioDbClient, FormatOptions, format_artist};

use super::common::{failure_text, success_result};

/// Parameters for the artist search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchArtistParams {
    /// The name of the musical artist to search for.
    #[schemars(description = "The name of the musical artist to search for")]
    pub artist_name: String,
}

/// Artist search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchArtistTool;

impl SearchArtistTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_artist";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for a musical artist by name and return comprehensive information including biography, genre, style, formation year, record labels, social links, and images";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    ///
    /// Upstream failures never surface here: the client degrades to an
    /// empty result, which formats as a "no artist found" message.
    pub fn execute(params: &SearchArtistParams, config: &Config) -> CallToolResult {
        info!(
            "MCP Tool called: search_artist with artist_name='{}'",
            params.artist_name
        );

        let client = AudioDbClient::new(&config.audiodb);
        let artist = client.find_artist(&params.artist_name);
        let text = format_artist(&params.artist_name, artist.as_ref(), FormatOptions::default());

        success_result(text)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let artist_name = arguments
            .get("artist_name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'artist_name' parameter".to_string())?
            .to_string();

        let params = SearchArtistParams {
            artist_name: artist_name.clone(),
        };

        // Separate OS thread: the client uses reqwest::blocking, which
        // creates its own runtime.
        let handle = std::thread::spawn(move || Self::execute(&params, &config));

        let result = handle.join().unwrap_or_else(|_| {
            failure_text("searching for artist", &artist_name, "worker thread panicked")
        });

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
            input_schema: cached_schema_for_type::<SearchArtistParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: SearchArtistParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let artist_name = params.artist_name.clone();

                // Separate OS thread: reqwest::blocking creates its own
                // runtime and must not run inside tokio.
                let handle = std::thread::spawn(move || Self::execute(&params, &config));

                let result = handle.join().unwrap_or_else(|_| {
                    failure_text("searching for artist", &artist_name, "worker thread panicked")
                });

                Ok(result)
            }
            .boxed()
        })
    }
}

impl Default for SearchArtistTool {
    fn default() -> Self {
        Self::new()
    }
}

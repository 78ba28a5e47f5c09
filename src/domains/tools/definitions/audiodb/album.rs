//! Album search tool.
//!
//! Fetches an artist's discography from TheAudioDB and renders it as a
//! numbered list, optionally filtered by album name.

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
use crate::domains::audiodb::{AudioDbClient, format_album_list};

use super::common::{failure_text, success_result};

/// Parameters for the album search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchAlbumParams {
    /// The name of the musical artist.
    #[schemars(description = "The name of the musical artist")]
    pub artist_name: String,

    /// Optional album name filter; without it all albums are returned.
    #[serde(default)]
    #[schemars(
        description = "The name of the album (optional - if not provided, returns all albums by artist)"
    )]
    pub album_name: Option<String>,
}

/// Album search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchAlbumTool;

impl SearchAlbumTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_album";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for album information by artist name and optionally album name, returning album details, release info, and descriptions";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    pub fn execute(params: &SearchAlbumParams, config: &Config) -> CallToolResult {
        info!(
            "MCP Tool called: search_album with artist_name='{}', album_name={:?}",
            params.artist_name, params.album_name
        );

        let client = AudioDbClient::new(&config.audiodb);
        let albums = client.get_artist_albums(&params.artist_name);
        let text = format_album_list(&params.artist_name, params.album_name.as_deref(), &albums);

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

        let album_name = arguments
            .get("album_name")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let params = SearchAlbumParams {
            artist_name: artist_name.clone(),
            album_name,
        };

        // Separate OS thread: the client uses reqwest::blocking, which
        // creates its own runtime.
        let handle = std::thread::spawn(move || Self::execute(&params, &config));

        let result = handle.join().unwrap_or_else(|_| {
            failure_text(
                "searching albums for artist",
                &artist_name,
                "worker thread panicked",
            )
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
            input_schema: cached_schema_for_type::<SearchAlbumParams>(),
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
                let params: SearchAlbumParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let artist_name = params.artist_name.clone();

                // Separate OS thread: reqwest::blocking creates its own
                // runtime and must not run inside tokio.
                let handle = std::thread::spawn(move || Self::execute(&params, &config));

                let result = handle.join().unwrap_or_else(|_| {
                    failure_text(
                        "searching albums for artist",
                        &artist_name,
                        "worker thread panicked",
                    )
                });

                Ok(result)
            }
            .boxed()
        })
    }
}

impl Default for SearchAlbumTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_params_album_name_optional() {
        let json = r#"{"artist_name": "Coldplay"}"#;
        let params: SearchAlbumParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.artist_name, "Coldplay");
        assert!(params.album_name.is_none());
    }

    #[test]
    fn test_params_with_album_name() {
        let json = r#"{"artist_name": "Coldplay", "album_name": "Parachutes"}"#;
        let params: SearchAlbumParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.album_name.as_deref(), Some("Parachutes"));
    }

    #[test]
    fn test_blank_artist_formats_as_no_albums() {
        let config = Config::default();
        let params = SearchAlbumParams {
            artist_name: String::new(),
            album_name: None,
        };
        let result = SearchAlbumTool::execute(&params, &config);
        if let RawContent::Text(text) = &result.content[0].raw {
            assert_eq!(text.text, "No albums found for artist: ''");
        } else {
            panic!("expected text content");
        }
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_search_album_live() {
        let config = Config::default();
        let params = SearchAlbumParams {
            artist_name: "Coldplay".to_string(),
            album_name: Some("Parachutes".to_string()),
        };
        let result = SearchAlbumTool::execute(&params, &config);
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("Parachutes"));
        }
    }
}

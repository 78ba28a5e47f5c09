//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

use super::definitions::{SearchAlbumTool, SearchArtistTool, SearchTrackTool};
#[cfg(feature = "http")]
use super::error::ToolError;

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchArtistTool::NAME,
            SearchAlbumTool::NAME,
            SearchTrackTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchArtistTool::to_tool(),
            SearchAlbumTool::to_tool(),
            SearchTrackTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let result = match name {
            SearchArtistTool::NAME => {
                SearchArtistTool::http_handler(arguments, self.config.clone())
            }
            SearchAlbumTool::NAME => SearchAlbumTool::http_handler(arguments, self.config.clone()),
            SearchTrackTool::NAME => SearchTrackTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };

        result.map_err(ToolError::invalid_arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"search_artist"));
        assert!(names.contains(&"search_album"));
        assert!(names.contains(&"search_track"));
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some());
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_track_placeholder() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool(
            "search_track",
            serde_json::json!({ "artist_name": "Pink Floyd", "track_name": "Time" }),
        );
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_missing_param() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("search_track", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}

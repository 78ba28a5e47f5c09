//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server: `audiodb` wraps the upstream metadata API, `tools` exposes it
//! through the MCP tool boundary.

pub mod audiodb;
pub mod tools;

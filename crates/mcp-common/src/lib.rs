pub mod content;
pub mod error;
pub mod mcp_api;

//! Domain objects and resource/tool/prompt integrations
//!
//! Provides the tool catalog, the routing of each tool onto the Sun eCommerce
//! REST API, and the resources and prompts exposed over the MCP protocol.

pub mod arguments;
pub mod catalog;
pub mod dispatcher;
pub mod envelope;
pub mod prompts;
pub mod registry;
pub mod resources;
pub mod routes;
pub mod tools;

// In-process MCP-style tool server: envelope types, tool registry, dispatcher

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;

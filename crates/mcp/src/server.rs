// In-process MCP server: looks up tools by name, validates arguments against
// the tool's own schema, and wraps every outcome in the call envelope.

use crate::protocol::{CallToolResult, ListToolsResult};
use crate::tools::{ToolError, ToolRegistry};

/// MCP server over a read-only tool registry. Built once at startup; every
/// call is independent and idempotent.
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Return all registered tool schemas, in registration order
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.registry.list_schemas(),
        }
    }

    /// Call a tool with given arguments.
    ///
    /// Dispatch failures (unknown tool, missing or mistyped arguments, tool
    /// faults) come back as a failure envelope, never as an `Err`.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        let Some(tool) = self.registry.get(name) else {
            tracing::warn!(tool = name, "call for unregistered tool");
            return CallToolResult::failure(ToolError::UnknownTool(name.to_string()).to_string());
        };

        if let Err(err) = validate_arguments(&tool.schema().input_schema, &arguments) {
            return CallToolResult::failure(err.to_string());
        }

        tracing::debug!(tool = name, "dispatching tool call");
        match tool.execute(arguments).await {
            Ok(result) => result,
            Err(err) => CallToolResult::failure(format!("{err:#}")),
        }
    }
}

/// Check the schema's required fields against the provided arguments.
///
/// Absent and JSON `null` both count as missing; a numeric `0` is a provided
/// value. Fields declared `"type": "number"` must carry a JSON number.
fn validate_arguments(
    input_schema: &serde_json::Value,
    arguments: &serde_json::Value,
) -> Result<(), ToolError> {
    let required: Vec<&str> = input_schema["required"]
        .as_array()
        .map(|names| names.iter().filter_map(|name| name.as_str()).collect())
        .unwrap_or_default();

    let any_missing = required.iter().any(|field| {
        arguments
            .get(field)
            .map(|value| value.is_null())
            .unwrap_or(true)
    });
    if any_missing {
        return Err(ToolError::MissingArguments(required.join(" and ")));
    }

    let mistyped: Vec<String> = required
        .iter()
        .filter_map(|field| {
            let value = arguments.get(field)?;
            let expected = input_schema["properties"][field]["type"].as_str()?;
            if expected == "number" && !value.is_number() {
                Some(format!("{field} must be a number, got {}", json_type_name(value)))
            } else {
                None
            }
        })
        .collect();
    if !mistyped.is_empty() {
        return Err(ToolError::InvalidArgumentTypes(mistyped.join(", ")));
    }

    Ok(())
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

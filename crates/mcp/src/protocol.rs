// MCP protocol types (tool schemas and call envelopes)

use serde::{Deserialize, Serialize};

/// Tool definition for MCP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// List tools response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListToolsResult {
    pub tools: Vec<ToolSchema>,
}

/// Call tool request params
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: serde_json::Value,
}

/// Successful call envelope. The `operation` field carries a human-readable
/// rendering of the computation, e.g. `"10 - 3"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSuccess {
    pub success: bool,
    pub operation: String,
    pub result: f64,
    pub minuend: f64,
    pub subtrahend: f64,
}

/// Failed call envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallFailure {
    pub success: bool,
    pub error: String,
}

/// Call tool response. Serializes flat with a `success` discriminant field,
/// matching the MCP demo wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallToolResult {
    Success(CallSuccess),
    Failure(CallFailure),
}

impl CallToolResult {
    pub fn success(operation: impl Into<String>, result: f64, minuend: f64, subtrahend: f64) -> Self {
        Self::Success(CallSuccess {
            success: true,
            operation: operation.into(),
            result,
            minuend,
            subtrahend,
        })
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(CallFailure {
            success: false,
            error: error.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Error text, if this is a failure envelope
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(&failure.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_wire_shape() {
        let result = CallToolResult::success("10 - 3", 7.0, 10.0, 3.0);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "operation": "10 - 3",
                "result": 7.0,
                "minuend": 10.0,
                "subtrahend": 3.0
            })
        );
    }

    #[test]
    fn failure_envelope_wire_shape() {
        let result = CallToolResult::failure("Unknown tool: divide");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "error": "Unknown tool: divide"
            })
        );
    }

    #[test]
    fn envelopes_round_trip_untagged() {
        let success = CallToolResult::success("5.5 - 2.3", 3.2, 5.5, 2.3);
        let parsed: CallToolResult =
            serde_json::from_str(&serde_json::to_string(&success).unwrap()).unwrap();
        assert_eq!(parsed, success);
        assert!(parsed.is_success());

        let failure = CallToolResult::failure("boom");
        let parsed: CallToolResult =
            serde_json::from_str(&serde_json::to_string(&failure).unwrap()).unwrap();
        assert_eq!(parsed.error(), Some("boom"));
    }
}

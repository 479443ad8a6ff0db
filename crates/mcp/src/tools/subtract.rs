// Subtraction tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_number, json_schema_object, Tool};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Tool that subtracts one number from another
pub struct SubtractTool;

#[derive(Debug, Deserialize)]
struct SubtractArgs {
    minuend: f64,
    subtrahend: f64,
}

#[async_trait::async_trait]
impl Tool for SubtractTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "subtract".to_string(),
            description: "Subtracts one number from another (a - b)".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "minuend": json_schema_number("The number to subtract from"),
                    "subtrahend": json_schema_number("The number to subtract"),
                }),
                vec!["minuend", "subtrahend"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SubtractArgs =
            serde_json::from_value(arguments).context("Invalid arguments for subtract")?;

        let result = args.minuend - args.subtrahend;
        Ok(CallToolResult::success(
            format!("{} - {}", args.minuend, args.subtrahend),
            result,
            args.minuend,
            args.subtrahend,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::CallToolResult;
    use serde_json::json;

    async fn subtract(minuend: f64, subtrahend: f64) -> CallToolResult {
        SubtractTool
            .execute(json!({"minuend": minuend, "subtrahend": subtrahend}))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn subtracts_integers() {
        match subtract(10.0, 3.0).await {
            CallToolResult::Success(success) => {
                assert_eq!(success.result, 7.0);
                assert_eq!(success.operation, "10 - 3");
                assert_eq!(success.minuend, 10.0);
                assert_eq!(success.subtrahend, 3.0);
            }
            CallToolResult::Failure(failure) => panic!("unexpected failure: {}", failure.error),
        }
    }

    #[tokio::test]
    async fn subtracts_floats_within_tolerance() {
        match subtract(5.5, 2.3).await {
            CallToolResult::Success(success) => {
                assert!((success.result - 3.2).abs() < 1e-10);
                assert_eq!(success.operation, "5.5 - 2.3");
            }
            CallToolResult::Failure(failure) => panic!("unexpected failure: {}", failure.error),
        }
    }

    #[tokio::test]
    async fn handles_negative_and_zero_operands() {
        match subtract(-10.0, 5.0).await {
            CallToolResult::Success(success) => assert_eq!(success.result, -15.0),
            CallToolResult::Failure(failure) => panic!("unexpected failure: {}", failure.error),
        }
        match subtract(100.0, 150.0).await {
            CallToolResult::Success(success) => assert_eq!(success.result, -50.0),
            CallToolResult::Failure(failure) => panic!("unexpected failure: {}", failure.error),
        }
        match subtract(0.0, 0.0).await {
            CallToolResult::Success(success) => {
                assert_eq!(success.result, 0.0);
                assert_eq!(success.operation, "0 - 0");
            }
            CallToolResult::Failure(failure) => panic!("unexpected failure: {}", failure.error),
        }
    }

    #[test]
    fn schema_declares_both_operands_required() {
        let schema = SubtractTool.schema();
        assert_eq!(schema.name, "subtract");
        assert_eq!(
            schema.description,
            "Subtracts one number from another (a - b)"
        );
        assert_eq!(
            schema.input_schema["required"],
            json!(["minuend", "subtrahend"])
        );
        assert_eq!(
            schema.input_schema["properties"]["minuend"]["type"],
            json!("number")
        );
        assert_eq!(
            schema.input_schema["properties"]["subtrahend"]["type"],
            json!("number")
        );
    }
}

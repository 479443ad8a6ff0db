// Client glue around the in-process MCP server: tool listing, framed result
// printing, the interactive prompt loop, and the scripted demo.

use anyhow::Result;
use minus_mcp::protocol::CallToolResult;
use minus_mcp::tools::{SubtractTool, ToolRegistry};
use minus_mcp::McpServer;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

const BANNER_WIDTH: usize = 60;

/// Client for the in-process subtraction server. "Client" and "server" are
/// both in-process objects; there is no transport between them.
pub struct McpClient {
    server: McpServer,
}

impl McpClient {
    pub fn new() -> Self {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(SubtractTool));
        tracing::debug!(tools = registry.len(), "tool registry built");

        Self {
            server: McpServer::new(registry),
        }
    }

    /// Print every registered tool's name, description, and input schema
    pub fn list_available_tools(&self) -> Result<()> {
        let listing = self.server.list_tools();

        println!("\n{}", "=".repeat(BANNER_WIDTH));
        println!("AVAILABLE TOOLS");
        println!("{}", "=".repeat(BANNER_WIDTH));

        for tool in &listing.tools {
            println!("\nTool Name: {}", tool.name);
            println!("Description: {}", tool.description);
            println!("\nInput Schema:");
            println!("{}", serde_json::to_string_pretty(&tool.input_schema)?);
        }
        println!("{}\n", "=".repeat(BANNER_WIDTH));

        Ok(())
    }

    /// Call the subtract tool and print a framed result block
    pub async fn call_subtract(&self, minuend: f64, subtrahend: f64) -> CallToolResult {
        println!("\nCalling 'subtract' tool with:");
        println!("  Minuend (a): {minuend}");
        println!("  Subtrahend (b): {subtrahend}");

        let result = self
            .server
            .call_tool("subtract", json!({"minuend": minuend, "subtrahend": subtrahend}))
            .await;

        println!("\n{}", "-".repeat(BANNER_WIDTH));
        println!("RESULT");
        println!("{}", "-".repeat(BANNER_WIDTH));

        match &result {
            CallToolResult::Success(success) => {
                println!("Operation: {}", success.operation);
                println!("Result: {}", success.result);
                println!("Success: true");
            }
            CallToolResult::Failure(failure) => {
                println!("Error: {}", failure.error);
                println!("Success: false");
            }
        }
        println!("{}\n", "-".repeat(BANNER_WIDTH));

        result
    }

    /// Prompt loop reading `list`, `subtract`, and `quit`/`exit`/`q`
    pub async fn run_interactive(&self) -> Result<()> {
        println!("\n{}", "=".repeat(BANNER_WIDTH));
        println!("MCP SUBTRACTION TOOL - INTERACTIVE CLIENT");
        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("This client drives the in-process MCP subtraction server");
        println!("Type 'list' to see available tools");
        println!("Type 'subtract' to perform subtraction");
        println!("Type 'quit' or 'exit' to quit");
        println!("{}\n", "=".repeat(BANNER_WIDTH));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let Some(line) = prompt(&mut lines, "Enter command (list/subtract/quit): ").await?
            else {
                println!("\nEnd of input. Exiting...");
                break;
            };
            let command = line.trim().to_lowercase();

            match command.as_str() {
                "quit" | "exit" | "q" => {
                    println!("\nExiting client. Goodbye!");
                    break;
                }
                "list" => self.list_available_tools()?,
                "subtract" => {
                    let Some(minuend_str) =
                        prompt(&mut lines, "Enter the minuend (number to subtract from): ").await?
                    else {
                        println!("\nEnd of input. Exiting...");
                        break;
                    };
                    let Some(subtrahend_str) =
                        prompt(&mut lines, "Enter the subtrahend (number to subtract): ").await?
                    else {
                        println!("\nEnd of input. Exiting...");
                        break;
                    };

                    match (
                        minuend_str.trim().parse::<f64>(),
                        subtrahend_str.trim().parse::<f64>(),
                    ) {
                        (Ok(minuend), Ok(subtrahend)) => {
                            self.call_subtract(minuend, subtrahend).await;
                        }
                        _ => println!("\nError: Please enter valid numbers.\n"),
                    }
                }
                other => {
                    println!("\nUnknown command: '{other}'");
                    println!("Available commands: list, subtract, quit\n");
                }
            }
        }

        Ok(())
    }

    /// Scripted walkthrough of five fixed subtraction cases
    pub async fn run_demo(&self) -> Result<()> {
        println!("\n{}", "=".repeat(BANNER_WIDTH));
        println!("MCP SUBTRACTION TOOL - DEMO MODE");
        println!("{}", "=".repeat(BANNER_WIDTH));
        println!("Demonstrating client-server interaction\n");

        self.list_available_tools()?;

        println!("Running demonstration subtraction operations...\n");

        let demo_cases = [
            (10.0, 3.0, "Basic subtraction"),
            (5.5, 2.3, "Floating-point subtraction"),
            (-10.0, 5.0, "Negative minuend"),
            (100.0, 150.0, "Result is negative"),
            (0.0, 0.0, "Both zeros"),
        ];

        for (minuend, subtrahend, description) in demo_cases {
            println!("\nDemo Case: {description}");
            self.call_subtract(minuend, subtrahend).await;
        }

        Ok(())
    }
}

impl Default for McpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a prompt without a trailing newline and read one line.
/// Returns `None` on EOF.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> Result<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

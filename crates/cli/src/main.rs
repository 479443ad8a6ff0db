use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

mod client;

use client::McpClient;

#[derive(Parser, Debug)]
#[command(name = "minus")]
#[command(about = "MCP subtraction tool client", long_about = None)]
struct Args {
    /// Run demo mode with predefined examples
    #[arg(long, conflicts_with = "subtract")]
    demo: bool,

    /// Subtract B from A
    #[arg(long, num_args = 2, value_names = ["A", "B"])]
    subtract: Option<Vec<String>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    // Invalid argument combinations exit 1, not clap's default 2
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            err.print()?;
            std::process::exit(1);
        }
    };

    let client = McpClient::new();

    if let Some(operands) = args.subtract {
        let parsed = (operands[0].parse::<f64>(), operands[1].parse::<f64>());
        let (minuend, subtrahend) = match parsed {
            (Ok(minuend), Ok(subtrahend)) => (minuend, subtrahend),
            _ => {
                eprintln!("\nError: Arguments must be numbers\n");
                Args::command().print_help()?;
                std::process::exit(1);
            }
        };

        client.list_available_tools()?;
        client.call_subtract(minuend, subtrahend).await;
    } else if args.demo {
        client.run_demo().await?;
    } else {
        client.run_interactive().await?;
    }

    Ok(())
}

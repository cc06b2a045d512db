//! Greeting Widget CLI
//!
//! Shows the greeting from the configured Hello World API in the terminal.

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use greeting_widget::io::ReqwestHttpClient;
use greeting_widget::view::render;
use greeting_widget::{EndpointConfig, GreetingWidget, RequestState};
use tracing::Level;

#[derive(Parser)]
#[command(name = "greeting-widget")]
#[command(about = "Fetches and displays a greeting from the Hello World API")]
#[command(version)]
struct Args {
    /// Load once, print the result and exit (non-zero on failure)
    #[arg(long)]
    once: bool,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: once={}, log_level={:?}",
        args.once,
        args.log_level
    );

    let config = EndpointConfig::from_env();
    let widget = GreetingWidget::new(config, Arc::new(ReqwestHttpClient::default()));

    if args.once {
        widget.load_greeting().await;
        let state = widget.state();
        print!("{}", render(&state, widget.config()));
        std::io::stdout().flush()?;
        if matches!(state, RequestState::Failed { .. }) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    greeting_widget::terminal::run(widget, stdin, tokio::io::stdout()).await?;

    Ok(())
}

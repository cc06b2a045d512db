//! Interactive terminal loop
//!
//! Redraws the view on every state commit and maps line commands from the
//! input onto the visible control.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::view::render;
use crate::widget::GreetingWidget;

/// A line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate the visible control
    Activate,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "r" | "retry" | "refresh" => Command::Activate,
            "q" | "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Mount the widget and drive it from `input` until quit or end of input
pub async fn run<R, W>(widget: GreetingWidget, input: R, mut output: W) -> crate::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut state_rx = widget.subscribe();
    let mut lines = input.lines();

    draw(&widget, &mut output).await?;
    widget.spawn_load();

    loop {
        tokio::select! {
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&widget, &mut output).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("End of input");
                    break;
                };
                match Command::parse(&line) {
                    Command::Activate => activate(&widget),
                    Command::Quit => break,
                    Command::Unknown(other) => {
                        let hint = format!(
                            "Unknown command {:?} (r = retry/refresh, q = quit)\n",
                            other
                        );
                        output.write_all(hint.as_bytes()).await?;
                        output.flush().await?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn activate(widget: &GreetingWidget) {
    match widget.state().control() {
        Some(control) => {
            let widget = widget.clone();
            tokio::spawn(async move { widget.activate(control).await });
        }
        None => {
            // A load is already in flight; the two race and the last to settle wins.
            tracing::debug!("Load requested while loading");
            widget.spawn_load();
        }
    }
}

async fn draw<W>(widget: &GreetingWidget, output: &mut W) -> crate::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let view = render(&widget.state(), widget.config());
    output.write_all(view.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

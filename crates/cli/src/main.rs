//! Wellness assistant terminal chat.
//!
//! Usage:
//!   wellness
//!   wellness --config wellness.toml
//!   wellness --memory-file ~/.wellness/memory.json --model llama3:8b
//!
//! Type a message and press enter. `/quit`, `/exit` or end-of-input closes
//! the session. Logs go to stderr (`RUST_LOG` controls the level).

mod args;
mod input;

use args::Args;
use input::Input;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wellness_coordinator::Responder;

const TITLE: &str = "🧠 Wellness AI Agent";
const CAPTION: &str = "Ask anything about wellness. I think, remember & respond safely.";
const INPUT_HINT: &str = "Ask anything about your wellness...";
const FOOTER: &str = "🧠 Wellness AI | Ollama • Long-Term Memory • Safety • Reasoning";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,wellness=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.load_config()?;
    let responder = Responder::new(config)?;
    let mut state = responder.start_session().await;

    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();

    stdout
        .write_all(format!("{TITLE}\n{CAPTION}\n({INPUT_HINT})\n\n").as_bytes())
        .await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let text = match input::parse_line(&buf) {
            Input::Message(text) => text,
            Input::Skip => continue,
            Input::Quit => break,
        };

        let reply = responder.turn(&mut state, &text).await;
        stdout.write_all(format!("\n{reply}\n\n").as_bytes()).await?;
    }

    stdout
        .write_all(format!("\n---\n{FOOTER}\n{}\n", state.time_caption()).as_bytes())
        .await?;
    stdout.flush().await?;

    tracing::info!(turns = state.transcript.len() / 2, "Session closed");
    Ok(())
}

//! Contact Assistant - Main entry point
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.
//! Logs go to stderr.

use anyhow::Result;
use contact_assistant::bot::messages;
use contact_assistant::{Assistant, Config, Reply};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting assistant with a {}-day birthday window",
        config.birthday_window_days
    );

    let mut assistant = Assistant::new(&config);
    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    write_line(&mut stdout, messages::WELCOME).await?;

    loop {
        stdout.write_all(messages::PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                // End of input behaves like `exit`
                write_line(&mut stdout, messages::GOODBYE).await?;
                break;
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                return Err(e.into());
            }
        };

        match assistant.handle_line(&line) {
            Reply::Continue(text) => write_line(&mut stdout, &text).await?,
            Reply::Exit(text) => {
                write_line(&mut stdout, &text).await?;
                break;
            }
        }
    }

    info!(
        contacts = assistant.book().len(),
        "Assistant shutdown complete"
    );
    Ok(())
}

async fn write_line(stdout: &mut io::Stdout, text: &str) -> io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}

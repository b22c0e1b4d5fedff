//! Kerala Government Services Assistant - terminal client
//!
//! A conversation session over the `/ask` question-answering service:
//! each question goes out with the full dialogue so far, and the answer
//! comes back with evidence snippets and suggested next steps.

mod backend;
mod config;
mod render;
mod repl;
mod service;
mod session;

use backend::{HttpAskClient, LoggingBackend};
use config::ClientConfig;
use session::Session;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kerala_assist=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = ClientConfig::from_env()?;
    let backend = LoggingBackend::new(HttpAskClient::new(&config.backend_url)?);

    let mut session = Session::new().with_service_filter(config.service);

    tracing::info!(
        session_id = %session.id(),
        backend = %config.backend_url,
        service = ?config.service,
        "Session started"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    repl::run(&mut session, &backend, stdin, &mut std::io::stdout()).await?;

    Ok(())
}

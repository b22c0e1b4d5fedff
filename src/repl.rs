//! Interactive terminal front-end
//!
//! Reads one line at a time and drives a single [`Session`]. No input is
//! read while a request is outstanding.

use crate::backend::AskBackend;
use crate::render;
use crate::service::{self, Service};
use crate::session::Session;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
Type a question and press Enter.
  /service <id|auto>  narrow answers to one service, or auto-detect
  /services           list available services
  /history            show the conversation so far
  /help               show this message
  /quit               exit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask(String),
    SetService(Option<Service>),
    ListServices,
    History,
    Help,
    Quit,
    /// Unrecognised or malformed slash command, with a message to show
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Ask(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "service" if arg.is_empty() => Command::Invalid("usage: /service <id|auto>".to_string()),
        "service" => match service::parse_filter(arg) {
            Ok(filter) => Command::SetService(filter),
            Err(e) => Command::Invalid(e.to_string()),
        },
        "services" => Command::ListServices,
        "history" => Command::History,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command: /{other}")),
    }
}

fn prompt(session: &Session) -> String {
    match session.service_filter() {
        Some(service) => format!("[{service}]> "),
        None => "> ".to_string(),
    }
}

/// Run until `/quit` or end of input
pub async fn run<B, R, W>(
    session: &mut Session,
    backend: &B,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    B: AskBackend + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "Kerala Government Services Assistant")?;
    writeln!(out, "{}", render::EMPTY_TRANSCRIPT)?;

    loop {
        write!(out, "{}", prompt(session))?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Command::Ask(text) if text.is_empty() => {}
            Command::Ask(text) => {
                session.set_draft(text);
                writeln!(out, "{}", render::PENDING)?;
                out.flush()?;

                if session.submit_draft(backend).await {
                    if let Some(turn) = session.turns().last() {
                        writeln!(out, "{}", render::render_turn(turn))?;
                    }
                }
            }
            Command::SetService(filter) => {
                session.set_service_filter(filter);
                match filter {
                    Some(service) => writeln!(out, "Searching {} only.", service.display_name())?,
                    None => writeln!(out, "Auto-detecting the service.")?,
                }
            }
            Command::ListServices => {
                for service in Service::ALL {
                    writeln!(out, "  {service:<24} {}", service.display_name())?;
                }
            }
            Command::History => write!(out, "{}", render::render_transcript(session))?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Invalid(message) => writeln!(out, "{message}")?,
        }
    }

    tracing::info!(session_id = %session.id(), turns = session.turns().len(), "Session ended");
    Ok(())
}

//! Terminal rendering of a session
//!
//! Read-only: everything here takes `&Session` or `&Turn` and returns text.

use crate::session::{Evidence, Role, Session, Turn};
use std::fmt::Write;

pub const EMPTY_TRANSCRIPT: &str =
    "No results yet. Ask a question to see retrieved government content.";

pub const PENDING: &str = "Thinking…";

/// Whether `text` contains Malayalam script (U+0D00..=U+0D7F)
pub fn is_malayalam(text: &str) -> bool {
    text.chars().any(|ch| ('\u{0D00}'..='\u{0D7F}').contains(&ch))
}

/// Human label for a recommended next step
pub fn next_step_label(step: &str) -> String {
    let known = match step {
        "documents" => Some("Check the documents required"),
        "eligibility" => Some("Check eligibility"),
        "process" => Some("See how to apply"),
        "timeline" => Some("See processing timelines"),
        "fees" => Some("Check the fees"),
        "correction" => Some("Correct an existing record"),
        _ => None,
    };
    if let Some(label) = known {
        return label.to_string();
    }

    let spaced = step.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-line summary of an evidence snippet
pub fn evidence_summary(evidence: &Evidence) -> String {
    format!(
        "{} ({}) — score: {:.3}",
        evidence.section, evidence.service, evidence.score
    )
}

pub fn render_turn(turn: &Turn) -> String {
    let mut out = String::new();
    match turn.role() {
        Role::User if is_malayalam(turn.content()) => out.push_str("You [ml]: "),
        Role::User => out.push_str("You: "),
        Role::Assistant => out.push_str("Assistant: "),
    }
    out.push_str(turn.content());
    out.push('\n');

    if !turn.sources().is_empty() {
        out.push_str("\n  Sources\n");
        for (i, evidence) in turn.sources().iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, evidence_summary(evidence));
            for line in evidence.text.lines() {
                let _ = writeln!(out, "       {line}");
            }
        }
    }

    if !turn.next_steps().is_empty() {
        out.push_str("\n  Suggested next steps\n");
        for step in turn.next_steps() {
            let _ = writeln!(out, "  - {}", next_step_label(step));
        }
    }

    out
}

/// The whole dialogue, or a placeholder when nothing has been asked yet
pub fn render_transcript(session: &Session) -> String {
    let mut out = String::new();
    if session.turns().is_empty() && !session.is_pending() {
        out.push_str(EMPTY_TRANSCRIPT);
        out.push('\n');
        return out;
    }

    for turn in session.turns() {
        out.push_str(&render_turn(turn));
        out.push('\n');
    }
    if session.is_pending() {
        out.push_str(PENDING);
        out.push('\n');
    }
    out
}

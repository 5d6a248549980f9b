use std::io::BufRead;
use std::thread::{self, JoinHandle};

use kanal::AsyncSender;
use nafham_types::{AppEvent, SearchDirection, UiEvent};

pub const HELP: &str = ":toggle  :en  :ar  :clear  :set <field> <value>  :quit";

/// Translate one line of terminal input into an event.
/// Returns None for unrecognised `:` commands.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let trimmed = line.trim();

    if !trimmed.starts_with(':') {
        if trimmed.is_empty() {
            return Some(AppEvent::UiEvent(UiEvent::ClearQuery));
        }
        return Some(AppEvent::UiEvent(UiEvent::SearchText(line.to_string())));
    }

    let mut parts = trimmed[1..].split_whitespace();
    let event = match parts.next()? {
        "q" | "quit" => UiEvent::Close,
        "t" | "toggle" => UiEvent::ToggleDirection,
        "en" => UiEvent::SetDirection(SearchDirection::EnglishToArabic),
        "ar" => UiEvent::SetDirection(SearchDirection::ArabicToEnglish),
        "c" | "clear" => UiEvent::ClearQuery,
        "set" => {
            let field = parts.next()?.to_string();
            let value = parts.next()?.to_string();
            return Some(AppEvent::ConfigUpdate { field, value });
        }
        _ => return None,
    };

    Some(AppEvent::UiEvent(event))
}

/// Read stdin on a dedicated thread and forward parsed events.
/// Sends `Close` on end of input.
pub fn spawn_stdin_reader(ui_to_app_tx: AsyncSender<AppEvent>) -> JoinHandle<()> {
    let tx = ui_to_app_tx.to_sync();

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            };

            let Some(event) = parse_line(&line) else {
                tracing::warn!("Unknown command '{}', try {}", line.trim(), HELP);
                continue;
            };

            let closing = matches!(event, AppEvent::UiEvent(UiEvent::Close));
            if tx.send(event).is_err() || closing {
                return;
            }
        }

        tracing::debug!("stdin closed");
        let _ = tx.send(AppEvent::UiEvent(UiEvent::Close));
    })
}

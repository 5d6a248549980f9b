use std::io::Write;

use kanal::AsyncReceiver;
use nafham_core::language::LanguagePack;
use nafham_lang_arabic::ArabicPack;
use nafham_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::input::HELP;
use crate::render::render_view;

/// Terminal view: prints every result set the event loop publishes
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    pack: ArabicPack,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => event?,
        };

        let mut stdout = std::io::stdout();
        match event {
            AppEvent::BackendReady => {
                writeln!(stdout, "{} ({})", pack.search_label(), HELP)?;
            }
            AppEvent::ShowResults(view) => {
                writeln!(stdout)?;
                write!(stdout, "{}", render_view(&view, &pack))?;
            }
            AppEvent::UiEvent(UiEvent::Close) => {
                tracing::debug!("[UI] Close received");
                break;
            }
            other => {
                tracing::debug!("[UI] Ignoring {:?}", other);
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use nafham_config::Config;
use nafham_types::{AppEvent, ResultsView, SearchDirection, UiEvent};
use tokio::task::JoinHandle;
use tokio::time::timeout;

use super::embedded_state;
use crate::events::event_loop;

struct Harness {
    ui_tx: AsyncSender<AppEvent>,
    app_rx: AsyncReceiver<AppEvent>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    async fn start(config: Config) -> (Self, ResultsView) {
        let (ui_tx, ui_rx) = kanal::bounded_async(16);
        let (app_tx, app_rx) = kanal::bounded_async(16);
        let handle = tokio::spawn(event_loop(embedded_state(config), ui_rx, app_tx));

        let harness = Self {
            ui_tx,
            app_rx,
            handle,
        };

        match harness.next().await {
            AppEvent::BackendReady => {}
            other => panic!("expected BackendReady, got {:?}", other),
        }
        let initial = harness.next_view().await;
        (harness, initial)
    }

    async fn next(&self) -> AppEvent {
        match timeout(Duration::from_secs(2), self.app_rx.recv()).await {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout - event never arrived!"),
        }
    }

    async fn next_view(&self) -> ResultsView {
        match self.next().await {
            AppEvent::ShowResults(view) => view,
            other => panic!("Wrong event type: {:?}", other),
        }
    }

    async fn send(&self, event: UiEvent) {
        self.ui_tx
            .send(AppEvent::UiEvent(event))
            .await
            .expect("send failed");
    }

    async fn search(&self, text: &str) -> ResultsView {
        self.send(UiEvent::SearchText(text.to_string())).await;
        self.next_view().await
    }

    async fn set(&self, field: &str, value: &str) {
        self.ui_tx
            .send(AppEvent::ConfigUpdate {
                field: field.to_string(),
                value: value.to_string(),
            })
            .await
            .expect("send failed");
    }
}

#[tokio::test]
async fn test_initial_preview() {
    let (_harness, view) = Harness::start(Config::default()).await;

    assert_eq!(view.direction, SearchDirection::EnglishToArabic);
    assert_eq!(view.query, "");
    assert_eq!(view.results.len(), 5);
    assert_eq!(view.results[0].primary, "Do you understand Arabic?");
}

#[tokio::test]
async fn test_configured_default_direction() {
    let mut config = Config::default();
    config.search.default_direction = SearchDirection::ArabicToEnglish;

    let (_harness, view) = Harness::start(config).await;
    assert_eq!(view.direction, SearchDirection::ArabicToEnglish);
    assert_eq!(view.results[0].primary, "هل تفهم العربية؟");
}

#[tokio::test]
async fn test_search_and_toggle() {
    let (harness, _) = Harness::start(Config::default()).await;

    let view = harness.search("understand").await;
    assert_eq!(view.results.len(), 2);

    let view = harness.search("qahwa").await;
    assert!(view.results.is_empty());

    harness.send(UiEvent::ToggleDirection).await;
    let view = harness.next_view().await;
    assert_eq!(view.direction, SearchDirection::ArabicToEnglish);
    assert_eq!(view.results.len(), 1);
    assert_eq!(view.results[0].secondary, "Would you like coffee or tea?");

    harness
        .send(UiEvent::SetDirection(SearchDirection::EnglishToArabic))
        .await;
    assert!(harness.next_view().await.results.is_empty());
}

#[tokio::test]
async fn test_clear_query_restores_preview() {
    let (harness, _) = Harness::start(Config::default()).await;

    harness.search("coffee").await;
    harness.send(UiEvent::ClearQuery).await;
    let view = harness.next_view().await;
    assert_eq!(view.query, "");
    assert_eq!(view.results.len(), 5);
}

#[tokio::test]
async fn test_config_update_rebuilds_matcher() {
    let (harness, _) = Harness::start(Config::default()).await;

    harness.set("preview_limit", "2").await;
    assert_eq!(harness.next_view().await.results.len(), 2);

    harness
        .send(UiEvent::SetDirection(SearchDirection::ArabicToEnglish))
        .await;
    harness.next_view().await;
    assert_eq!(harness.search("شكرا،").await.results.len(), 1);

    // with Arabic marks kept, the tanwin separates the alif from the comma
    harness.set("diacritics", "latin").await;
    assert!(harness.next_view().await.results.is_empty());
}

#[tokio::test]
async fn test_bad_config_update_is_ignored() {
    let (harness, _) = Harness::start(Config::default()).await;

    harness.set("colour", "red").await;
    harness.set("preview_limit", "lots").await;

    // the next event published is the answer to this search
    let view = harness.search("tea").await;
    assert_eq!(view.query, "tea");
    assert_eq!(view.results.len(), 1);
}

#[tokio::test]
async fn test_close_stops_loop() {
    let (harness, _) = Harness::start(Config::default()).await;

    harness.send(UiEvent::Close).await;
    match harness.next().await {
        AppEvent::UiEvent(UiEvent::Close) => {}
        other => panic!("expected Close, got {:?}", other),
    }

    let result = timeout(Duration::from_secs(2), harness.handle)
        .await
        .expect("event loop did not stop")
        .expect("event loop panicked");
    assert!(result.is_ok());
}

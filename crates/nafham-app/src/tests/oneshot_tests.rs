use nafham_config::Config;
use nafham_types::{ResultsView, SearchDirection};

use super::embedded_state;
use crate::oneshot::run_once;

#[tokio::test]
async fn test_text_output() {
    let state = embedded_state(Config::default());
    let out = run_once(&state, "coffee", false).await.unwrap();

    assert!(out.starts_with("[English → العربية] › coffee"));
    assert!(out.contains("  1. Would you like coffee or tea?"));
    assert!(out.contains("هل تود القهوة أم الشاي؟"));
    assert!(out.contains("Hal tawaddu al-qahwa am ash-shāy?"));
}

#[tokio::test]
async fn test_no_match_output() {
    let state = embedded_state(Config::default());
    let out = run_once(&state, "xyzzy", false).await.unwrap();
    assert!(out.contains("No match yet"));
}

#[tokio::test]
async fn test_json_output() {
    let mut config = Config::default();
    config.search.default_direction = SearchDirection::ArabicToEnglish;
    let state = embedded_state(config);

    let out = run_once(&state, "shukran", true).await.unwrap();
    let view: ResultsView = serde_json::from_str(&out).unwrap();

    assert_eq!(view.direction, SearchDirection::ArabicToEnglish);
    assert_eq!(view.results.len(), 1);
    assert_eq!(view.results[0].primary, "شكراً، هذا ممتاز.");
    assert!(out.contains("\"ar-en\""));
}

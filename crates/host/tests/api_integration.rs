mod common;

use axum::http::StatusCode;
use common::{TestSite, SAMPLE_DECK};

#[tokio::test]
async fn health_reports_ok() {
    let site = TestSite::new().unwrap();
    let (status, body) = site.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn static_files_come_from_site_root() {
    let site = TestSite::new().unwrap();
    site.write_deck("fraudes", SAMPLE_DECK).unwrap();

    let (status, body) = site.get("/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("main-content"));

    let (status, _) = site.get("/nope.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deck_file_is_served_unchanged() {
    let site = TestSite::new().unwrap();
    site.write_deck("fraudes", SAMPLE_DECK).unwrap();

    // What `data-presentation="decks/fraudes.json"` fetches
    let (status, body) = site.get("/decks/fraudes.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SAMPLE_DECK);

    let deck = slide_deck::Presentation::from_json(&body).unwrap();
    assert_eq!(deck.sections.len(), 2);
    assert_eq!(deck.charts().count(), 1);
}

#[tokio::test]
async fn broken_deck_file_is_still_served() {
    let site = TestSite::new().unwrap();
    site.write_deck("rascunho", "{ \"meta\": ").unwrap();

    // The page reports the parse failure; the host only serves bytes
    let (status, body) = site.get("/decks/rascunho.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "{ \"meta\": ");
}

#[tokio::test]
async fn no_deck_api_routes() {
    let site = TestSite::new().unwrap();
    site.write_deck("fraudes", SAMPLE_DECK).unwrap();

    let (status, _) = site.get("/api/decks").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = site.get("/api/decks/fraudes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

mod common;

use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{App, test};
use scraper::{Html, Selector};
use std::sync::Arc;

use common::{StubStats, sample_shots};
use shotchart::directory::PlayerDirectory;
use shotchart::model::Season;
use shotchart::view::index::INDEX_TITLE;
use shotchart::{AppState, routes};

async fn fetch_index(directory: PlayerDirectory) -> (StatusCode, String) {
    let stub = Arc::new(StubStats::with_shots(sample_shots()));
    let state = AppState::new(stub, directory);
    let app = test::init_service(App::new().app_data(Data::new(state)).configure(routes)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[actix_web::test]
async fn index_lists_every_player_with_a_relative_chart_link() {
    let stub = StubStats::with_shots(sample_shots());
    let directory = PlayerDirectory::build(&stub, &Season::default(), true)
        .await
        .unwrap();
    let (status, html) = fetch_index(directory).await;
    assert_eq!(status, StatusCode::OK);

    let document = Html::parse_document(&html);
    let title_selector = Selector::parse("title").unwrap();
    let link_selector = Selector::parse("ul#players li a").unwrap();

    let title: String = document
        .select(&title_selector)
        .next()
        .unwrap()
        .text()
        .collect();
    assert_eq!(title, INDEX_TITLE);

    let links: Vec<(String, String)> = document
        .select(&link_selector)
        .map(|a| {
            (
                a.text().collect::<String>(),
                a.value().attr("href").unwrap().to_string(),
            )
        })
        .collect();

    // sorted by display name
    assert_eq!(
        links,
        vec![
            ("LeBron James".to_string(), "chart/2544".to_string()),
            ("Russell Westbrook".to_string(), "chart/201566".to_string()),
            ("Stephen Curry".to_string(), "chart/201939".to_string()),
        ]
    );
}

#[actix_web::test]
async fn empty_directory_says_so() {
    let (status, html) = fetch_index(PlayerDirectory::default()).await;
    assert_eq!(status, StatusCode::OK);

    let document = Html::parse_document(&html);
    let link_selector = Selector::parse("ul#players li a").unwrap();
    assert_eq!(document.select(&link_selector).count(), 0);
    assert!(html.contains("No players loaded."));
}

#[actix_web::test]
async fn health_is_ok() {
    let stub = Arc::new(StubStats::with_shots(Vec::new()));
    let state = AppState::new(stub, PlayerDirectory::default());
    let app = test::init_service(App::new().app_data(Data::new(state)).configure(routes)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn built_directory_survives_save_and_load() {
    let stub = StubStats::with_shots(Vec::new());
    let directory = PlayerDirectory::build(&stub, &Season::default(), true)
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.json");
    directory.save(&path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["Stephen Curry"], 201_939);
    assert_eq!(raw.as_object().unwrap().len(), 3);

    let loaded = PlayerDirectory::load(&path).unwrap();
    assert_eq!(loaded, directory);
    assert_eq!(loaded.get("Russell Westbrook"), Some(201_566));
    assert_eq!(loaded.get("Kevin Durant"), None);
}

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use mockall::mock;
use ndarray::arr2;

use cinerec_api::data::{Catalog, CfBundle, CfBundleArtifact};
use cinerec_api::models::Movie;
use cinerec_api::routes::create_router;
use cinerec_api::services::PosterResolver;
use cinerec_api::state::AppState;

mock! {
    Posters {}

    #[async_trait]
    impl PosterResolver for Posters {
        async fn resolve(&self, movie_id: u32) -> String;
    }
}

fn test_catalog() -> Catalog {
    let movies = vec![
        Movie::new(27205, "Inception"),
        Movie::new(157336, "Interstellar"),
        Movie::new(603, "The Matrix"),
        Movie::new(550, "Fight Club"),
    ];
    // Inception's closest non-self entry is Interstellar.
    let similarity = arr2(&[
        [1.0, 0.9, 0.5, 0.2],
        [0.9, 1.0, 0.4, 0.1],
        [0.5, 0.4, 1.0, 0.3],
        [0.2, 0.1, 0.3, 1.0],
    ]);
    Catalog::new(movies, similarity).unwrap()
}

fn test_cf_bundle() -> CfBundle {
    let interactions = arr2(&[
        [5.0, 5.0, 4.0, 0.0],
        [4.0, 4.0, 5.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 5.0],
    ]);
    let movie_ids = vec![27205, 157336, 603, 550];
    let movie_id_to_idx = movie_ids
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i))
        .collect();
    CfBundle::new(CfBundleArtifact {
        interactions,
        movie_ids,
        movie_id_to_idx,
    })
}

/// Bundle whose interaction matrix is one movie column short of the catalog.
fn corrupted_cf_bundle() -> CfBundle {
    let interactions = arr2(&[[5.0, 0.0, 1.0], [0.0, 3.0, 1.0]]);
    let movie_ids = vec![27205, 157336, 603];
    let movie_id_to_idx = movie_ids
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i))
        .collect();
    CfBundle::new(CfBundleArtifact {
        interactions,
        movie_ids,
        movie_id_to_idx,
    })
}

fn stub_posters() -> Arc<MockPosters> {
    let mut posters = MockPosters::new();
    posters
        .expect_resolve()
        .returning(|id| format!("https://img.test/{}.jpg", id));
    Arc::new(posters)
}

fn create_test_server(cf_bundle: CfBundle) -> TestServer {
    let state = AppState::new(test_catalog(), cf_bundle, stub_posters());
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(test_cf_bundle());
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_movies() {
    let server = create_test_server(test_cf_bundle());

    let response = server.get("/api/v1/movies").await;
    response.assert_status_ok();

    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 4);
    assert_eq!(movies[0]["movie_id"], 27205);
    assert_eq!(movies[0]["title"], "Inception");
}

#[tokio::test]
async fn test_content_recommendations_ordered_with_posters() {
    let server = create_test_server(test_cf_bundle());

    let response = server
        .get("/api/v1/recommendations/content")
        .add_query_param("title", "Inception")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    // Highest precomputed similarity ranks first.
    assert_eq!(results[0]["title"], "Interstellar");
    assert_eq!(results[0]["movie_id"], 157336);
    assert_eq!(results[0]["poster_url"], "https://img.test/157336.jpg");
    assert!(results
        .iter()
        .all(|r| r["title"] != "Inception"));
}

#[tokio::test]
async fn test_content_respects_result_count() {
    let server = create_test_server(test_cf_bundle());

    let response = server
        .get("/api/v1/recommendations/content")
        .add_query_param("title", "Inception")
        .add_query_param("n", "1")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_content_unknown_title_is_404() {
    let server = create_test_server(test_cf_bundle());

    let response = server
        .get("/api/v1/recommendations/content")
        .add_query_param("title", "Tenet")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_title_is_400() {
    let server = create_test_server(test_cf_bundle());

    let response = server
        .get("/api/v1/recommendations/content")
        .add_query_param("title", "  ")
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_collaborative_tolerates_misspelling() {
    let server = create_test_server(test_cf_bundle());

    let response = server
        .get("/api/v1/recommendations/collaborative")
        .add_query_param("title", "inceptoin")
        .add_query_param("n", "2")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], "Interstellar");
    assert!(results.iter().all(|r| r["title"] != "Inception"));
    assert!(body["diagnostic"].is_null());
}

#[tokio::test]
async fn test_collaborative_no_match_is_empty_not_error() {
    let server = create_test_server(test_cf_bundle());

    let response = server
        .get("/api/v1/recommendations/collaborative")
        .add_query_param("title", "qqqqzzzzqqqq")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["results"].as_array().unwrap().is_empty());
    assert!(body["diagnostic"].is_null());
}

#[tokio::test]
async fn test_collaborative_corrupted_bundle_reports_diagnostic() {
    let server = create_test_server(corrupted_cf_bundle());

    let response = server
        .get("/api/v1/recommendations/collaborative")
        .add_query_param("title", "Inception")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["results"].as_array().unwrap().is_empty());
    let diagnostic = body["diagnostic"].as_str().unwrap();
    assert!(!diagnostic.is_empty());
}

#[tokio::test]
async fn test_request_id_echoed_on_responses() {
    let server = create_test_server(test_cf_bundle());

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

//! TmdbClient against a local mock of the TMDB endpoints

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use gusflix::config::Config;
use gusflix::model::{CatalogApi, CatalogError, TmdbClient};

const GOOD_KEY: &str = "good-key";

type Params = Query<HashMap<String, String>>;

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status_code": 7, "status_message": "Invalid API key: You must be granted a valid key."})),
    )
        .into_response()
}

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("api_key").map(String::as_str) == Some(GOOD_KEY)
}

async fn popular(Query(params): Params) -> Response {
    if !authorized(&params) {
        return unauthorized();
    }
    Json(json!({
        "page": 1,
        "total_pages": 500,
        "results": [
            {"id": 1, "title": "A", "poster_path": "/a.jpg", "vote_average": 7.5},
            {"id": 2, "title": "B", "poster_path": null}
        ]
    }))
    .into_response()
}

async fn search(Query(params): Params) -> Response {
    if !authorized(&params) {
        return unauthorized();
    }
    let query = params.get("query").cloned().unwrap_or_default();
    if query == "zzz_no_match" {
        return Json(json!({"page": 1, "results": []})).into_response();
    }
    // Echo the decoded query back as the title
    Json(json!({"page": 1, "results": [{"id": 10, "title": query, "poster_path": null}]})).into_response()
}

async fn details(Path(id): Path<u64>, Query(params): Params) -> Response {
    if !authorized(&params) {
        return unauthorized();
    }
    match id {
        7 => Json(json!({
            "id": 7,
            "title": "Seven",
            "poster_path": "/seven.jpg",
            "overview": "Two detectives hunt a killer.",
            "release_date": "1995-09-22",
            "language_echo": params.get("language"),
            "genres": [{"id": 80, "name": "Crime"}, {"id": 53, "name": "Thriller"}]
        }))
        .into_response(),
        13 => Json(json!({"unexpected": true})).into_response(),
        99 => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({})).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"status_code": 34, "status_message": "The resource you requested could not be found."})),
        )
            .into_response(),
    }
}

async fn start_server() -> String {
    let app = Router::new()
        .route("/3/movie/popular", get(popular))
        .route("/3/search/movie", get(search))
        .route("/3/movie/{id}", get(details));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/3", addr)
}

async fn client_with_key(api_key: &str) -> TmdbClient {
    let config = Config {
        api_key: api_key.to_string(),
        base_url: start_server().await,
        request_timeout: Some(Duration::from_millis(500)),
        ..Config::default()
    };
    TmdbClient::new(&config).unwrap()
}

#[tokio::test]
async fn popular_returns_first_page() {
    let client = client_with_key(GOOD_KEY).await;
    let movies = client.fetch_popular().await.unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, 1);
    assert_eq!(movies[0].poster_path.as_deref(), Some("/a.jpg"));
    assert_eq!(movies[1].poster_path, None);
}

#[tokio::test]
async fn search_query_is_url_encoded() {
    let client = client_with_key(GOOD_KEY).await;
    let query = "fast & furious 7?";
    let movies = client.search_movies(query).await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, query);
}

#[tokio::test]
async fn search_without_matches_is_empty() {
    let client = client_with_key(GOOD_KEY).await;
    assert!(client.search_movies("zzz_no_match").await.unwrap().is_empty());
}

#[tokio::test]
async fn details_are_parsed() {
    let client = client_with_key(GOOD_KEY).await;
    let details = client.fetch_details(7).await.unwrap();

    assert_eq!(details.title, "Seven");
    assert_eq!(details.release_year(), Some(1995));
    assert_eq!(details.genre_names(), "Crime, Thriller");
}

#[tokio::test]
async fn missing_movie_is_not_found() {
    let client = client_with_key(GOOD_KEY).await;
    let err = client.fetch_details(42).await.unwrap_err();

    assert_eq!(err, CatalogError::NotFound { id: 42 });
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn bad_key_is_a_network_error() {
    let client = client_with_key("wrong").await;

    for err in [
        client.fetch_popular().await.unwrap_err(),
        client.search_movies("heat").await.unwrap_err(),
        client.fetch_details(7).await.unwrap_err(),
    ] {
        assert!(matches!(err, CatalogError::Network { status: Some(401), .. }), "{:?}", err);
        assert!(err.is_retryable());
    }
}

#[tokio::test]
async fn unexpected_shape_is_a_parse_error() {
    let client = client_with_key(GOOD_KEY).await;
    let err = client.fetch_details(13).await.unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }), "{:?}", err);
}

#[tokio::test]
async fn slow_response_times_out() {
    let client = client_with_key(GOOD_KEY).await;
    let err = client.fetch_details(99).await.unwrap_err();

    assert!(matches!(err, CatalogError::Network { status: None, .. }), "{:?}", err);
    assert!(err.user_message().contains("in time"));
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let config = Config {
        api_key: GOOD_KEY.to_string(),
        // Reserved port nobody listens on
        base_url: "http://127.0.0.1:9/3".to_string(),
        request_timeout: Some(Duration::from_secs(2)),
        ..Config::default()
    };
    let client = TmdbClient::new(&config).unwrap();
    let err = client.fetch_popular().await.unwrap_err();
    assert!(matches!(err, CatalogError::Network { status: None, .. }), "{:?}", err);
}

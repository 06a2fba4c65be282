//! TMDB client tests against a local mock server.

use mockito::{Matcher, Server};
use movieapp::config::Config;
use movieapp::tmdb::{TmdbApi, TmdbClient};

fn client_for(base_url: &str) -> TmdbClient {
    let base_url = base_url.to_string();
    let config = Config::from_lookup(move |key| match key {
        "TMDB_API_KEY" => Some("test_key".to_string()),
        "TMDB_BASE_URL" => Some(base_url.clone()),
        "TMDB_REVALIDATE_SECS" => Some("600".to_string()),
        _ => None,
    })
    .unwrap();
    TmdbClient::new(&config).unwrap()
}

#[tokio::test]
async fn list_request_carries_key_language_and_cache_hint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/movie/popular")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "test_key".into()),
            Matcher::UrlEncoded("language".into(), "en-US".into()),
        ]))
        .match_header("cache-control", "max-age=600")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "page": 1,
                "results": [
                    { "id": 27205, "title": "Inception", "release_date": "2010-07-15", "vote_average": 8.4 },
                    { "id": 157336, "title": "Interstellar", "poster_path": null }
                ],
                "total_pages": 500,
                "total_results": 10000
            }"#,
        )
        .create_async()
        .await;

    let movies = client_for(&server.url()).popular_movies().await.unwrap();

    mock.assert_async().await;
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Inception");
    assert!(movies[1].poster_path.is_none());
}

#[tokio::test]
async fn search_sends_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "test_key".into()),
            Matcher::UrlEncoded("query".into(), "the matrix".into()),
        ]))
        .with_status(200)
        .with_body(r#"{ "results": [{ "id": 603, "title": "The Matrix" }] }"#)
        .create_async()
        .await;

    let movies = client_for(&server.url())
        .search_movies("the matrix")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(movies[0].id, 603);
}

#[tokio::test]
async fn movie_detail_appends_videos_credits_similar() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/movie/550")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "test_key".into()),
            Matcher::UrlEncoded("language".into(), "en-US".into()),
            Matcher::UrlEncoded(
                "append_to_response".into(),
                "videos,credits,similar".into(),
            ),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "id": 550,
                "title": "Fight Club",
                "overview": "A ticking-time-bomb insomniac...",
                "release_date": "1999-10-15",
                "runtime": 139,
                "credits": {
                    "cast": [{ "id": 819, "name": "Edward Norton", "character": "The Narrator" }],
                    "crew": [{ "id": 7467, "name": "David Fincher", "job": "Director" }]
                },
                "videos": { "results": [{ "key": "qtRKdVHc-cE", "site": "YouTube", "type": "Trailer" }] },
                "similar": { "page": 1, "results": [{ "id": 807, "title": "Se7en" }] }
            }"#,
        )
        .create_async()
        .await;

    let movie = client_for(&server.url()).movie_detail(550).await.unwrap();

    mock.assert_async().await;
    assert_eq!(movie.title, "Fight Club");
    assert_eq!(movie.overview, "A ticking-time-bomb insomniac...");
    let credits = movie.credits.unwrap();
    assert_eq!(credits.cast[0].name, "Edward Norton");
    assert_eq!(movie.similar.unwrap().results[0].title, "Se7en");
}

#[tokio::test]
async fn person_language_override_replaces_default() {
    let mut server = Server::new_async().await;
    let localized = server
        .mock("GET", "/person/287")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "test_key".into()),
            Matcher::UrlEncoded("language".into(), "id-ID".into()),
        ]))
        .with_status(200)
        .with_body(r#"{ "id": 287, "name": "Brad Pitt", "biography": "Bio Indonesia" }"#)
        .create_async()
        .await;

    let person = client_for(&server.url())
        .person_detail(287, Some("id-ID"))
        .await
        .unwrap();

    localized.assert_async().await;
    assert_eq!(person.biography, "Bio Indonesia");
}

#[tokio::test]
async fn person_credits_return_cast_list() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/person/287/movie_credits")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{ "id": 287, "cast": [
                { "id": 550, "title": "Fight Club", "release_date": "1999-10-15", "character": "Tyler Durden" }
            ], "crew": [] }"#,
        )
        .create_async()
        .await;

    let credits = client_for(&server.url())
        .person_movie_credits(287)
        .await
        .unwrap();

    assert_eq!(credits.len(), 1);
    assert_eq!(credits[0].character.as_deref(), Some("Tyler Durden"));
}

#[tokio::test]
async fn tv_list_requests_given_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tv/popular")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "test_key".into()),
            Matcher::UrlEncoded("page".into(), "3".into()),
        ]))
        .with_status(200)
        .with_body(r#"{ "page": 3, "results": [{ "id": 1399, "name": "Game of Thrones" }] }"#)
        .create_async()
        .await;

    let shows = client_for(&server.url()).tv_shows(3).await.unwrap();

    mock.assert_async().await;
    assert_eq!(shows[0].name, "Game of Thrones");
}

#[tokio::test]
async fn non_success_status_becomes_error_with_code() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/movie/999999")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{ "status_code": 34, "status_message": "The resource you requested could not be found." }"#)
        .create_async()
        .await;

    let err = client_for(&server.url())
        .movie_detail(999999)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("404"), "unexpected error: {}", message);
    assert!(message.contains("could not be found"));
}

#[tokio::test]
async fn unreachable_upstream_is_an_error() {
    // Nothing listens on port 9 in the test environment.
    let err = client_for("http://127.0.0.1:9")
        .trending_movies()
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("/trending/movie/week"));
}

mod common;

use std::collections::HashMap;

use common::*;
use statify::{
    aggregate::{ScoreWeights, aggregate, obscurity_rating, recent},
    spotify::{ApiError, SpotifyApi},
    types::SENTINEL_RANK,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

#[tokio::test]
async fn test_missing_windows_get_sentinel_rank() {
    let server = MockServer::start().await;
    mount_window(&server, "short_term", vec![track_json("a", "x", 50)]).await;
    mount_window(&server, "medium_term", vec![track_json("b", "x", 50), track_json("a", "x", 50)]).await;
    mount_window(&server, "long_term", vec![]).await;
    mount_artists(&server, genres_for(&["x"], "pop")).await;

    let api = SpotifyApi::new(server.uri());
    let result = aggregate(&api, TOKEN, &ScoreWeights::default()).await.unwrap();

    let a = result.tracks.iter().find(|t| t.id == "a").unwrap();
    assert_eq!((a.short_rank, a.medium_rank, a.long_rank), (1, 2, SENTINEL_RANK));

    let b = result.tracks.iter().find(|t| t.id == "b").unwrap();
    assert_eq!((b.short_rank, b.medium_rank, b.long_rank), (SENTINEL_RANK, 1, SENTINEL_RANK));
}

#[tokio::test]
async fn test_first_occurrence_seeds_display_fields() {
    let server = MockServer::start().await;
    let mut later = track_json("a", "x", 10);
    later["name"] = json!("Renamed");
    mount_window(&server, "short_term", vec![track_json("a", "x", 10)]).await;
    mount_window(&server, "medium_term", vec![later]).await;
    mount_window(&server, "long_term", vec![]).await;
    mount_artists(&server, genres_for(&["x"], "pop")).await;

    let api = SpotifyApi::new(server.uri());
    let result = aggregate(&api, TOKEN, &ScoreWeights::default()).await.unwrap();

    assert_eq!(result.tracks.len(), 1);
    let a = &result.tracks[0];
    assert_eq!(a.name, "Song a");
    assert_eq!(a.artist_name, "Artist x");
    assert_eq!(a.album_image, "https://i.scdn.co/medium/a");
    assert_eq!(a.external_url, "https://open.spotify.com/track/a");
}

#[tokio::test]
async fn test_common_top_tracks_come_first() {
    let server = MockServer::start().await;

    let mut genres = HashMap::new();
    for (range, prefix) in [("short_term", "s"), ("medium_term", "m"), ("long_term", "l")] {
        let mut items = Vec::new();
        for i in 0..10 {
            let id = format!("common{}", i);
            items.push(track_json(&id, &format!("artist-{}", id), 60));
            genres.insert(format!("artist-{}", id), vec!["pop".to_string()]);
        }
        for i in 0..40 {
            let id = format!("{}{}", prefix, i);
            items.push(track_json(&id, &format!("artist-{}", id), 60));
            genres.insert(format!("artist-{}", id), vec!["rock".to_string()]);
        }
        mount_window(&server, range, items).await;
    }
    mount_artists(&server, genres).await;

    let api = SpotifyApi::new(server.uri());
    let result = aggregate(&api, TOKEN, &ScoreWeights::default()).await.unwrap();

    // Should deduplicate the shared tracks
    assert_eq!(result.tracks.len(), 130);

    let top: Vec<&str> = result.tracks[..10].iter().map(|t| t.id.as_str()).collect();
    assert!(top.iter().all(|id| id.starts_with("common")));
    assert_eq!(result.tracks[0].id, "common0");
    assert_eq!(result.tracks[0].listen_score, 99);

    // Sorted non-increasing by score
    assert!(
        result
            .tracks
            .windows(2)
            .all(|w| w[0].listen_score >= w[1].listen_score)
    );

    // 130 distinct artists need three batches of at most 50 ids
    let requests = server.received_requests().await.unwrap();
    let artist_calls: Vec<_> = requests.iter().filter(|r| r.url.path() == "/artists").collect();
    assert_eq!(artist_calls.len(), 3);
    for call in artist_calls {
        let ids = call
            .url
            .query_pairs()
            .find(|(k, _)| k == "ids")
            .map(|(_, v)| v.split(',').count())
            .unwrap();
        assert!(ids <= 50);
    }
}

#[tokio::test]
async fn test_genre_is_first_reported_genre() {
    let server = MockServer::start().await;
    mount_window(
        &server,
        "short_term",
        vec![
            track_json("a", "dreamy", 40),
            track_json("b", "nogenre", 40),
            track_json("c", "ghost", 40),
        ],
    )
    .await;
    mount_window(&server, "medium_term", vec![]).await;
    mount_window(&server, "long_term", vec![]).await;

    let mut genres = HashMap::new();
    genres.insert(
        "dreamy".to_string(),
        vec!["dream pop".to_string(), "indie".to_string()],
    );
    genres.insert("nogenre".to_string(), vec![]);
    mount_artists(&server, genres).await;

    let api = SpotifyApi::new(server.uri());
    let result = aggregate(&api, TOKEN, &ScoreWeights::default()).await.unwrap();

    let genre_of = |id: &str| {
        result
            .tracks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.genre.clone())
            .unwrap()
    };
    assert_eq!(genre_of("a"), "dream pop");
    assert_eq!(genre_of("b"), "unknown");
    // artist missing from the upstream response
    assert_eq!(genre_of("c"), "unknown");
}

#[tokio::test]
async fn test_obscurity_uses_deduplicated_tracks() {
    let server = MockServer::start().await;
    mount_window(
        &server,
        "short_term",
        vec![track_json("hit", "x", 80), track_json("deep", "x", 20)],
    )
    .await;
    mount_window(&server, "medium_term", vec![track_json("hit", "x", 80)]).await;
    mount_window(&server, "long_term", vec![track_json("hit", "x", 80)]).await;
    mount_artists(&server, genres_for(&["x"], "pop")).await;

    let api = SpotifyApi::new(server.uri());
    let result = aggregate(&api, TOKEN, &ScoreWeights::default()).await.unwrap();

    // mean(80, 20) = 50, not mean(80, 20, 80, 80) = 65
    assert_eq!(result.obscurity_rating, 50);
}

#[test]
fn test_obscurity_rating_bounds() {
    assert_eq!(obscurity_rating(&[]), 0);
    assert_eq!(obscurity_rating(&[track("a", "x", "pop", 50, 100)]), 0);
    assert_eq!(obscurity_rating(&[track("a", "x", "pop", 50, 0)]), 100);
    assert_eq!(
        obscurity_rating(&[track("a", "x", "pop", 50, 33), track("b", "x", "pop", 50, 34)]),
        67
    );
}

#[tokio::test]
async fn test_rejected_token_fails_whole_aggregation() {
    let server = MockServer::start().await;
    mount_window(&server, "short_term", vec![track_json("a", "x", 50)]).await;
    mount_window(&server, "medium_term", vec![track_json("a", "x", 50)]).await;
    Mock::given(method("GET"))
        .and(path("/me/top/tracks"))
        .and(query_param("time_range", "long_term"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    mount_artists(&server, genres_for(&["x"], "pop")).await;

    let api = SpotifyApi::new(server.uri());
    let err = aggregate(&api, TOKEN, &ScoreWeights::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let server = MockServer::start().await;
    mount_window(&server, "short_term", vec![track_json("a", "x", 50)]).await;
    mount_window(&server, "medium_term", vec![]).await;
    mount_window(&server, "long_term", vec![]).await;
    Mock::given(method("GET"))
        .and(path("/artists"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .expect(1)
        .mount(&server)
        .await;

    let api = SpotifyApi::new(server.uri());
    let err = aggregate(&api, TOKEN, &ScoreWeights::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::RateLimited(Some(7))));
}

#[tokio::test]
async fn test_custom_weights_change_scores() {
    let server = MockServer::start().await;
    mount_window(&server, "short_term", vec![track_json("a", "x", 50)]).await;
    mount_window(&server, "medium_term", vec![]).await;
    mount_window(&server, "long_term", vec![]).await;
    mount_artists(&server, genres_for(&["x"], "pop")).await;

    let api = SpotifyApi::new(server.uri());
    let weights = ScoreWeights::new(0.4, 0.32, 0.28).unwrap();
    let result = aggregate(&api, TOKEN, &weights).await.unwrap();

    // 0.4 * 99 + 0.32 * 25 + 0.28 * 25 = 54.6
    assert_eq!(result.tracks[0].listen_score, 55);
}

#[tokio::test]
async fn test_recent_reshapes_play_history() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/player/recently-played"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "track": track_json("a", "x", 10), "played_at": "2024-05-01T10:00:00.000Z" },
                { "track": track_json("b", "y", 20), "played_at": "2024-05-01T09:00:00Z" }
            ]
        })))
        .mount(&server)
        .await;

    let api = SpotifyApi::new(server.uri());
    let items = recent(&api, TOKEN).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "a");
    assert_eq!(items[0].artist_name, "Artist x");
    assert_eq!(items[0].album_image, "https://i.scdn.co/large/a");
    assert_eq!(items[0].genre, "unknown");
    assert!(items[0].played_at > items[1].played_at);
}

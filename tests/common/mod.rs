#![allow(dead_code)]

use std::collections::HashMap;

use serde_json::{Value, json};
use statify::{aggregate::ScoreWeights, config::Config, types::Track};
use wiremock::{
    Mock, MockServer, Request, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const TOKEN: &str = "test-token";

// Helper function to create an upstream track object
pub fn track_json(id: &str, artist_id: &str, popularity: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Song {}", id),
        "popularity": popularity,
        "external_urls": { "spotify": format!("https://open.spotify.com/track/{}", id) },
        "artists": [{ "id": artist_id, "name": format!("Artist {}", artist_id) }],
        "album": {
            "images": [
                { "url": format!("https://i.scdn.co/large/{}", id), "height": 640, "width": 640 },
                { "url": format!("https://i.scdn.co/medium/{}", id), "height": 300, "width": 300 }
            ]
        }
    })
}

pub async fn mount_window(server: &MockServer, time_range: &str, tracks: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/me/top/tracks"))
        .and(query_param("time_range", time_range))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": tracks })))
        .mount(server)
        .await;
}

/// Answers `GET /artists?ids=...` from `genres`; unknown ids come back as null.
pub async fn mount_artists(server: &MockServer, genres: HashMap<String, Vec<String>>) {
    Mock::given(method("GET"))
        .and(path("/artists"))
        .respond_with(move |req: &Request| {
            let ids = req
                .url
                .query_pairs()
                .find(|(k, _)| k == "ids")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();

            let artists: Vec<Value> = ids
                .split(',')
                .map(|id| match genres.get(id) {
                    Some(g) => json!({ "id": id, "name": format!("Artist {}", id), "genres": g }),
                    None => Value::Null,
                })
                .collect();

            ResponseTemplate::new(200).set_body_json(json!({ "artists": artists }))
        })
        .mount(server)
        .await;
}

pub fn genres_for(ids: &[&str], genre: &str) -> HashMap<String, Vec<String>> {
    ids.iter()
        .map(|id| (id.to_string(), vec![genre.to_string()]))
        .collect()
}

pub fn test_config(upstream: &str) -> Config {
    Config {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        redirect_uri: "http://localhost:8888/callback".to_string(),
        site_url: "http://localhost:3000".to_string(),
        api_url: upstream.to_string(),
        accounts_url: upstream.to_string(),
        server_address: "127.0.0.1:0".to_string(),
        weights: ScoreWeights::default(),
    }
}

// Helper function to create an aggregated track
pub fn track(id: &str, artist: &str, genre: &str, score: u32, popularity: u32) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Song {}", id),
        artist_name: artist.to_string(),
        artist_id: format!("{}-id", artist),
        external_url: format!("https://open.spotify.com/track/{}", id),
        popularity,
        album_image: String::new(),
        short_rank: 75,
        medium_rank: 75,
        long_rank: 75,
        genre: genre.to_string(),
        listen_score: score,
    }
}

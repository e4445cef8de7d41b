//! Integration tests for the catalog client against a mock Spotify service

use std::time::Duration;

use serde_json::{Value, json};
use spotcat::{Authorizer, CatalogEntity, Client, Error, PageDirection, SearchType};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Token endpoint payload
fn token_json(expires_in: i64) -> Value {
    json!({
        "access_token": "test-token",
        "token_type": "Bearer",
        "expires_in": expires_in
    })
}

async fn mount_token(server: &MockServer, expires_in: i64) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json(expires_in)))
        .mount(server)
        .await;
}

/// Create a client pointed at the mock server
fn client_for(server: &MockServer) -> Client {
    Client::builder(Authorizer::client_credentials("id", "secret").unwrap())
        .api_base(format!("{}/v1", server.uri()))
        .token_url(format!("{}/api/token", server.uri()))
        .build()
        .unwrap()
}

async fn requests_to(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == request_path)
        .count()
}

/// Answers a several-artists request with one artist per requested id.
struct EchoArtists;

impl Respond for EchoArtists {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let ids = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "ids")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
        let artists: Vec<Value> = ids
            .split(',')
            .map(|id| json!({"id": id, "name": format!("Artist {id}")}))
            .collect();
        ResponseTemplate::new(200).set_body_json(json!({ "artists": artists }))
    }
}

fn album_json(server: &MockServer) -> Value {
    json!({
        "id": "AL",
        "name": "Album",
        "album_type": "album",
        "label": "Label",
        "popularity": 40,
        "release_date": "2008-03-11",
        "total_tracks": 3,
        "artists": [{"id": "AR", "name": "Artist"}],
        "tracks": {
            "href": format!("{}/v1/albums/AL/tracks?offset=0&limit=2", server.uri()),
            "items": [
                {"id": "T1", "name": "One", "duration_ms": 180000, "track_number": 1},
                {"id": "T2", "name": "Two", "duration_ms": 200000, "track_number": 2}
            ],
            "total": 3,
            "limit": 2,
            "offset": 0,
            "next": format!("{}/v1/albums/AL/tracks?offset=2&limit=2", server.uri()),
            "previous": null
        }
    })
}

#[tokio::test]
async fn test_token_request_uses_basic_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", "Basic aWQ6c2VjcmV0"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json(3600)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.ensure_authorized().await.unwrap());

    let set = client.authorization().await.unwrap();
    assert_eq!(set.access_token(), "test-token");
    assert_eq!(set.token_type(), "Bearer");
}

#[tokio::test]
async fn test_ensure_authorized_lifecycle() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    let client = client_for(&server);
    assert!(client.ensure_authorized().await.unwrap());
    assert!(!client.ensure_authorized().await.unwrap());
    assert!(!client.ensure_authorized().await.unwrap());
    assert_eq!(requests_to(&server, "/api/token").await, 1);

    client.invalidate_authorization().await;
    assert!(client.ensure_authorized().await.unwrap());
    assert_eq!(requests_to(&server, "/api/token").await, 2);
}

#[tokio::test]
async fn test_ensure_authorized_renews_after_expiry() {
    let server = MockServer::start().await;
    // expires_in 0: the expiry equals the issue instant, so it is already past
    mount_token(&server, 0).await;

    let client = client_for(&server);
    assert!(client.ensure_authorized().await.unwrap());
    assert!(client.ensure_authorized().await.unwrap());
    assert_eq!(requests_to(&server, "/api/token").await, 2);
}

#[tokio::test]
async fn test_concurrent_renewal_exchanges_once() {
    let server = MockServer::start().await;

    // First exchange hands out a token that is expired right away
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json(0)))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_json(3600))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.ensure_authorized().await.unwrap());

    let other = client.clone();
    let (a, b) = tokio::join!(client.ensure_authorized(), other.ensure_authorized());
    let renewed = [a.unwrap(), b.unwrap()];

    assert_eq!(renewed.iter().filter(|r| **r).count(), 1);
    assert_eq!(requests_to(&server, "/api/token").await, 2);
}

#[tokio::test]
async fn test_concurrent_requests_share_one_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_json(3600))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/artists/A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "A", "name": "A"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let handles: Vec<_> = (0..5)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_artist("A").await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().id, "A");
    }
    assert_eq!(requests_to(&server, "/api/token").await, 1);
    assert_eq!(requests_to(&server, "/v1/artists/A").await, 5);
}

#[tokio::test]
async fn test_bearer_header_attached() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/artists/0OdUWJ0sBjDrqHygGUXeCF"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "0OdUWJ0sBjDrqHygGUXeCF",
            "name": "Band of Horses",
            "genres": ["indie folk", "indie pop"],
            "popularity": 59,
            "followers": {"href": null, "total": 1_000_000},
            "unknown_field": {"ignored": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let artist = client.get_artist("0OdUWJ0sBjDrqHygGUXeCF").await.unwrap();

    assert!(artist.is_full());
    assert_eq!(artist.name, "Band of Horses");
    assert_eq!(artist.genres.len(), 2);
    assert_eq!(artist.followers, Some(1_000_000));
}

#[tokio::test]
async fn test_get_artists_preserves_nulls_and_duplicates() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/artists"))
        .and(query_param("ids", "A,missing,A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": [{"id": "A"}, null, {"id": "A"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let artists = client.get_artists(&["A", "missing", "A"]).await.unwrap();

    assert_eq!(artists.len(), 3);
    assert_eq!(artists[0].as_ref().unwrap().id, "A");
    assert!(artists[0].as_ref().unwrap().is_full());
    assert!(artists[1].is_none());
    assert_eq!(artists[2].as_ref().unwrap().id, "A");
}

#[tokio::test]
async fn test_get_artists_length_mismatch_is_decode_error() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/artists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": [{"id": "A"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.get_artists(&["A", "B"]).await,
        Err(Error::Decode(_))
    ));
}

#[tokio::test]
async fn test_get_artists_rejects_other_entity_key() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/artists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "albums": [{"id": "A", "name": "Not an artist"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.get_artists(&["A"]).await,
        Err(Error::Decode(_))
    ));
}

#[tokio::test]
async fn test_get_artists_length_matches_input() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/artists"))
        .respond_with(EchoArtists)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for count in [1usize, 2, 17, 50] {
        let ids: Vec<String> = (0..count).map(|i| format!("artist{i}")).collect();
        let artists = client.get_artists(&ids).await.unwrap();

        assert_eq!(artists.len(), count);
        for (id, artist) in ids.iter().zip(&artists) {
            assert_eq!(&artist.as_ref().unwrap().id, id);
        }
    }
}

#[tokio::test]
async fn test_get_bulk_out_of_range_makes_no_request() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    let client = client_for(&server);

    let none: Vec<String> = Vec::new();
    assert!(matches!(
        client.get_artists(&none).await,
        Err(Error::InvalidArgument(_))
    ));

    let too_many: Vec<String> = (0..51).map(|i| format!("id{i}")).collect();
    assert!(matches!(
        client.get_tracks(&too_many).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.get_albums(&too_many).await,
        Err(Error::InvalidArgument(_))
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_album_tracks_limit_validated() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    let client = client_for(&server);
    assert!(matches!(
        client.get_album_tracks("AL", 0, 0).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.get_album_tracks("AL", 51, 0).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_stub_track_upgrade() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/AL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_json(&server)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/tracks/T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "T1",
            "name": "One",
            "popularity": 55,
            "duration_ms": 180000,
            "artists": [{"id": "AR", "name": "Artist"}],
            "album": {"id": "AL", "name": "Album", "album_type": "album"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let album = client.get_album("AL").await.unwrap();
    assert!(album.is_full());

    let stub = album.tracks.as_ref().unwrap().items[0].clone();
    assert!(stub.is_partial());
    assert!(stub.album.is_none());

    let full = stub.upgrade().await.unwrap();
    assert!(full.is_full());
    assert_eq!(full.id, stub.id);
    assert_eq!(full.popularity, Some(55));
    assert!(full.album.as_ref().unwrap().is_partial());

    // Already full: no further request
    let again = full.upgrade().await.unwrap();
    assert_eq!(again.id, "T1");
    assert_eq!(requests_to(&server, "/v1/tracks/T1").await, 1);
}

#[tokio::test]
async fn test_get_by_id_is_full_without_popularity() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/tracks/T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "T1",
            "name": "One",
            "popularity": null,
            "duration_ms": 180000,
            "artists": [{"id": "AR", "name": "Artist"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let track = client.get_track("T1").await.unwrap();
    assert!(track.is_full());
    assert!(track.artists[0].is_partial());

    let upgraded = track.upgrade().await.unwrap();
    assert!(upgraded.is_full());
    assert_eq!(requests_to(&server, "/v1/tracks/T1").await, 1);
}

#[tokio::test]
async fn test_upgrade_after_client_dropped() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/AL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_json(&server)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let album = client.get_album("AL").await.unwrap();
    drop(client);

    let stub = &album.tracks.as_ref().unwrap().items[0];
    assert!(!stub.fetcher().is_attached());
    assert!(matches!(stub.upgrade().await, Err(Error::ClientDropped)));
}

#[tokio::test]
async fn test_album_tracks_paging() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/AL/tracks"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_json(&server)["tracks"].clone()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/AL/tracks"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "T3", "name": "Three"}],
            "total": 3,
            "limit": 2,
            "offset": 2,
            "next": null,
            "previous": format!("{}/v1/albums/AL/tracks?offset=0&limit=2", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.get_album_tracks("AL", 2, 0).await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first.total, 3);
    assert!(first.items.iter().all(|t| t.is_partial()));
    assert!(first.fetch_page(PageDirection::Previous).await.unwrap().is_none());

    let second = first
        .fetch_page(PageDirection::Next)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.offset, 2);
    assert_eq!(second.items[0].id, "T3");
    assert!(second.fetch_page(PageDirection::Next).await.unwrap().is_none());
    assert!(second.has_previous());
}

#[tokio::test]
async fn test_search_returns_requested_categories_only() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "hello"))
        .and(query_param("type", "album,track"))
        .and(query_param("limit", "3"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": {
                "items": [{"id": "T1", "name": "Hello", "popularity": 80}],
                "total": 1, "limit": 3, "offset": 0, "next": null, "previous": null
            },
            "albums": {
                "items": [{"id": "AL", "name": "Hello"}],
                "total": 1, "limit": 3, "offset": 0, "next": null, "previous": null
            },
            "artists": {
                "items": [{"id": "AR", "name": "Hello"}],
                "total": 1, "limit": 3, "offset": 0, "next": null, "previous": null
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .search("hello", SearchType::TRACK | SearchType::ALBUM, 3, 0)
        .await
        .unwrap();

    assert!(results.tracks.is_some());
    assert!(results.albums.is_some());
    assert!(results.artists.is_none());
    assert!(results.playlists.is_none());
    assert!(results.tracks.unwrap().items[0].is_full());
    assert!(results.albums.unwrap().items[0].is_partial());
}

#[tokio::test]
async fn test_search_encodes_spaces() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "daft punk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": {"items": [], "total": 0, "limit": 20, "offset": 0}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .search("daft punk", SearchType::ARTIST, 20, 0)
        .await
        .unwrap();
    assert!(results.artists.unwrap().is_empty());

    let requests = server.received_requests().await.unwrap();
    let search = requests
        .iter()
        .find(|r| r.url.path() == "/v1/search")
        .unwrap();
    assert!(search.url.query().unwrap().contains("q=daft%20punk"));
}

#[tokio::test]
async fn test_search_page_cursor_unwraps_category() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    let page = |offset: u32, next: Option<String>| {
        json!({
            "tracks": {
                "items": [{"id": format!("T{offset}"), "name": "Hello"}],
                "total": 2, "limit": 1, "offset": offset,
                "next": next, "previous": null
            }
        })
    };

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            0,
            Some(format!(
                "{}/v1/search?q=hello&type=track&offset=1&limit=1",
                server.uri()
            )),
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, None)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client.search("hello", SearchType::TRACK, 1, 0).await.unwrap();
    let first = results.tracks.unwrap();
    let second = first
        .fetch_page(PageDirection::Next)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(second.offset, 1);
    assert_eq!(second.items[0].id, "T1");
    assert!(!second.has_next());
}

#[tokio::test]
async fn test_search_validates_arguments() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    assert!(matches!(
        client.search("  ", SearchType::TRACK, 20, 0).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.search("hello", SearchType::empty(), 20, 0).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.search("hello", SearchType::TRACK, 51, 0).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_foreign_cursor_rejected() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/AL/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "total": 10, "limit": 5, "offset": 0,
            "next": "https://elsewhere.invalid/v1/albums/AL/tracks?offset=5",
            "previous": null
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.get_album_tracks("AL", 5, 0).await.unwrap();
    assert!(matches!(
        page.fetch_page(PageDirection::Next).await,
        Err(Error::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_not_found_and_http_errors() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/unknown"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"status": 404, "message": "Non existing id"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/tracks/broken"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.get_album("unknown").await.unwrap_err();
    assert!(err.is_not_found());

    match client.get_track("broken").await.unwrap_err() {
        Error::Http { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/tracks/T1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.get_track("T1").await,
        Err(Error::Decode(_))
    ));
}

#[tokio::test]
async fn test_token_rejection_is_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_artist("A").await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(requests_to(&server, "/v1/artists/A").await, 0);
    assert!(client.authorization().await.is_none());
}

#[tokio::test]
async fn test_malformed_token_payload_is_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.ensure_authorized().await,
        Err(Error::AuthFailure(_))
    ));
}

#[tokio::test]
async fn test_out_of_range_expiry_is_auth_failure() {
    let server = MockServer::start().await;
    mount_token(&server, i64::MAX).await;

    let client = client_for(&server);
    assert!(matches!(
        client.ensure_authorized().await,
        Err(Error::AuthFailure(_))
    ));
    assert!(client.authorization().await.is_none());
}

#[tokio::test]
async fn test_cancelled_client_makes_no_request() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let client = client_for(&server).with_cancellation(cancel);
    assert!(matches!(
        client.get_artist("A").await,
        Err(Error::Cancelled)
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_related_artists_and_top_tracks() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/artists/AR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "AR", "name": "Artist", "genres": [], "popularity": 10
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/artists/AR/related-artists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": [
                {"id": "R1", "name": "Related 1", "genres": ["rock"], "popularity": 30},
                {"id": "R2", "name": "Related 2", "genres": [], "popularity": 20}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/artists/AR/top-tracks"))
        .and(query_param("market", "SE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [{
                "id": "T1", "name": "Hit", "popularity": 90,
                "album": {"id": "AL", "name": "Album"},
                "artists": [{"id": "AR", "name": "Artist"}]
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let artist = client.get_artist("AR").await.unwrap();

    let related = artist.related().await.unwrap();
    assert_eq!(related.len(), 2);
    assert!(related.iter().all(|a| a.is_full()));

    let top = artist.top_tracks("SE").await.unwrap();
    assert_eq!(top[0].name, "Hit");
    assert_eq!(top[0].album.as_ref().unwrap().id, "AL");
}

#[tokio::test]
async fn test_artist_albums_page() {
    let server = MockServer::start().await;
    mount_token(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/v1/artists/AR/albums"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "AL1", "name": "First", "album_type": "album"},
                {"id": "AL2", "name": "Second", "album_type": "single"}
            ],
            "total": 2, "limit": 10, "offset": 0, "next": null, "previous": null
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let albums = client.get_artist_albums("AR", 10, 0).await.unwrap();
    assert_eq!(albums.len(), 2);
    assert!(albums.iter().all(|a| a.is_partial()));
    assert_eq!(albums.items[1].album_type.as_deref(), Some("single"));
}

//
//  starr
//  tests/services.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use mockito::Matcher;
use starr::api::lidarr::{AlbumFilter, Artist, Lidarr};
use starr::api::prowlarr::{self, Prowlarr};
use starr::api::radarr::Radarr;
use starr::api::readarr::{Book, Readarr};
use starr::api::servarr::{CommandRequest, CommandStatus, IndexerInput, MediaServarr, QueueDeleteOpts, Servarr};
use starr::api::sonarr::{Series, Sonarr};

mod common;

#[tokio::test]
async fn sonarr_update_series_sends_move_files() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("PUT", "/api/v3/series/5")
        .match_query(Matcher::UrlEncoded("moveFiles".into(), "true".into()))
        .match_body(Matcher::PartialJson(serde_json::json!({"id": 5, "path": "/tv/Dark"})))
        .with_status(202)
        .with_body(r#"{"id": 5, "title": "Dark", "path": "/tv/Dark"}"#)
        .create_async()
        .await;
    let sonarr = Sonarr::new(common::config(&server)).unwrap();
    let series = Series {
        id: 5,
        title: "Dark".into(),
        path: "/tv/Dark".into(),
        ..Default::default()
    };

    // Act
    let updated = sonarr.update_series(&series, true).await.unwrap();

    // Assert
    mock.assert_async().await;
    assert_eq!(updated.path, "/tv/Dark");
}

#[tokio::test]
async fn media_indexers_are_force_saved_on_add() {
    // Arrange
    let mut server = common::server().await;
    let add = server
        .mock("POST", "/api/v3/indexer")
        .match_query(Matcher::UrlEncoded("forceSave".into(), "true".into()))
        .with_status(201)
        .with_body(r#"{"id": 31, "name": "nzbgeek", "enableRss": true}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/v3/indexer/31")
        .match_query(Matcher::UrlEncoded("forceSave".into(), "false".into()))
        .with_status(202)
        .with_body(r#"{"id": 31, "name": "nzbgeek", "priority": 5}"#)
        .create_async()
        .await;
    let radarr = Radarr::new(common::config(&server)).unwrap();
    let mut input = IndexerInput {
        name: "nzbgeek".into(),
        enable_rss: true,
        ..Default::default()
    };

    // Act
    let added = radarr.add_indexer(&input).await.unwrap();
    input.id = added.id;
    input.priority = 5;
    let updated = radarr.update_indexer(&input, false).await.unwrap();

    // Assert
    add.assert_async().await;
    update.assert_async().await;
    assert_eq!(added.id, 31);
    assert_eq!(updated.priority, 5);
}

#[tokio::test]
async fn radarr_filters_movies_by_tmdb_id() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("GET", "/api/v3/movie")
        .match_query(Matcher::UrlEncoded("tmdbId".into(), "603".into()))
        .with_status(200)
        .with_body(r#"[{"id": 1, "title": "The Matrix", "tmdbId": 603}]"#)
        .create_async()
        .await;
    let radarr = Radarr::new(common::config(&server)).unwrap();

    // Act
    let movies = radarr.get_movie(Some(603)).await.unwrap();

    // Assert
    mock.assert_async().await;
    assert_eq!(movies[0].title, "The Matrix");
}

#[tokio::test]
async fn lidarr_add_artist_moves_files() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("POST", "/api/v1/artist")
        .match_query(Matcher::UrlEncoded("moveFiles".into(), "true".into()))
        .match_body(Matcher::PartialJson(serde_json::json!({"artistName": "Nina Simone"})))
        .with_status(201)
        .with_body(r#"{"id": 44, "artistName": "Nina Simone"}"#)
        .create_async()
        .await;
    let lidarr = Lidarr::new(common::config(&server)).unwrap();
    let artist = Artist {
        artist_name: "Nina Simone".into(),
        ..Default::default()
    };

    // Act
    let added = lidarr.add_artist(&artist).await.unwrap();

    // Assert
    mock.assert_async().await;
    assert_eq!(added.id, 44);
}

#[tokio::test]
async fn lidarr_album_filter_becomes_query() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("GET", "/api/v1/album")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("artistId".into(), "12".into()),
            Matcher::UrlEncoded("includeAllArtistAlbums".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"id": 3, "title": "Pastel Blues", "artistId": 12}]"#)
        .create_async()
        .await;
    let lidarr = Lidarr::new(common::config(&server)).unwrap();
    let filter = AlbumFilter {
        include_all_artist_albums: true,
        ..AlbumFilter::artist(12)
    };

    // Act
    let albums = lidarr.get_albums(&filter).await.unwrap();

    // Assert
    mock.assert_async().await;
    assert_eq!(albums[0].title, "Pastel Blues");
}

#[tokio::test]
async fn readarr_books_by_slug_and_add() {
    // Arrange
    let mut server = common::server().await;
    let get = server
        .mock("GET", "/api/v1/book")
        .match_query(Matcher::UrlEncoded("titleSlug".into(), "dune".into()))
        .with_status(200)
        .with_body(r#"[{"id": 8, "title": "Dune", "titleSlug": "dune"}]"#)
        .create_async()
        .await;
    let add = server
        .mock("POST", "/api/v1/book")
        .match_query(Matcher::UrlEncoded("moveFiles".into(), "true".into()))
        .with_status(201)
        .with_body(r#"{"id": 9, "title": "Children of Dune"}"#)
        .create_async()
        .await;
    let readarr = Readarr::new(common::config(&server)).unwrap();

    // Act
    let found = readarr.get_book(Some("dune")).await.unwrap();
    let added = readarr
        .add_book(&Book {
            title: "Children of Dune".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    // Assert
    get.assert_async().await;
    add.assert_async().await;
    assert_eq!(found[0].id, 8);
    assert_eq!(added.id, 9);
}

#[tokio::test]
async fn readarr_delete_queue_sends_only_chosen_options() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("DELETE", "/api/v1/queue/77")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("removeFromClient".into(), "true".into()),
            Matcher::UrlEncoded("blocklist".into(), "true".into()),
        ]))
        .with_status(200)
        .create_async()
        .await;
    let readarr = Readarr::new(common::config(&server)).unwrap();
    let opts = QueueDeleteOpts {
        remove_from_client: Some(true),
        blocklist: Some(true),
        ..Default::default()
    };

    // Act
    let result = readarr.delete_queue(77, &opts).await;

    // Assert
    mock.assert_async().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn prowlarr_uses_v1_paths() {
    // Arrange
    let mut server = common::server().await;
    let status = server
        .mock("GET", "/api/v1/system/status")
        .with_status(200)
        .with_body(r#"{"appName": "Prowlarr", "version": "1.12.2.4211"}"#)
        .create_async()
        .await;
    let add = server
        .mock("POST", "/api/v1/indexer")
        .match_query(Matcher::UrlEncoded("forceSave".into(), "true".into()))
        .match_body(Matcher::PartialJson(serde_json::json!({"name": "Nyaa", "appProfileId": 1})))
        .with_status(201)
        .with_body(r#"{"id": 8, "name": "Nyaa", "appProfileId": 1}"#)
        .create_async()
        .await;
    let prowlarr = Prowlarr::new(common::config(&server)).unwrap();
    let indexer = prowlarr::IndexerInput {
        name: "Nyaa".into(),
        app_profile_id: 1,
        ..Default::default()
    };

    // Act
    let system = prowlarr.get_system_status().await.unwrap();
    let added = prowlarr.add_indexer(&indexer).await.unwrap();

    // Assert
    status.assert_async().await;
    add.assert_async().await;
    assert_eq!(system.app_name, "Prowlarr");
    assert_eq!(added.id, 8);
}

#[tokio::test]
async fn commands_and_tags_share_one_implementation() {
    // Arrange
    let mut server = common::server().await;
    let command = server
        .mock("POST", "/api/v1/command")
        .match_body(Matcher::Json(serde_json::json!({"name": "RefreshArtist", "artistId": 44})))
        .with_status(201)
        .with_body(r#"{"id": 900, "name": "RefreshArtist", "status": "queued"}"#)
        .create_async()
        .await;
    let tags = server
        .mock("GET", "/api/v3/tag")
        .with_status(200)
        .with_body(r#"[{"id": 1, "label": "anime"}, {"id": 2, "label": "4k"}]"#)
        .create_async()
        .await;
    let lidarr = Lidarr::new(common::config(&server)).unwrap();
    let sonarr: Box<dyn Servarr> = Box::new(Sonarr::new(common::config(&server)).unwrap());

    // Act
    let queued = lidarr
        .send_command(&CommandRequest::new("RefreshArtist").arg("artistId", 44))
        .await
        .unwrap();
    let labels: Vec<String> = sonarr
        .get_tags()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.label)
        .collect();

    // Assert
    command.assert_async().await;
    tags.assert_async().await;
    assert_eq!(queued.id, 900);
    assert_eq!(queued.status, CommandStatus::Queued);
    assert!(!queued.status.is_finished());
    assert_eq!(labels, vec!["anime", "4k"]);
}

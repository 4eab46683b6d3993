//
//  starr
//  tests/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::time::{Duration, Instant};

use mockito::Matcher;
use starr::api::sonarr::{CalendarFeed, Series, Sonarr};
use starr::api::{Apier, ApierExt, Request};
use starr::{Error, ErrorKind};

mod common;

#[tokio::test]
async fn get_decodes_series_and_sends_api_key() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("GET", "/api/v3/series/2")
        .match_header("x-api-key", common::API_KEY)
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 2, "title": "Chernobyl"}"#)
        .create_async()
        .await;
    let sonarr = Sonarr::new(common::config(&server)).unwrap();

    // Act
    let series = sonarr.get_series_by_id(2).await;

    // Assert
    mock.assert_async().await;
    let series = series.unwrap();
    assert_eq!(series.id, 2);
    assert_eq!(series.title, "Chernobyl");
}

#[tokio::test]
async fn not_found_is_a_response_error() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("GET", "/api/v3/series/2")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"NotFound"}"#)
        .create_async()
        .await;
    let sonarr = Sonarr::new(common::config(&server)).unwrap();

    // Act
    let result: starr::Result<Series> = sonarr.get_series_by_id(2).await;

    // Assert
    mock.assert_async().await;
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidStatusCode);
    assert!(err.is_not_found());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));

    let response = err.response().unwrap();
    assert_eq!(response.body, r#"{"message":"NotFound"}"#);
    assert_eq!(response.message().as_deref(), Some("NotFound"));
    assert!(response.url.ends_with("/api/v3/series/2"));
}

#[tokio::test]
async fn server_error_keeps_validation_failures() {
    // Arrange
    let mut server = common::server().await;
    server
        .mock("POST", "/api/v3/tag")
        .with_status(400)
        .with_body(r#"[{"propertyName": "Label", "errorMessage": "Label must be unique"}]"#)
        .create_async()
        .await;
    let client = common::client(&server);

    // Act
    let req = Request::new("v3/tag").with_body(r#"{"label":"dupe"}"#);
    let err = client.post(req).await.unwrap_err();

    // Assert
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    assert_eq!(
        err.response().and_then(|r| r.message()).as_deref(),
        Some("Label: Label must be unique")
    );
}

#[tokio::test]
async fn post_sends_json_body_with_content_type() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("POST", "/api/v3/tag")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({"id": 0, "label": "anime"})))
        .with_status(201)
        .with_body(r#"{"id": 4, "label": "anime"}"#)
        .create_async()
        .await;
    let client = common::client(&server);

    // Act
    let req = Request::new("v3/tag")
        .with_json(&starr::api::servarr::Tag::new("anime"))
        .unwrap();
    let tag: starr::api::servarr::Tag = client.post_into(req).await.unwrap();

    // Assert
    mock.assert_async().await;
    assert_eq!(tag.id, 4);
}

#[tokio::test]
async fn raw_get_does_not_ask_for_json() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("GET", "/api/v3/system/status")
        .match_header("accept", "*/*")
        .with_status(200)
        .with_body("plain")
        .create_async()
        .await;
    let client = common::client(&server);

    // Act
    let response = client.get(Request::new("v3/system/status")).await.unwrap();

    // Assert
    mock.assert_async().await;
    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.text(), "plain");
    assert!(response.url.ends_with("/api/v3/system/status"));
}

#[tokio::test]
async fn query_parameters_are_encoded() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("GET", "/api/v3/series/lookup")
        .match_query(Matcher::UrlEncoded("term".into(), "the expanse".into()))
        .with_status(200)
        .with_body(r#"[{"title": "The Expanse", "tvdbId": 280619}]"#)
        .create_async()
        .await;
    let sonarr = Sonarr::new(common::config(&server)).unwrap();

    // Act
    let found = sonarr.lookup_series("the expanse").await.unwrap();

    // Assert
    mock.assert_async().await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].tvdb_id, 280619);
}

#[tokio::test]
async fn feed_paths_skip_the_api_prefix() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("GET", "/feed/v3/calendar/sonarr.ics")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pastDays".into(), "7".into()),
            Matcher::UrlEncoded("tags".into(), "1,2".into()),
            Matcher::UrlEncoded("asAllDay".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body("BEGIN:VCALENDAR\nEND:VCALENDAR\n")
        .create_async()
        .await;
    let sonarr = Sonarr::new(common::config(&server)).unwrap();
    let feed = CalendarFeed {
        past_days: Some(7),
        tags: vec![1, 2],
        as_all_day: true,
        ..Default::default()
    };

    // Act
    let ical = sonarr.get_calendar_feed(&feed).await.unwrap();

    // Assert
    mock.assert_async().await;
    assert!(ical.starts_with("BEGIN:VCALENDAR"));
}

#[tokio::test]
async fn bad_json_is_a_decode_error() {
    // Arrange
    let mut server = common::server().await;
    server
        .mock("GET", "/api/v3/series/2")
        .with_status(200)
        .with_body("<html>login</html>")
        .create_async()
        .await;
    let sonarr = Sonarr::new(common::config(&server)).unwrap();

    // Act
    let err = sonarr.get_series_by_id(2).await.unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::Decode);
    match err {
        Error::Decode { url, .. } => assert!(url.ends_with("/api/v3/series/2")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_discards_the_body() {
    // Arrange
    let mut server = common::server().await;
    let mock = server
        .mock("DELETE", "/api/v3/series/9")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("deleteFiles".into(), "true".into()),
            Matcher::UrlEncoded("addImportListExclusion".into(), "false".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let sonarr = Sonarr::new(common::config(&server)).unwrap();

    // Act
    let result = sonarr.delete_series(9, true, false).await;

    // Assert
    mock.assert_async().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Arrange
    let client = starr::api::Config::new("http://127.0.0.1:9", common::API_KEY)
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    // Act
    let err = client.get(Request::new("v3/system/status")).await.unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.status().is_none());
}

#[tokio::test]
async fn timeout_aborts_a_silent_service() {
    // Arrange
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let silent = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });
    let client = starr::api::Config::new(format!("http://{addr}"), common::API_KEY)
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();

    // Act
    let started = Instant::now();
    let err = client.get(Request::new("v3/system/status")).await.unwrap_err();
    let elapsed = started.elapsed();

    // Assert
    silent.abort();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(elapsed >= Duration::from_millis(250), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(1), "{elapsed:?}");
}

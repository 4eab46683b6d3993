//
//  starr
//  tests/copy.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use starr::api::common::{copy, copy_indexer, copy_indexers, FieldOutput, FieldValue, Protocol};
use starr::api::{prowlarr, servarr};
use starr::{Error, ErrorKind};

fn prowlarr_indexer(priority: i64) -> prowlarr::IndexerOutput {
    prowlarr::IndexerOutput {
        id: priority + 100,
        name: format!("indexer {priority}"),
        priority,
        enable: true,
        protocol: Protocol::Usenet,
        implementation: "Newznab".into(),
        config_contract: "NewznabSettings".into(),
        tags: vec![priority, 9],
        fields: vec![FieldOutput {
            name: "baseUrl".into(),
            value: Some(FieldValue::String(format!("https://indexer{priority}.example"))),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn staged_input() -> servarr::IndexerInput {
    servarr::IndexerInput {
        enable_automatic_search: true,
        enable_interactive_search: true,
        enable_rss: true,
        download_client_id: 15,
        ..Default::default()
    }
}

#[test]
fn copy_indexers_preserves_staged_slots() {
    // Arrange
    let srcs: Vec<prowlarr::IndexerOutput> = (1..=5).map(prowlarr_indexer).collect();
    let mut dst: Vec<servarr::IndexerInput> = (0..3).map(|_| staged_input()).collect();

    // Act
    copy_indexers(&srcs, &mut dst, true).unwrap();

    // Assert
    assert_eq!(dst.len(), 5);
    for staged in &dst[..3] {
        assert!(staged.enable_automatic_search);
        assert!(staged.enable_interactive_search);
        assert!(staged.enable_rss);
        assert_eq!(staged.download_client_id, 15);
    }
    for appended in &dst[3..] {
        assert!(!appended.enable_automatic_search);
        assert!(!appended.enable_interactive_search);
        assert!(!appended.enable_rss);
        assert_eq!(appended.download_client_id, 0);
    }
    for (i, indexer) in dst.iter().enumerate() {
        let priority = i as i64 + 1;
        assert_eq!(indexer.id, 0);
        assert_eq!(indexer.priority, priority);
        assert_eq!(indexer.tags, vec![priority, 9]);
        assert_eq!(indexer.protocol, Protocol::Usenet);
        assert_eq!(indexer.fields[0].name, "baseUrl");
    }
}

#[test]
fn copy_indexer_clears_tags_unless_kept() {
    // Arrange
    let src = prowlarr_indexer(3);
    let mut dst = staged_input();

    // Act
    let out = copy_indexer(&src, &mut dst, false).unwrap();

    // Assert
    assert_eq!(out.id, 0);
    assert!(out.tags.is_empty());
    assert_eq!(out.name, "indexer 3");
    assert_eq!(out.implementation, "Newznab");
}

#[test]
fn copy_between_media_services() {
    // Arrange
    let sonarr_indexer = servarr::IndexerOutput {
        id: 12,
        name: "nzbgeek".into(),
        enable_rss: true,
        priority: 10,
        supports_rss: true,
        tags: vec![1],
        ..Default::default()
    };
    let mut radarr_indexer = servarr::IndexerInput::default();

    // Act
    copy_indexer(&sonarr_indexer, &mut radarr_indexer, false).unwrap();

    // Assert
    assert_eq!(radarr_indexer.name, "nzbgeek");
    assert!(radarr_indexer.enable_rss);
    assert_eq!(radarr_indexer.priority, 10);
    assert_eq!(radarr_indexer.id, 0);
}

#[test]
fn copy_rejects_values_that_are_not_objects() {
    // Arrange
    let src = prowlarr_indexer(1);
    let mut dst = servarr::IndexerInput::default();
    let mut nothing: Option<servarr::IndexerInput> = None;

    // Act
    let from_nothing = copy(&None::<prowlarr::IndexerOutput>, &mut dst);
    let into_nothing = copy(&src, &mut nothing);

    // Assert
    assert!(matches!(from_nothing, Err(Error::NotAReference)));
    assert!(matches!(into_nothing, Err(Error::NotAReference)));
    assert_eq!(into_nothing.unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(dst, servarr::IndexerInput::default());
}

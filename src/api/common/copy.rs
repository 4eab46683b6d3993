//
//  starr
//  api/common/copy.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cross-service copier.
//!
//! Sonarr, Radarr, Lidarr, Readarr and Prowlarr describe indexers (and other
//! providers) with nearly identical JSON. These helpers move one service's
//! objects into another service's types through a JSON round trip, so the
//! serde renames of both types decide which fields line up.
//!
//! ```rust
//! use starr::api::common::copy_indexer;
//! use starr::api::servarr::{IndexerInput, IndexerOutput};
//!
//! let from_sonarr = IndexerOutput { id: 7, name: "nzbgeek".into(), tags: vec![1], ..Default::default() };
//! let mut for_radarr = IndexerInput::default();
//!
//! copy_indexer(&from_sonarr, &mut for_radarr, false)?;
//! assert_eq!(for_radarr.name, "nzbgeek");
//! assert_eq!(for_radarr.id, 0);
//! assert!(for_radarr.tags.is_empty());
//! # Ok::<(), starr::Error>(())
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{Error, Result};

/// A provider object with a service-local identity and tag list.
///
/// Both are meaningless on another service, so the copier resets them.
pub trait Identified {
    fn id_mut(&mut self) -> &mut i64;
    fn tags_mut(&mut self) -> &mut Vec<i64>;
}

/// Copies every field of `src` that `dst` also has into `dst`.
///
/// Fields `src` lacks, or holds as `null`, keep their current value in
/// `dst`. Nested objects merge field by field; arrays and scalars are
/// replaced whole.
///
/// # Errors
///
/// - [`Error::NotAReference`] if either side does not serialize to a JSON
///   object, e.g. `None`
/// - [`Error::Encode`] if either side fails to serialize
/// - [`Error::InvalidArgument`] if the merged JSON does not fit `D`
pub fn copy<S, D>(src: &S, dst: &mut D) -> Result<()>
where
    S: Serialize + ?Sized,
    D: Serialize + DeserializeOwned,
{
    let incoming = serde_json::to_value(src).map_err(Error::Encode)?;
    let current = serde_json::to_value(&*dst).map_err(Error::Encode)?;

    let (Value::Object(incoming), Value::Object(mut merged)) = (incoming, current) else {
        return Err(Error::NotAReference);
    };

    merge(&mut merged, incoming);

    *dst = serde_json::from_value(Value::Object(merged))
        .map_err(|e| Error::InvalidArgument(format!("copying into destination: {e}")))?;
    Ok(())
}

fn merge(dst: &mut Map<String, Value>, src: Map<String, Value>) {
    for (key, value) in src {
        match value {
            Value::Null => {}
            Value::Object(incoming) => match dst.get_mut(&key) {
                Some(Value::Object(existing)) => merge(existing, incoming),
                _ => {
                    dst.insert(key, Value::Object(incoming));
                }
            },
            other => {
                dst.insert(key, other);
            }
        }
    }
}

/// Copies an indexer from one service into another service's type.
///
/// After the copy the destination `id` is 0, so the target service assigns a
/// new one on add. Tags are cleared unless `keep_tags` is set; tag IDs only
/// line up when both services were given the same tags in the same order.
///
/// # Returns
///
/// The destination, for chaining into an add call.
pub fn copy_indexer<'a, S, D>(src: &S, dst: &'a mut D, keep_tags: bool) -> Result<&'a mut D>
where
    S: Serialize + ?Sized,
    D: Serialize + DeserializeOwned + Identified,
{
    copy(src, dst)?;
    *dst.id_mut() = 0;
    if !keep_tags {
        dst.tags_mut().clear();
    }
    Ok(dst)
}

/// Copies a list of indexers with [`copy_indexer`].
///
/// Existing slots of `dst` are copied into in place, so fields the caller
/// staged there (and that the source does not carry) survive. Sources beyond
/// the end of `dst` are copied into fresh default values and appended.
///
/// # Errors
///
/// Stops at the first failing element; `dst` keeps what was copied so far.
pub fn copy_indexers<S, D>(srcs: &[S], dst: &mut Vec<D>, keep_tags: bool) -> Result<()>
where
    S: Serialize,
    D: Serialize + DeserializeOwned + Identified + Default,
{
    for (i, src) in srcs.iter().enumerate() {
        match dst.get_mut(i) {
            Some(slot) => {
                copy_indexer(src, slot, keep_tags)?;
            }
            None => {
                let mut fresh = D::default();
                copy_indexer(src, &mut fresh, keep_tags)?;
                dst.push(fresh);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ErrorKind;
    use serde::Deserialize;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Source {
        id: i64,
        name: String,
        priority: i64,
        tags: Vec<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        protocol: Option<String>,
        settings: Settings,
        extra_only_here: bool,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Settings {
        #[serde(default)]
        base_url: String,
        #[serde(default)]
        api_path: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Target {
        id: i64,
        name: String,
        priority: i64,
        tags: Vec<i64>,
        protocol: Option<String>,
        settings: Settings,
        download_client_id: i64,
    }

    impl Identified for Target {
        fn id_mut(&mut self) -> &mut i64 {
            &mut self.id
        }

        fn tags_mut(&mut self) -> &mut Vec<i64> {
            &mut self.tags
        }
    }

    fn source(priority: i64) -> Source {
        Source {
            id: priority * 10,
            name: format!("indexer{priority}"),
            priority,
            tags: vec![1, 2],
            protocol: None,
            settings: Settings {
                base_url: "https://api.example".into(),
                api_path: String::new(),
            },
            extra_only_here: true,
        }
    }

    #[test]
    fn test_copy_keeps_fields_source_lacks() {
        let mut dst = Target {
            download_client_id: 15,
            protocol: Some("torrent".into()),
            ..Default::default()
        };
        copy(&source(3), &mut dst).unwrap();

        assert_eq!(dst.name, "indexer3");
        assert_eq!(dst.priority, 3);
        assert_eq!(dst.id, 30);
        assert_eq!(dst.download_client_id, 15);
        assert_eq!(dst.protocol.as_deref(), Some("torrent"));
        assert_eq!(dst.settings.base_url, "https://api.example");
    }

    #[test]
    fn test_nested_objects_merge() {
        let mut dst = Target::default();
        dst.settings.api_path = "/api".into();

        let mut src = serde_json::json!({"settings": {"baseUrl": "https://x"}});
        copy(&src, &mut dst).unwrap();
        assert_eq!(dst.settings.api_path, "/api");
        assert_eq!(dst.settings.base_url, "https://x");

        src = serde_json::json!({"settings": null, "name": "kept"});
        copy(&src, &mut dst).unwrap();
        assert_eq!(dst.settings.base_url, "https://x");
        assert_eq!(dst.name, "kept");
    }

    #[test]
    fn test_copy_rejects_non_objects() {
        let mut dst = Target::default();
        let err = copy(&None::<Source>, &mut dst).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(err, Error::NotAReference));

        let mut missing: Option<Target> = None;
        assert!(matches!(copy(&source(1), &mut missing), Err(Error::NotAReference)));

        assert!(matches!(copy(&42, &mut dst), Err(Error::NotAReference)));
    }

    #[test]
    fn test_copy_indexer_strips_identity() {
        let mut dst = Target::default();
        let out = copy_indexer(&source(2), &mut dst, false).unwrap();
        out.priority += 1;

        assert_eq!(dst.id, 0);
        assert!(dst.tags.is_empty());
        assert_eq!(dst.priority, 3);

        let mut dst = Target::default();
        copy_indexer(&source(2), &mut dst, true).unwrap();
        assert_eq!(dst.tags, vec![1, 2]);
    }

    #[test]
    fn test_copy_indexers_preserves_slots() {
        let srcs: Vec<Source> = (1..=4).map(source).collect();
        let mut dst: Vec<Target> = (0..2)
            .map(|_| Target {
                download_client_id: 15,
                ..Default::default()
            })
            .collect();

        copy_indexers(&srcs, &mut dst, false).unwrap();

        assert_eq!(dst.len(), 4);
        assert_eq!(dst[0].download_client_id, 15);
        assert_eq!(dst[1].download_client_id, 15);
        assert_eq!(dst[2].download_client_id, 0);
        assert!(dst.iter().all(|t| t.id == 0 && t.tags.is_empty()));
        assert_eq!(
            dst.iter().map(|t| t.priority).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }
}

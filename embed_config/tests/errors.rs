//! Failure propagation: every defect aborts the whole read.

use std::io::{self, Read};

use embed_config::resource::ResourceProvider;
use embed_config::{ConfigReader, EmbedError, read_embedded_config};
use serde_json::json;
use test_helpers::{fragment_bytes, full_prefix, manifest_bytes, provider};

#[test]
fn a_manifest_naming_a_missing_fragment_fails_the_read() {
    let resources = provider([
        ("config.xml", manifest_bytes(&["absent.json"])),
        ("present.json", fragment_bytes(&json!({"x": 1}))),
    ]);
    let err = read_embedded_config(&resources).expect_err("the named fragment does not exist");
    match &err {
        EmbedError::MissingResource { name, artifact } => {
            assert_eq!(name, &format!("{}absent.json", full_prefix()));
            assert_eq!(artifact, test_helpers::ARTIFACT);
        }
        other => panic!("expected MissingResource, got {other:?}"),
    }
}

#[test]
fn one_malformed_fragment_fails_the_whole_merge() {
    let resources = provider([
        ("good.json", fragment_bytes(&json!({"x": 1}))),
        ("bad.json", b"{not json".to_vec()),
        ("also_good.json", fragment_bytes(&json!({"y": 2}))),
    ]);
    let err = read_embedded_config(&resources).expect_err("a malformed fragment is fatal");
    assert!(matches!(err, EmbedError::Fragment { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn a_malformed_manifest_is_fatal_even_with_valid_fragments() {
    let resources = provider([
        ("config.xml", b"<Root><Resource>a.json".to_vec()),
        ("a.json", fragment_bytes(&json!({"x": 1}))),
    ]);
    let err = read_embedded_config(&resources).expect_err("unbalanced markup is fatal");
    assert!(matches!(err, EmbedError::Manifest { .. }));
}

/// Provider whose resources enumerate but refuse to open.
struct UnreadableResources;

impl ResourceProvider for UnreadableResources {
    fn artifact_name(&self) -> &str {
        "Acme.Client"
    }

    fn resource_names(&self) -> Vec<String> {
        vec![format!("{}locked.json", full_prefix())]
    }

    fn open_resource(&self, _name: &str) -> io::Result<Box<dyn Read + '_>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"))
    }
}

#[test]
fn read_failures_other_than_not_found_surface_as_resource_errors() {
    let err = ConfigReader::new(&UnreadableResources)
        .read()
        .expect_err("opening any resource fails");
    match err {
        EmbedError::Resource { name, source } => {
            assert!(name.ends_with("locked.json"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected Resource, got {other:?}"),
    }
}

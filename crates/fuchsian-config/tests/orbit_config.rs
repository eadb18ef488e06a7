// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::float_cmp)]

use fuchsian_config::{
    load_orbit_config, save_orbit_config, ConfigError, ConfigService, ConfigStore,
    InMemoryConfigStore, ORBIT_CONFIG_KEY,
};
use fuchsian_orbit::{CurveOrientation, LetterOrder, OrbitConfig, OrbitEngine};

/// Backend whose every call fails.
struct BrokenStore;

impl ConfigStore for BrokenStore {
    fn read(&self, _key: &str) -> Result<Option<Vec<u8>>, ConfigError> {
        Err(ConfigError::Backend("disk unplugged".into()))
    }

    fn write(&self, _key: &str, _document: &[u8]) -> Result<(), ConfigError> {
        Err(ConfigError::Backend("disk unplugged".into()))
    }
}

#[test]
fn missing_document_yields_defaults() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());
    let cfg = load_orbit_config(&service).unwrap();
    assert_eq!(cfg, OrbitConfig::default());
    assert!(!store.contains_key(ORBIT_CONFIG_KEY));

    let empty = InMemoryConfigStore::with_document(ORBIT_CONFIG_KEY, "");
    let cfg = load_orbit_config(&ConfigService::new(empty)).unwrap();
    assert_eq!(cfg, OrbitConfig::default());
}

#[test]
fn saved_config_round_trips() {
    let store = InMemoryConfigStore::new();
    let service = ConfigService::new(store.clone());
    let mut cfg = OrbitConfig {
        epsilon: 1e-8,
        letter_order: LetterOrder::Interleaved,
        workers: 3,
        ..OrbitConfig::default()
    };
    cfg.sampling.orientation = CurveOrientation::Canonical;
    cfg.sampling.line_width = 4.0;

    save_orbit_config(&service, &cfg).unwrap();
    let document = String::from_utf8(store.document(ORBIT_CONFIG_KEY).unwrap()).unwrap();
    assert!(document.contains("\"interleaved\""), "{document}");
    let loaded = load_orbit_config(&service).unwrap();
    assert_eq!(loaded, cfg);
    assert!(OrbitEngine::new(loaded).is_ok());
}

#[test]
fn stored_document_uses_snake_case_enums() {
    let store = InMemoryConfigStore::with_document(
        ORBIT_CONFIG_KEY,
        r#"{ "letter_order": "interleaved", "sampling": { "max_ray_height": 3.5 } }"#,
    );
    let cfg = load_orbit_config(&ConfigService::new(store)).unwrap();
    assert_eq!(cfg.letter_order, LetterOrder::Interleaved);
    assert_eq!(cfg.sampling.max_ray_height, 3.5);
    assert_eq!(cfg.sampling.line_width, 20.0);
}

#[test]
fn invalid_documents_are_rejected_on_load_and_save() {
    let store = InMemoryConfigStore::with_document(ORBIT_CONFIG_KEY, r#"{ "epsilon": -1.0 }"#);
    let service = ConfigService::new(store.clone());
    assert!(matches!(
        load_orbit_config(&service),
        Err(ConfigError::Invalid(_))
    ));

    let bad = OrbitConfig {
        parallel_threshold: 0,
        ..OrbitConfig::default()
    };
    assert!(matches!(
        save_orbit_config(&service, &bad),
        Err(ConfigError::Invalid(_))
    ));
    assert_eq!(
        store.document(ORBIT_CONFIG_KEY).as_deref(),
        Some(&br#"{ "epsilon": -1.0 }"#[..])
    );
}

#[test]
fn malformed_json_is_a_serde_error() {
    let store = InMemoryConfigStore::with_document(ORBIT_CONFIG_KEY, "{ not json");
    let service = ConfigService::new(store);
    assert!(matches!(
        load_orbit_config(&service),
        Err(ConfigError::Serde(_))
    ));
}

#[test]
fn backend_failures_propagate() {
    let service = ConfigService::new(BrokenStore);
    assert!(matches!(
        load_orbit_config(&service),
        Err(ConfigError::Backend(_))
    ));
    assert!(matches!(
        save_orbit_config(&service, &OrbitConfig::default()),
        Err(ConfigError::Backend(_))
    ));
}

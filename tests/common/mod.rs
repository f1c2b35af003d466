//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use cazadex::{Config, DirectoryClient, Hunter, HunterId, SelectionStore};
use mock_backend::MockBackend;

/// Build a client wired to a fresh store and the given mock backend.
pub fn make_client(backend: &MockBackend) -> DirectoryClient {
    DirectoryClient::new(Config::with_base_url(backend.base_url()), SelectionStore::new())
}

/// A domain hunter with a numeric identity, for seeding store state.
pub fn sample_hunter(id: i64, name: &str) -> Hunter {
    Hunter {
        id: Some(HunterId::Num(id)),
        name: name.to_string(),
        image: None,
        age: 12,
        height: 154.0,
        weight: 49.0,
        gender: "Masculino".to_string(),
        skills: vec!["Jajanken".to_string()],
        license_type: "Cazador Rookie".to_string(),
    }
}

/// JSON for one wire-format hunter with a numeric `id`.
pub fn hunter_json(id: i64, name: &str) -> String {
    format!(
        r#"{{"id": {}, "nombre": "{}", "imagen": "https://example.com/{}.png",
            "edad": 12, "altura": 154, "peso": 49, "genero": "Masculino",
            "habilidades": ["Jajanken"], "tipoLicencia": "Cazador Rookie"}}"#,
        id, name, id
    )
}

/// A search envelope containing the given hunters.
pub fn search_body(found: bool, hunters: &[String]) -> String {
    format!(
        r#"{{"found": {}, "cazadores": [{}]}}"#,
        found,
        hunters.join(",")
    )
}

/// A list envelope containing the given hunters.
pub fn list_body(hunters: &[String]) -> String {
    format!(r#"{{"cazadores": [{}]}}"#, hunters.join(","))
}

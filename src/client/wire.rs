//! Wire-format types for the backend collection endpoint.
//!
//! The backend speaks Spanish field names and carries identity in either
//! `id` or `_id`. Everything here maps the raw shape to the crate's domain
//! types, so neither quirk leaks past this module.

use serde::{Deserialize, Serialize};

use crate::hunter::{Hunter, HunterId, ValidHunter};

#[derive(Debug, Deserialize)]
pub(crate) struct WireHunter {
    #[serde(default)]
    id: Option<HunterId>,
    #[serde(rename = "_id", default)]
    alt_id: Option<String>,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "imagen", default)]
    image: Option<String>,
    #[serde(rename = "edad")]
    age: u32,
    #[serde(rename = "altura")]
    height: f64,
    #[serde(rename = "peso")]
    weight: f64,
    #[serde(rename = "genero", default)]
    gender: String,
    #[serde(rename = "habilidades", default)]
    skills: Vec<String>,
    #[serde(rename = "tipoLicencia", default)]
    license_type: String,
}

impl From<WireHunter> for Hunter {
    fn from(wire: WireHunter) -> Self {
        // `id` wins over `_id` when both are present.
        let id = wire.id.or_else(|| wire.alt_id.map(HunterId::Text));
        Hunter {
            id,
            name: wire.name,
            image: wire.image,
            age: wire.age,
            height: wire.height,
            weight: wire.weight,
            gender: wire.gender,
            skills: wire.skills,
            license_type: wire.license_type,
        }
    }
}

/// `GET …/buscar?nombre=<q>` response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "cazadores", default)]
    pub hunters: Vec<WireHunter>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET …/cazadores` response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    #[serde(rename = "cazadores", default)]
    pub hunters: Vec<WireHunter>,
}

/// `POST …/cazadores` success envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateResponse {
    #[serde(rename = "cazador")]
    pub hunter: WireHunter,
}

/// Error body the backend attaches to rejections.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST` body for create: the normalized draft, with no identity fields.
/// The server assigns the identity.
#[derive(Debug, Serialize)]
pub(crate) struct NewHunter<'a> {
    #[serde(rename = "nombre")]
    name: &'a str,
    #[serde(rename = "edad")]
    age: u32,
    #[serde(rename = "altura")]
    height: f64,
    #[serde(rename = "peso")]
    weight: f64,
    #[serde(rename = "genero")]
    gender: &'a str,
    #[serde(rename = "tipoLicencia")]
    license_type: &'a str,
    #[serde(rename = "habilidades")]
    skills: &'a [String],
}

impl<'a> From<&'a ValidHunter> for NewHunter<'a> {
    fn from(valid: &'a ValidHunter) -> Self {
        Self {
            name: &valid.name,
            age: valid.age,
            height: valid.height,
            weight: valid.weight,
            gender: &valid.gender,
            license_type: &valid.license_type,
            skills: &valid.skills,
        }
    }
}

// SPDX-License-Identifier: GPL-3.0-only

use serde::Deserialize;

/// `GET /generation/{id}/`
#[derive(Debug, Deserialize)]
pub struct ApiGeneration {
    #[serde(default)]
    pub pokemon_species: Vec<SpeciesRef>,
}

/// A species as listed by a generation, pointing to its detail resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesRef {
    pub name: String,
    pub url: String,
}

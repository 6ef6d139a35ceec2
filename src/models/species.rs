// SPDX-License-Identifier: GPL-3.0-only

use serde::Deserialize;

/// `GET /pokemon-species/{id}/`, only the localized names are kept
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSpeciesDetail {
    #[serde(default)]
    pub names: Vec<ApiLocalizedName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLocalizedName {
    pub name: String,
    pub language: ApiNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiNamedResource {
    pub name: String,
}

impl ApiSpeciesDetail {
    /// First name registered for the given language code (e.g. `ko`)
    pub fn localized_name(&self, language: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

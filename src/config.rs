// SPDX-License-Identifier: GPL-3.0-only

use std::{path::PathBuf, time::Duration};

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Everything a sprite run needs to know up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    /// Folder receiving the sprites named after their localized name
    pub kr_folder: PathBuf,
    /// Folder receiving the sprites named after their PokéApi slug
    pub en_folder: PathBuf,
    pub generations: Vec<u32>,
    /// PokéApi language code used to pick the localized name
    pub language: String,
    /// Wait between two species so we don't hammer PokéApi
    pub pause: Duration,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: POKEAPI_BASE_URL.to_string(),
            kr_folder: PathBuf::from("sprites").join("kr"),
            en_folder: PathBuf::from("sprites").join("en"),
            generations: vec![1, 2, 3],
            language: String::from("ko"),
            pause: Duration::from_millis(200),
            user_agent: format!("pokesprites/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: Duration::from_secs(30),
        }
    }
}

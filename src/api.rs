// SPDX-License-Identifier: GPL-3.0-only

use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{FetchError, Result},
    http::HttpClient,
    models::{ApiGeneration, ApiPokemon, ApiSpeciesDetail, SpeciesRef},
};

/// Thin PokéApi client over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct Api<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> Api<C> {
    pub fn new(client: C, config: &Config) -> Self {
        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Retrieves the species introduced in a generation, in the order PokéApi lists them
    pub async fn fetch_generation(&self, generation_id: u32) -> Result<Vec<SpeciesRef>> {
        let url = format!("{}/generation/{generation_id}/", self.base_url);
        let generation: ApiGeneration = self.get_json(&url).await?;
        Ok(generation.pokemon_species)
    }

    /// Retrieves the species detail a generation entry points to
    pub async fn fetch_species(&self, species_url: &str) -> Result<ApiSpeciesDetail> {
        self.get_json(species_url).await
    }

    /// Resolves the default front sprite of a species through its `pokemon` resource.
    /// `Ok(None)` means PokéApi knows the Pokémon but has no sprite for it.
    pub async fn fetch_sprite_url(&self, species_url: &str) -> Result<Option<String>> {
        let pokemon: ApiPokemon = self.get_json(&pokemon_url(species_url)).await?;
        Ok(pokemon.sprites.front_default)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).await?;
        if !response.is_ok() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Turns a `pokemon-species` resource URL into the matching `pokemon` one.
/// Only the first occurrence is replaced, the rest of the URL is left alone.
pub fn pokemon_url(species_url: &str) -> String {
    species_url.replacen("pokemon-species", "pokemon", 1)
}

// SPDX-License-Identifier: GPL-3.0-only

use serde::Deserialize;

/// `GET /pokemon/{id}/`
#[derive(Debug, Deserialize)]
pub struct ApiPokemon {
    pub sprites: ApiPokemonSprites,
}

#[derive(Debug, Deserialize)]
pub struct ApiPokemonSprites {
    pub front_default: Option<String>,
}

// SPDX-License-Identifier: GPL-3.0-only

//! The slices of PokéApi responses the sprite pipeline reads.

pub mod generation;
pub mod pokemon;
pub mod species;

pub use generation::{ApiGeneration, SpeciesRef};
pub use pokemon::{ApiPokemon, ApiPokemonSprites};
pub use species::{ApiLocalizedName, ApiNamedResource, ApiSpeciesDetail};

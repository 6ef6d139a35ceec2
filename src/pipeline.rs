// SPDX-License-Identifier: GPL-3.0-only

//! Walks the configured generations and saves every species' sprite twice:
//! once under its localized name and once under its PokéApi slug.
//!
//! Every failure past the folder setup is logged and absorbed, so a run
//! always reaches the last species.

use anywho::{Error, anywho};

use crate::{
    api::Api,
    config::Config,
    http::HttpClient,
    models::SpeciesRef,
    sprites::{DownloadOutcome, download_sprite},
};

/// What the run did for one species
#[derive(Debug)]
pub struct SpeciesOutcome {
    pub english_name: String,
    pub korean_name: Option<String>,
    /// `None` when no download into the localized folder was attempted
    pub korean: Option<DownloadOutcome>,
    /// `None` when the sprite could not be resolved
    pub english: Option<DownloadOutcome>,
}

/// Creates both output folders if they are missing
pub async fn prepare_folders(config: &Config) -> Result<(), Error> {
    for folder in [&config.kr_folder, &config.en_folder] {
        tokio::fs::create_dir_all(folder)
            .await
            .map_err(|e| anywho!("Failed to create {}: {e}", folder.display()))?;
    }

    Ok(())
}

/// Concatenates the species of every generation, keeping PokéApi's order.
/// A generation that can't be fetched counts as empty.
pub async fn collect_species<C: HttpClient>(api: &Api<C>, generations: &[u32]) -> Vec<SpeciesRef> {
    let mut all_species = Vec::new();

    for &generation_id in generations {
        match api.fetch_generation(generation_id).await {
            Ok(species) => {
                tracing::debug!(generation_id, count = species.len(), "Fetched generation");
                all_species.extend(species);
            }
            Err(e) => tracing::warn!("Failed to fetch generation {generation_id}: {e}"),
        }
    }

    all_species
}

/// Resolves the names and sprite of a single species and downloads it into both folders
pub async fn process_species<C: HttpClient>(
    api: &Api<C>,
    config: &Config,
    species: &SpeciesRef,
) -> SpeciesOutcome {
    let english_name = species.name.as_str();

    let detail = match api.fetch_species(&species.url).await {
        Ok(detail) => Some(detail),
        Err(e) => {
            tracing::warn!("Failed to fetch species data: {e}");
            None
        }
    };
    let korean_name = detail
        .as_ref()
        .and_then(|detail| detail.localized_name(&config.language))
        .map(String::from);

    let mut outcome = SpeciesOutcome {
        english_name: english_name.to_string(),
        korean_name: korean_name.clone(),
        korean: None,
        english: None,
    };

    let sprite_url = match api.fetch_sprite_url(&species.url).await {
        Ok(sprite_url) => sprite_url,
        Err(e) => {
            tracing::warn!("Failed to fetch data for {english_name}: {e}");
            return outcome;
        }
    };

    match &korean_name {
        Some(korean_name) => {
            outcome.korean = Some(
                download_sprite(
                    api.client(),
                    &config.kr_folder,
                    korean_name,
                    sprite_url.as_deref(),
                )
                .await,
            );
        }
        None => tracing::info!("Korean name not found for {english_name}"),
    }

    outcome.english = Some(
        download_sprite(
            api.client(),
            &config.en_folder,
            english_name,
            sprite_url.as_deref(),
        )
        .await,
    );

    outcome
}

/// Runs the whole pipeline once, pausing `config.pause` after every species
pub async fn run<C: HttpClient>(api: &Api<C>, config: &Config) -> Result<Vec<SpeciesOutcome>, Error> {
    prepare_folders(config).await?;

    tracing::info!(
        "Fetching Pokémon from generations {:?}...",
        config.generations
    );
    let all_species = collect_species(api, &config.generations).await;

    tracing::info!(
        "Found {} Pokémon. Downloading sprites...",
        all_species.len()
    );

    let mut outcomes = Vec::with_capacity(all_species.len());
    for species in &all_species {
        outcomes.push(process_species(api, config, species).await);

        // PokéApi rate limiting
        tokio::time::sleep(config.pause).await;
    }

    Ok(outcomes)
}

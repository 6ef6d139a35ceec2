// SPDX-License-Identifier: GPL-3.0-only

//! Downloads Pokémon sprites from PokéApi into two folders, one keyed by the
//! Korean display name and one keyed by the English slug.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod pipeline;
pub mod sprites;

pub use api::Api;
pub use config::Config;
pub use error::{FetchError, Result};
pub use http::{HttpClient, HttpResponse, MockHttpClient, ReqwestHttpClient};
pub use pipeline::{SpeciesOutcome, run};
pub use sprites::DownloadOutcome;

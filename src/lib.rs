pub mod adapters;
pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;

pub use adapters::DuckDuckGo;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{engine::ReportEngine, pipeline::RsePipeline};
pub use data::ReferenceData;
pub use domain::model::{KnownOverride, SearchResult, UniversityRecord};
pub use utils::error::{Result, RseError};

use std::io;
use thiserror::Error;

use crate::components::aircraft::config::ConfigError;
use crate::components::livery::LiveryError;
use crate::vessel::scenario::ScenarioError;

#[derive(Error, Debug)]
pub enum VesselError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Livery error: {0}")]
    Livery(#[from] LiveryError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Unknown vessel class: {0}")]
    UnknownClass(String),
}

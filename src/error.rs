use thiserror::Error;

use crate::{domain::PlacementError, params::ConfigError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("placement error: {0}")]
    Placement(#[from] PlacementError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

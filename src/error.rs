use std::path::PathBuf;

use thiserror::Error;

use crate::driver::DriverError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("invalid color {0:?}: expected up to 8 hexadecimal digits (WWRRGGBB)")]
    InvalidColor(String),
}

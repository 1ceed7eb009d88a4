//! Persisted strip state
//!
//! Each channel's last rendered colors live in a flat file of packed
//! `0xWWRRGGBB` words (little-endian, no header). The file is the only memory
//! shared between runs, so a fresh process starts its fade from whatever the
//! previous one displayed last.
//!
//! Persistence is advisory: the public API never fails. Missing or short
//! files read as "off", failed writes are logged and the animation carries on.
//! The files are meant for a tmpfs, they are rewritten on every frame.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::color::{OFF, Rgbw, rgbw_from_u32, rgbw_to_u32};
use crate::error::{Error, Result};

const WORD_SIZE: usize = size_of::<u32>();

/// State file of a single channel
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore `count` colors, padding whatever is missing with off
    pub fn load(&self, count: usize) -> Vec<Rgbw> {
        let mut colors = match read_colors(&self.path, count) {
            Ok(colors) => colors,
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                log::debug!("no saved state at {}, starting from off", self.path.display());
                Vec::new()
            }
            Err(err) => {
                log::warn!("failed to load LED state: {err}");
                Vec::new()
            }
        };

        if colors.len() < count {
            if !colors.is_empty() {
                log::warn!(
                    "insufficient data in {}: {} of {} colors",
                    self.path.display(),
                    colors.len(),
                    count
                );
            }
            colors.resize(count, OFF);
        }
        colors
    }

    /// Overwrite the stored colors, logging instead of failing
    pub fn save(&self, colors: &[Rgbw]) {
        if let Err(err) = write_colors(&self.path, colors) {
            log::warn!("failed to save LED state: {err}");
        }
    }
}

/// Read at most `count` colors from a state file
///
/// Excess data and a trailing partial word are ignored.
pub fn read_colors(path: &Path, count: usize) -> Result<Vec<Rgbw>> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    Ok(bytes
        .chunks_exact(WORD_SIZE)
        .take(count)
        .map(|word| rgbw_from_u32(u32::from_le_bytes([word[0], word[1], word[2], word[3]])))
        .collect())
}

/// Replace the contents of a state file with `colors`
pub fn write_colors(path: &Path, colors: &[Rgbw]) -> Result<()> {
    let bytes: Vec<u8> = colors
        .iter()
        .flat_map(|&color| rgbw_to_u32(color).to_le_bytes())
        .collect();

    fs::write(path, bytes).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

//! Locations of the bibliography, charts, and config file.
//!
//! Everything lives next to the executable; nothing is resolved against the
//! working directory.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{BibStatsError, Result};
use crate::output::{CATEGORY_CHART_FILE, YEAR_CHART_FILE};

/// Input bibliography file name.
pub const BIB_FILE_NAME: &str = "bib.bib";

/// Directory containing the running executable.
///
/// # Errors
/// Returns an error if the executable path cannot be determined or resolved.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = dunce::canonicalize(&exe).map_err(|source| BibStatsError::FileRead {
        path: exe.clone(),
        source,
    })?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        BibStatsError::Config(format!(
            "executable has no parent directory: {}",
            exe.display()
        ))
    })
}

/// All paths the tool touches, rooted in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramPaths {
    pub dir: PathBuf,
    pub bibliography: PathBuf,
    pub year_chart: PathBuf,
    pub category_chart: PathBuf,
    pub config: PathBuf,
}

impl ProgramPaths {
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            bibliography: dir.join(BIB_FILE_NAME),
            year_chart: dir.join(YEAR_CHART_FILE),
            category_chart: dir.join(CATEGORY_CHART_FILE),
            config: dir.join(CONFIG_FILE_NAME),
            dir,
        }
    }

    /// Paths next to the running executable.
    ///
    /// # Errors
    /// Returns an error if the program directory cannot be resolved.
    pub fn discover() -> Result<Self> {
        Ok(Self::in_dir(program_dir()?))
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;

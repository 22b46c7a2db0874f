//! Campaign file: parameters, bit roster, and scenarios as a TOML document
//!
//! The on-disk form of everything a caller owns. One file describes one
//! campaign:
//!
//! ```toml
//! [campaign]
//! name = "Endeavour-7 8½\" section"
//!
//! [parameters]
//! rig_cost_per_day = 85000.0
//! trip_speed = 40.0
//! stand_length = 28.5
//! start_depth = 2000.0
//! interval_to_drill = 1200.0
//! bit_change_overhead_hours = 6.0
//!
//! [[bits]]
//! id = "pdc-616"
//! name = "PDC 6-blade 16mm"
//! unit_cost = 25000.0
//! penetration_rate = 12.5
//! max_run_length = 450.0
//!
//! [[scenarios]]
//! name = "Baseline"
//! sequence = ["pdc-616", "pdc-616", "pdc-616"]
//! ```
//!
//! Scenario entries may reference bit ids deleted in a later edit; the
//! simulator tolerates those by skipping them, so loading never has to
//! pre-sanitize.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::types::{BitType, DrillingParameters, Scenario};

/// Environment variable naming a campaign file, checked after an explicit
/// path and before the working-directory default.
pub const CAMPAIGN_FILE_ENV: &str = "RIGPLAN_CAMPAIGN";

/// Default campaign file name in the working directory.
pub const DEFAULT_CAMPAIGN_FILE: &str = "campaign.toml";

// ============================================================================
// File Model
// ============================================================================

/// Campaign identification block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignInfo {
    /// Campaign display name
    #[serde(default)]
    pub name: String,

    /// Well designation, free-form
    #[serde(default)]
    pub well: String,
}

/// A scenario as authored in the file. The id is optional; a stable
/// position-based one is assigned on load when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub sequence: Vec<String>,
}

/// Root of a campaign TOML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignFile {
    #[serde(default)]
    pub campaign: CampaignInfo,

    pub parameters: DrillingParameters,

    #[serde(default)]
    pub bits: Vec<BitType>,

    #[serde(default)]
    pub scenarios: Vec<ScenarioEntry>,
}

/// Errors loading a campaign file.
#[derive(Debug, thiserror::Error)]
pub enum CampaignFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "no campaign file found — pass a path, set ${CAMPAIGN_FILE_ENV}, \
         or create ./{DEFAULT_CAMPAIGN_FILE}"
    )]
    NotFound,
}

impl CampaignFile {
    /// Parse a campaign document from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a campaign document from a specific path.
    pub fn load_path(path: &Path) -> Result<Self, CampaignFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| CampaignFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_toml_str(&text).map_err(|source| CampaignFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            bits = file.bits.len(),
            scenarios = file.scenarios.len(),
            "loaded campaign file"
        );
        Ok(file)
    }

    /// Resolve and load a campaign file.
    ///
    /// Search order:
    /// 1. `explicit` path, when given
    /// 2. `$RIGPLAN_CAMPAIGN`
    /// 3. `./campaign.toml`
    pub fn locate_and_load(explicit: Option<&Path>) -> Result<Self, CampaignFileError> {
        if let Some(path) = explicit {
            return Self::load_path(path);
        }

        if let Ok(env_path) = std::env::var(CAMPAIGN_FILE_ENV) {
            return Self::load_path(Path::new(&env_path));
        }

        let default = Path::new(DEFAULT_CAMPAIGN_FILE);
        if default.exists() {
            return Self::load_path(default);
        }

        Err(CampaignFileError::NotFound)
    }

    /// Materialize scenarios with ids filled in (`scenario-N` by position).
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.scenarios
            .iter()
            .enumerate()
            .map(|(index, entry)| Scenario {
                id: entry
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("scenario-{}", index + 1)),
                name: entry.name.clone(),
                sequence: entry.sequence.clone(),
            })
            .collect()
    }
}

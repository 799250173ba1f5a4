//! Game configuration

use crate::core::GameLocale;
use crate::schedule::{TurnScheduler, epoch_start};
use crate::wordlists::DEFAULT_SEED;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// How turns are cut out of time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScheduleConfig {
    /// Calendar days; the system zone unless an offset east of UTC is given
    Calendar {
        #[serde(default)]
        utc_offset_secs: Option<i32>,
    },
    /// Fixed-length turns
    Bucket { secs: u32 },
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::Calendar {
            utc_offset_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub locale: GameLocale,
    pub hard_mode: bool,
    pub hide_first_row: bool,
    pub scheduler: ScheduleConfig,
    pub epoch_start: DateTime<Utc>,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            locale: GameLocale::default(),
            hard_mode: false,
            hide_first_row: false,
            scheduler: ScheduleConfig::default(),
            epoch_start: epoch_start(),
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Scheduler for this configuration
    ///
    /// Invalid parameters (a zero-length bucket or an offset of a day or
    /// more) fall back to the system calendar.
    #[must_use]
    pub fn turn_scheduler(&self) -> TurnScheduler {
        let scheduler = match self.scheduler {
            ScheduleConfig::Calendar {
                utc_offset_secs: None,
            } => Some(TurnScheduler::local(self.epoch_start)),
            ScheduleConfig::Calendar {
                utc_offset_secs: Some(offset),
            } => TurnScheduler::fixed(self.epoch_start, offset),
            ScheduleConfig::Bucket { secs } => TurnScheduler::bucket(self.epoch_start, secs),
        };
        scheduler.unwrap_or_else(|| {
            warn!(scheduler = ?self.scheduler, "invalid scheduler settings, using local calendar");
            TurnScheduler::local(self.epoch_start)
        })
    }
}

pub trait ConfigStore {
    fn load(&self) -> GameConfig;
    /// # Errors
    /// Fails when the file or its directory cannot be written.
    fn save(&self, cfg: &GameConfig) -> std::io::Result<()>;
}

/// `config.json` in the platform config directory
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        let path = ProjectDirs::from("", "", "wordle_daily").map_or_else(
            || PathBuf::from("wordle_daily_config.json"),
            |pd| pd.config_dir().join("config.json"),
        );
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> GameConfig {
        let Ok(bytes) = fs::read(&self.path) else {
            return GameConfig::default();
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "ignoring malformed config");
            GameConfig::default()
        })
    }

    fn save(&self, cfg: &GameConfig) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}

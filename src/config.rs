use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SnakeError};
use crate::model::{Cell, Heading};

/// Size of one grid square in pixels
pub const GRID_PITCH: i32 = 20;

/// Width and height of the square canvas in pixels
pub const CANVAS_SIZE: i32 = 400;

/// Where a fresh snake starts
pub const START_CELL: Cell = Cell { x: 160, y: 160 };

/// Points awarded per food eaten
pub const FOOD_REWARD: u32 = 10;

pub const DEFAULT_HEADING: Heading = Heading::Right;

/// Default location of the settings file, relative to the working directory
pub const SETTINGS_FILE: &str = "snake_settings.json";

/// The three speed presets. The tick interval is fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn tick_interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(50),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Everything needed to set up one run of the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Pixel pitch of the grid; every cell coordinate is a multiple of it
    pub pitch: i32,
    /// Playable width in pixels
    pub width: i32,
    /// Playable height in pixels
    pub height: i32,
    pub start: Cell,
    pub start_heading: Heading,
    pub food_reward: u32,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pitch: GRID_PITCH,
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            start: START_CELL,
            start_heading: DEFAULT_HEADING,
            food_reward: FOOD_REWARD,
            difficulty: Difficulty::default(),
        }
    }
}

impl GameConfig {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Default::default()
        }
    }

    /// Number of grid columns
    pub fn columns(&self) -> i32 {
        self.width / self.pitch
    }

    /// Number of grid rows
    pub fn rows(&self) -> i32 {
        self.height / self.pitch
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn validate(&self) -> Result<()> {
        if self.pitch <= 0 {
            return Err(SnakeError::InvalidConfig(format!(
                "grid pitch must be positive, got {}",
                self.pitch
            )));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(SnakeError::InvalidConfig(format!(
                "bounds must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width % self.pitch != 0 || self.height % self.pitch != 0 {
            return Err(SnakeError::InvalidConfig(format!(
                "bounds {}x{} are not a multiple of the pitch {}",
                self.width, self.height, self.pitch
            )));
        }
        if self.start.x % self.pitch != 0 || self.start.y % self.pitch != 0 {
            return Err(SnakeError::InvalidConfig(format!(
                "start cell {:?} is not aligned to the grid",
                self.start
            )));
        }
        if !self.contains(self.start) {
            return Err(SnakeError::InvalidConfig(format!(
                "start cell {:?} lies outside the playfield",
                self.start
            )));
        }
        Ok(())
    }
}

/// Player settings kept between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub sound_volume: f32,
    pub best_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            sound_volume: 1.0,
            best_score: 0,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        PathBuf::from(SETTINGS_FILE)
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&text)?;
        settings.sound_volume = settings.sound_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Like [`Settings::load`] but never fails; problems are logged and the
    /// defaults used instead.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Could not read settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Record `score` if it beats the best so far. Returns true when it did.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.best_score {
            info!(score, previous = self.best_score, "New best score");
            self.best_score = score;
            true
        } else {
            false
        }
    }
}

//! Single-player Snake on a 2D canvas.

pub mod audio;
pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod surface;

pub use config::{Difficulty, GameConfig, Settings};
pub use controller::GameController;
pub use error::{Result, SnakeError};
pub use model::{Cell, GameState, GameStatus, Heading, StepOutcome};
pub use scheduler::TickScheduler;
pub use surface::{Overlay, RenderSurface, SoundEffect, SoundPlayer, TextStyle};

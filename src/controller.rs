use macroquad::input::KeyCode;
use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::Result;
use crate::input::KeyAction;
use crate::model::{GameState, GameStatus, StepOutcome};
use crate::scheduler::TickScheduler;
use crate::surface::{Overlay, SoundEffect, SoundPlayer};

pub struct GameController<S, O, R> {
    config: GameConfig,
    state: GameState,
    status: GameStatus,
    scheduler: TickScheduler,
    /// Score of the run that just ended, while the dialog is up
    final_score: Option<u32>,
    sound: S,
    overlay: O,
    rng: R,
}

impl<S, O, R> GameController<S, O, R>
where
    S: SoundPlayer,
    O: Overlay,
    R: Rng,
{
    /// Set up the title screen. Nothing moves until the first key press.
    pub fn new(config: GameConfig, sound: S, mut overlay: O, mut rng: R) -> Result<Self> {
        config.validate()?;
        let state = GameState::new(config.clone(), &mut rng)?;
        overlay.show();
        Ok(Self {
            config,
            state,
            status: GameStatus::NotStarted,
            scheduler: TickScheduler::new(),
            final_score: None,
            sound,
            overlay,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// React to one key press at time `now` (seconds).
    pub fn handle_key(&mut self, key: KeyCode, now: f64) -> Result<()> {
        let action = KeyAction::from(key);
        match self.status {
            GameStatus::NotStarted => self.reset(now),
            GameStatus::Running => {
                if let KeyAction::Steer(heading) = action {
                    self.state.set_heading(heading);
                }
                Ok(())
            }
            GameStatus::Over => match action {
                KeyAction::Acknowledge => self.reset(now),
                _ => Ok(()),
            },
        }
    }

    /// Run the tick if one is due at `now`. Returns what it did.
    pub fn update(&mut self, now: f64) -> Option<StepOutcome> {
        if self.status != GameStatus::Running || !self.scheduler.poll(now) {
            return None;
        }

        let outcome = self.state.advance(&mut self.rng);
        match outcome {
            StepOutcome::Moved => {}
            StepOutcome::Ate => {
                debug!(score = self.state.score(), food = ?self.state.food(), "Food eaten");
                self.sound.play(SoundEffect::Eat);
            }
            StepOutcome::Collision => self.game_over(),
        }
        Some(outcome)
    }

    /// Start a fresh run. The previous timer, if any, is cancelled first.
    pub fn reset(&mut self, now: f64) -> Result<()> {
        self.scheduler.stop();
        self.state = GameState::new(self.config.clone(), &mut self.rng)?;
        self.final_score = None;
        self.status = GameStatus::Running;
        self.overlay.hide();
        self.scheduler.start(now, self.config.difficulty.tick_interval())?;
        info!(
            difficulty = self.config.difficulty.label(),
            "Run started"
        );
        Ok(())
    }

    fn game_over(&mut self) {
        self.scheduler.stop();
        self.status = GameStatus::Over;
        self.final_score = Some(self.state.score());
        self.sound.play(SoundEffect::GameOver);
        info!(
            score = self.state.score(),
            length = self.state.snake().len(),
            "Game over"
        );
    }
}

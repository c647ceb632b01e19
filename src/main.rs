use macroquad::input::{KeyCode, get_keys_pressed, is_key_pressed};
use macroquad::time::get_time;
use macroquad::prelude::Conf;
use macroquad::window::{clear_background, next_frame};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snake_canvas::backend::{self, MacroquadSound, MacroquadSurface, Speaker};
use snake_canvas::config::{CANVAS_SIZE, GameConfig, Settings};
use snake_canvas::render::{self, PAPER, StartPrompt};
use snake_canvas::{GameController, GameStatus, Result, StepOutcome};

fn window_conf() -> Conf {
    backend::window_conf(CANVAS_SIZE, CANVAS_SIZE)
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snake_canvas=info".into()),
        )
        .init();
}

async fn run() -> Result<()> {
    let settings_path = Settings::default_path();
    let mut settings = Settings::load_or_default(&settings_path);
    let config = GameConfig::with_difficulty(settings.difficulty);
    let (width, height) = (config.width as f32, config.height as f32);

    let speaker = match MacroquadSound::load(settings.sound_volume).await {
        Ok(sound) => Speaker::Device(sound),
        Err(e) => {
            warn!("Sound disabled: {}", e);
            Speaker::Muted
        }
    };

    let mut game = GameController::new(
        config,
        speaker,
        StartPrompt::default(),
        StdRng::from_entropy(),
    )?;
    let mut surface = MacroquadSurface;
    info!(difficulty = settings.difficulty.label(), best = settings.best_score, "Ready");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let now = get_time();
        for key in get_keys_pressed() {
            if key != KeyCode::Escape {
                game.handle_key(key, now)?;
            }
        }

        if game.update(now) == Some(StepOutcome::Collision) {
            let score = game.state().score();
            if settings.record_score(score) {
                if let Err(e) = settings.save(&settings_path) {
                    warn!("Could not save settings to {}: {}", settings_path.display(), e);
                }
            }
        }

        clear_background(PAPER);
        match game.status() {
            GameStatus::NotStarted => {
                game.overlay()
                    .draw(&mut surface, width, height, settings.difficulty)
            }
            GameStatus::Running => render::draw_frame(&mut surface, game.state()),
            GameStatus::Over => {
                render::draw_frame(&mut surface, game.state());
                let score = game.final_score().unwrap_or_default();
                render::draw_game_over(&mut surface, width, height, score);
            }
        }

        next_frame().await;
    }

    info!("Bye");
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        error!("Snake stopped: {}", e);
    }
}

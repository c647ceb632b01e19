use macroquad::color::Color;
use macroquad::input::KeyCode;
use macroquad::math::Rect;
use rand::SeedableRng;
use rand::rngs::StdRng;

use snake_canvas::render::{self, StartPrompt};
use snake_canvas::{
    Cell, Difficulty, GameConfig, GameController, GameStatus, Overlay, RenderSurface,
    SoundEffect, SoundPlayer, StepOutcome, TextStyle,
};

#[derive(Default)]
struct Beeps(Vec<SoundEffect>);

impl SoundPlayer for Beeps {
    fn play(&mut self, effect: SoundEffect) {
        self.0.push(effect);
    }
}

#[derive(Default)]
struct Canvas {
    filled: usize,
    texts: Vec<String>,
}

impl RenderSurface for Canvas {
    fn clear(&mut self, _region: Rect) {
        self.filled = 0;
        self.texts.clear();
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Color) {
        self.filled += 1;
    }

    fn stroke_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _thickness: f32, _color: Color) {}

    fn draw_text(&mut self, _x: f32, _y: f32, text: &str, _style: TextStyle) {
        self.texts.push(text.to_string());
    }
}

const TICK: f64 = 0.05;

#[test]
fn full_session() {
    let mut game = GameController::new(
        GameConfig::with_difficulty(Difficulty::Hard),
        Beeps::default(),
        StartPrompt::default(),
        StdRng::seed_from_u64(2024),
    )
    .unwrap();
    assert!(game.overlay().is_visible());

    let mut now = 0.0;
    game.handle_key(KeyCode::G, now).unwrap();
    assert_eq!(game.status(), GameStatus::Running);
    assert!(!game.overlay().is_visible());

    // Straight up into the top wall
    game.handle_key(KeyCode::Up, now).unwrap();
    let mut canvas = Canvas::default();
    let mut outcomes = Vec::new();
    for _ in 0..200 {
        now += TICK;
        let Some(outcome) = game.update(now) else {
            continue;
        };
        outcomes.push(outcome);

        render::draw_frame(&mut canvas, game.state());
        assert_eq!(canvas.filled, game.state().snake().len() + 1);
        assert_eq!(canvas.texts, vec![format!("Score: {}", game.state().score())]);

        if outcome == StepOutcome::Collision {
            break;
        }
    }

    assert_eq!(outcomes.last(), Some(&StepOutcome::Collision));
    assert_eq!(game.status(), GameStatus::Over);
    let eaten = outcomes.iter().filter(|o| **o == StepOutcome::Ate).count();
    assert_eq!(game.final_score(), Some(eaten as u32 * 10));

    let mut expected = vec![SoundEffect::Eat; eaten];
    expected.push(SoundEffect::GameOver);
    assert_eq!(game.sound().0, expected);

    // Only the acknowledge key gets out of the game-over state
    game.handle_key(KeyCode::Right, now).unwrap();
    game.handle_key(KeyCode::X, now).unwrap();
    assert_eq!(game.status(), GameStatus::Over);

    game.handle_key(KeyCode::Enter, now).unwrap();
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.state().snake(), &[Cell::new(160, 160)]);
    assert_eq!(game.state().score(), 0);

    now += TICK;
    assert!(game.update(now).is_some());
    assert_eq!(game.state().head().x, 180);
    assert_eq!(game.state().head().y, 160);
}

use macroquad::color::Color;
use macroquad::math::Rect;

use crate::config::Difficulty;
use crate::model::GameState;
use crate::surface::{Overlay, RenderSurface, TextStyle};

pub const SNAKE_COLOR: Color = Color::new(0.0, 0.5, 0.0, 1.0);
pub const FOOD_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const INK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const PAPER: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.5);

pub const BORDER_WIDTH: f32 = 2.0;

const SCORE_STYLE: TextStyle = TextStyle {
    size: 20.0,
    color: INK,
};
const BANNER_STYLE: TextStyle = TextStyle {
    size: 24.0,
    color: PAPER,
};
const HINT_STYLE: TextStyle = TextStyle {
    size: 18.0,
    color: PAPER,
};

/// One frame: clear, border, snake, food, score. Always in that order.
pub fn draw_frame<S: RenderSurface>(surface: &mut S, state: &GameState) {
    let config = state.config();
    let (w, h) = (config.width as f32, config.height as f32);
    let pitch = config.pitch as f32;

    surface.clear(Rect::new(0.0, 0.0, w, h));
    surface.stroke_rect(0.0, 0.0, w, h, BORDER_WIDTH, INK);

    for segment in state.snake() {
        surface.fill_rect(segment.x as f32, segment.y as f32, pitch, pitch, SNAKE_COLOR);
    }

    let food = state.food();
    surface.fill_rect(food.x as f32, food.y as f32, pitch, pitch, FOOD_COLOR);

    surface.draw_text(10.0, 20.0, &format!("Score: {}", state.score()), SCORE_STYLE);
}

/// Modal panel over the last frame announcing the final score
pub fn draw_game_over<S: RenderSurface>(surface: &mut S, width: f32, height: f32, score: u32) {
    surface.fill_rect(0.0, 0.0, width, height, SHADE);

    let y = height * 0.45;
    surface.draw_text(
        width * 0.05,
        y,
        &format!("Game Over! Your score was {}", score),
        BANNER_STYLE,
    );
    surface.draw_text(
        width * 0.05,
        y + 36.0,
        "Press Enter to play again",
        HINT_STYLE,
    );
}

/// The start prompt. It only tracks visibility; drawing happens through
/// whatever surface the frame is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartPrompt {
    visible: bool,
}

impl Default for StartPrompt {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl StartPrompt {
    pub fn draw<S: RenderSurface>(&self, surface: &mut S, width: f32, height: f32, difficulty: Difficulty) {
        if !self.visible {
            return;
        }
        surface.clear(Rect::new(0.0, 0.0, width, height));
        surface.fill_rect(0.0, height * 0.35, width, height * 0.3, SHADE);
        surface.draw_text(width * 0.12, height * 0.5, "Press any key to Start!", BANNER_STYLE);
        surface.draw_text(
            width * 0.12,
            height * 0.5 + 30.0,
            &format!("Difficulty: {}", difficulty.label()),
            HINT_STYLE,
        );
    }
}

impl Overlay for StartPrompt {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::model::{Cell, Heading};

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear(Rect),
        Fill(f32, f32, f32, f32, Color),
        Stroke(f32, f32, f32, f32),
        Text(String),
    }

    /// Surface that writes down what it was asked to draw
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub calls: Vec<DrawCall>,
    }

    impl RenderSurface for Recorder {
        fn clear(&mut self, region: Rect) {
            self.calls.push(DrawCall::Clear(region));
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.calls.push(DrawCall::Fill(x, y, w, h, color));
        }

        fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, _thickness: f32, _color: Color) {
            self.calls.push(DrawCall::Stroke(x, y, w, h));
        }

        fn draw_text(&mut self, _x: f32, _y: f32, text: &str, _style: TextStyle) {
            self.calls.push(DrawCall::Text(text.to_string()));
        }
    }

    #[test]
    fn test_frame_order() {
        let state = GameState::from_parts(
            GameConfig::default(),
            vec![Cell::new(160, 160), Cell::new(140, 160)],
            Cell::new(300, 40),
            Heading::Right,
        )
        .unwrap();

        let mut surface = Recorder::default();
        draw_frame(&mut surface, &state);

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear(Rect::new(0.0, 0.0, 400.0, 400.0)),
                DrawCall::Stroke(0.0, 0.0, 400.0, 400.0),
                DrawCall::Fill(160.0, 160.0, 20.0, 20.0, SNAKE_COLOR),
                DrawCall::Fill(140.0, 160.0, 20.0, 20.0, SNAKE_COLOR),
                DrawCall::Fill(300.0, 40.0, 20.0, 20.0, FOOD_COLOR),
                DrawCall::Text("Score: 0".to_string()),
            ]
        );
    }

    #[test]
    fn test_game_over_shows_score() {
        let mut surface = Recorder::default();
        draw_game_over(&mut surface, 400.0, 400.0, 70);
        assert!(surface
            .calls
            .contains(&DrawCall::Text("Game Over! Your score was 70".to_string())));
    }

    #[test]
    fn test_hidden_prompt_draws_nothing() {
        let mut prompt = StartPrompt::default();
        assert!(prompt.is_visible());

        let mut surface = Recorder::default();
        prompt.draw(&mut surface, 400.0, 400.0, Difficulty::Hard);
        assert!(surface
            .calls
            .contains(&DrawCall::Text("Difficulty: Hard".to_string())));

        prompt.hide();
        let mut surface = Recorder::default();
        prompt.draw(&mut surface, 400.0, 400.0, Difficulty::Hard);
        assert!(surface.calls.is_empty());
    }
}

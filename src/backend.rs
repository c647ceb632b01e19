use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};
use macroquad::color::Color;
use macroquad::math::Rect;
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::text::draw_text;
use macroquad::prelude::Conf;

use crate::audio::Tone;
use crate::error::{Result, SnakeError};
use crate::render::PAPER;
use crate::surface::{RenderSurface, SoundEffect, SoundPlayer, TextStyle};

pub fn window_conf(width: i32, height: i32) -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Draws straight to the macroquad window
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadSurface;

impl RenderSurface for MacroquadSurface {
    fn clear(&mut self, region: Rect) {
        draw_rectangle(region.x, region.y, region.w, region.h, PAPER);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color) {
        draw_rectangle_lines(x, y, w, h, thickness, color);
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) {
        draw_text(text, x, y, style.size, style.color);
    }
}

/// The two synthesized beeps, played through macroquad's audio
pub struct MacroquadSound {
    eat: Sound,
    game_over: Sound,
    volume: f32,
}

impl MacroquadSound {
    pub async fn load(volume: f32) -> Result<Self> {
        let eat = load_tone(SoundEffect::Eat).await?;
        let game_over = load_tone(SoundEffect::GameOver).await?;
        Ok(Self {
            eat,
            game_over,
            volume: volume.clamp(0.0, 1.0),
        })
    }
}

async fn load_tone(effect: SoundEffect) -> Result<Sound> {
    let wav = Tone::for_effect(effect).to_wav();
    load_sound_from_bytes(&wav)
        .await
        .map_err(|e| SnakeError::Audio(format!("{:?}: {:?}", effect, e)))
}

impl SoundPlayer for MacroquadSound {
    fn play(&mut self, effect: SoundEffect) {
        let sound = match effect {
            SoundEffect::Eat => &self.eat,
            SoundEffect::GameOver => &self.game_over,
        };
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: self.volume,
            },
        );
    }
}

/// Either the real device or nothing, picked at startup
pub enum Speaker {
    Device(MacroquadSound),
    Muted,
}

impl SoundPlayer for Speaker {
    fn play(&mut self, effect: SoundEffect) {
        match self {
            Speaker::Device(sound) => sound.play(effect),
            Speaker::Muted => {}
        }
    }
}

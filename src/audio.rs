use crate::surface::SoundEffect;

const SAMPLE_RATE: u32 = 44_100;
const BITS_PER_SAMPLE: u16 = 16;
const CHANNELS: u16 = 1;
const HEADER_LEN: usize = 44;

/// A plain sine beep, encoded as PCM16 mono WAV
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    /// 0.0..=1.0
    pub volume: f32,
}

impl Tone {
    /// The beep for each effect: short and high when eating, long and low
    /// when the game ends.
    pub fn for_effect(effect: SoundEffect) -> Self {
        match effect {
            SoundEffect::Eat => Tone {
                frequency_hz: 880.0,
                duration_secs: 0.08,
                volume: 0.6,
            },
            SoundEffect::GameOver => Tone {
                frequency_hz: 110.0,
                duration_secs: 0.3,
                volume: 0.7,
            },
        }
    }

    pub fn sample_count(&self) -> u32 {
        (self.duration_secs.max(0.0) * SAMPLE_RATE as f32) as u32
    }

    /// Encode as a complete RIFF/WAVE file
    pub fn to_wav(&self) -> Vec<u8> {
        let samples = self.sample_count();
        let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
        let data_len = samples * block_align as u32;

        let mut wav = Vec::with_capacity(HEADER_LEN + data_len as usize);
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVE");

        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
        wav.extend_from_slice(&CHANNELS.to_le_bytes());
        wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
        wav.extend_from_slice(&(SAMPLE_RATE * block_align as u32).to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());

        let amplitude = self.volume.clamp(0.0, 1.0) * 0.7 * i16::MAX as f32;
        let step = std::f32::consts::TAU * self.frequency_hz / SAMPLE_RATE as f32;
        for n in 0..samples {
            let sample = (amplitude * (step * n as f32).sin()) as i16;
            wav.extend_from_slice(&sample.to_le_bytes());
        }
        wav
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_wav_header() {
        let tone = Tone::for_effect(SoundEffect::Eat);
        let wav = tone.to_wav();

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(&wav, 24), 44_100);

        let data_len = u32_at(&wav, 40) as usize;
        assert_eq!(data_len, tone.sample_count() as usize * 2);
        assert_eq!(wav.len(), HEADER_LEN + data_len);
        assert_eq!(u32_at(&wav, 4) as usize, wav.len() - 8);
    }

    #[test]
    fn test_silent_tone_is_flat() {
        let tone = Tone {
            frequency_hz: 440.0,
            duration_secs: 0.01,
            volume: 0.0,
        };
        let wav = tone.to_wav();
        assert!(wav[HEADER_LEN..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_game_over_is_longer_and_lower() {
        let eat = Tone::for_effect(SoundEffect::Eat);
        let over = Tone::for_effect(SoundEffect::GameOver);
        assert!(over.duration_secs > eat.duration_secs);
        assert!(over.frequency_hz < eat.frequency_hz);
    }
}

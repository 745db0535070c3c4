use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};
use sdl2::Sdl;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio subsystem unavailable: {0}")]
    Subsystem(String),
    #[error("audio device unavailable: {0}")]
    Device(String),
}

/// One-shot sound effect.
#[derive(Clone, Copy, Debug)]
pub enum Cue {
    Jump,
    Win,
    Caught,
}

impl Cue {
    /// Pitch and duration of the generated square wave.
    fn shape(self) -> (f32, f32) {
        match self {
            Cue::Jump => (660.0, 0.08),
            Cue::Win => (880.0, 0.35),
            Cue::Caught => (180.0, 0.40),
        }
    }
}

const VOLUME: f32 = 0.15;

/// Square-wave generator running on the SDL audio thread. Emits silence
/// once the current cue's sample budget is spent.
struct Tone {
    sample_rate: f32,
    phase: f32,
    tone_hz: f32,
    remaining: u32,
}

impl Tone {
    fn fill(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            if self.remaining == 0 {
                *sample = 0.0;
                continue;
            }
            *sample = if self.phase < 0.5 { VOLUME } else { -VOLUME };
            self.phase = (self.phase + self.tone_hz / self.sample_rate) % 1.0;
            self.remaining -= 1;
        }
    }
}

impl AudioCallback for Tone {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        self.fill(out);
    }
}

/// Sound output as a fallible capability: when the host has no audio
/// device the game runs silently instead of refusing to start.
pub struct Audio {
    device: AudioDevice<Tone>,
    enabled: bool,
}

impl Audio {
    pub fn new(sdl: &Sdl) -> Result<Self, AudioError> {
        let subsystem = sdl.audio().map_err(AudioError::Subsystem)?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: Some(512),
        };
        let device = subsystem
            .open_playback(None, &desired, |spec| Tone {
                sample_rate: spec.freq as f32,
                phase: 0.0,
                tone_hz: 0.0,
                remaining: 0,
            })
            .map_err(AudioError::Device)?;
        device.resume();
        Ok(Self {
            device,
            enabled: true,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Master switch driven by the menu toggle. Disabling also cuts any
    /// cue currently sounding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.device.lock().remaining = 0;
        }
    }

    pub fn play(&mut self, cue: Cue) {
        if !self.enabled {
            return;
        }
        let (hz, secs) = cue.shape();
        let mut tone = self.device.lock();
        tone.tone_hz = hz;
        tone.phase = 0.0;
        tone.remaining = (secs * tone.sample_rate) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_alternates_then_falls_silent() {
        let mut tone = Tone {
            sample_rate: 8.0,
            phase: 0.0,
            tone_hz: 2.0,
            remaining: 4,
        };
        let mut out = [9.9; 8];
        tone.fill(&mut out);
        assert_eq!(&out[..4], &[VOLUME, VOLUME, -VOLUME, -VOLUME]);
        assert_eq!(&out[4..], &[0.0; 4]);
    }

    #[test]
    fn silent_tone_outputs_zeros() {
        let mut tone = Tone {
            sample_rate: 44_100.0,
            phase: 0.0,
            tone_hz: 440.0,
            remaining: 0,
        };
        let mut out = [1.0; 16];
        tone.fill(&mut out);
        assert!(out.iter().all(|&s| s == 0.0));
    }
}

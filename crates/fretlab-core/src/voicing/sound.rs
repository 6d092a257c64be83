//! Note events for the sound renderer

use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;

use super::Voicing;

/// A sounding pitch with its octave (scientific pitch notation, C4 = middle C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundingNote {
    pub pitch: PitchClass,
    pub octave: i8,
}

impl SoundingNote {
    /// MIDI note number (60 = C4)
    pub fn midi_number(&self) -> u8 {
        ((self.octave as i16 + 1) * 12 + self.pitch.index() as i16).clamp(0, 127) as u8
    }
}

/// Open-string pitches, low string first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    pub strings: [SoundingNote; 6],
}

impl Tuning {
    /// E2 A2 D3 G3 B3 E4
    pub const STANDARD: Tuning = Tuning {
        strings: [
            SoundingNote { pitch: PitchClass::E, octave: 2 },
            SoundingNote { pitch: PitchClass::A, octave: 2 },
            SoundingNote { pitch: PitchClass::D, octave: 3 },
            SoundingNote { pitch: PitchClass::G, octave: 3 },
            SoundingNote { pitch: PitchClass::B, octave: 3 },
            SoundingNote { pitch: PitchClass::E, octave: 4 },
        ],
    };

    pub fn open_pitch(&self, string: usize) -> PitchClass {
        self.strings[string].pitch
    }

    /// Pitch of `string` stopped at `fret`, carrying into the next octave
    /// on chromatic wraparound.
    pub fn note_at(&self, string: usize, fret: u8) -> SoundingNote {
        let open = self.strings[string];
        let total = open.pitch.index() as usize + fret as usize;
        SoundingNote {
            pitch: PitchClass::from_index(total),
            octave: open.octave + (total / 12) as i8,
        }
    }
}

/// Notes a voicing sounds in standard tuning, low string first, muted
/// strings skipped.
pub fn sounding_notes(voicing: &Voicing) -> Vec<SoundingNote> {
    voicing
        .string_frets()
        .iter()
        .enumerate()
        .filter(|(_, fret)| **fret >= 0)
        .map(|(string, &fret)| Tuning::STANDARD.note_at(string, fret as u8))
        .collect()
}

//! Pitch classes and interval arithmetic over the 12-tone alphabet

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FretlabError;

/// One of the 12 chromatic pitch classes.
///
/// Spelling is fixed: sharps for C#/F#, flats for Eb/Ab/Bb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    EFlat,
    E,
    F,
    FSharp,
    G,
    AFlat,
    A,
    BFlat,
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order starting at C.
    pub const ALL: [PitchClass; 12] = [
        Self::C,
        Self::CSharp,
        Self::D,
        Self::EFlat,
        Self::E,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::AFlat,
        Self::A,
        Self::BFlat,
        Self::B,
    ];

    /// Chromatic index, 0 = C.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for any index, reduced modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Move by `semitones` (either direction), wrapping within the octave.
    pub fn transpose(self, semitones: i32) -> Self {
        let idx = (self.index() as i32 + semitones).rem_euclid(12);
        Self::ALL[idx as usize]
    }

    /// Forward distance in semitones from `self` up to `other` (0-11).
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.index() + 12 - self.index()) % 12
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::EFlat => "Eb",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::AFlat => "Ab",
            Self::A => "A",
            Self::BFlat => "Bb",
            Self::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = FretlabError;

    /// Accepts either enharmonic spelling ("D#" and "Eb" both parse), with
    /// ASCII or unicode accidentals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .ok_or_else(|| FretlabError::UnknownPitch(s.to_string()))?;

        let natural: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(FretlabError::UnknownPitch(s.to_string())),
        };

        let mut offset = 0;
        for accidental in chars {
            match accidental {
                '#' | '♯' => offset += 1,
                'b' | '♭' => offset -= 1,
                _ => return Err(FretlabError::UnknownPitch(s.to_string())),
            }
        }

        Ok(Self::C.transpose(natural + offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-1), PitchClass::B);
        assert_eq!(PitchClass::A.transpose(15), PitchClass::C);
        assert_eq!(PitchClass::E.transpose(-29), PitchClass::B);
    }

    #[test]
    fn test_interval_is_forward_distance() {
        assert_eq!(PitchClass::C.interval_to(PitchClass::G), 7);
        assert_eq!(PitchClass::G.interval_to(PitchClass::C), 5);
        assert_eq!(PitchClass::D.interval_to(PitchClass::D), 0);
        for a in PitchClass::ALL {
            for b in PitchClass::ALL {
                assert_eq!(a.transpose(a.interval_to(b) as i32), b);
            }
        }
    }

    #[test]
    fn test_parse_enharmonics() {
        assert_eq!("D#".parse::<PitchClass>().unwrap(), PitchClass::EFlat);
        assert_eq!("Eb".parse::<PitchClass>().unwrap(), PitchClass::EFlat);
        assert_eq!("gb".parse::<PitchClass>().unwrap(), PitchClass::FSharp);
        assert_eq!("B♭".parse::<PitchClass>().unwrap(), PitchClass::BFlat);
        assert_eq!("Cb".parse::<PitchClass>().unwrap(), PitchClass::B);
        assert_eq!(
            "H".parse::<PitchClass>(),
            Err(FretlabError::UnknownPitch("H".to_string()))
        );
        assert!("".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_from_index_reduces() {
        assert_eq!(PitchClass::from_index(14), PitchClass::D);
        assert_eq!(PitchClass::from_index(9).name(), "A");
    }
}

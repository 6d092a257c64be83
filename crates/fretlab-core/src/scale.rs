//! Scale catalog: named seven-note interval patterns and concrete scales

use serde::{Deserialize, Serialize};

use crate::error::{FretlabError, Result};
use crate::pitch::PitchClass;

/// Registered seven-note scale patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalePattern {
    Major,
    NaturalMinor,
    HarmonicMinor,
    Dorian,
    Mixolydian,
    Phrygian,
    Lydian,
    Locrian,
    MelodicMinor,
}

/// Whether a mode borrows like a major key or like a minor key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleFamily {
    Major,
    Minor,
}

impl ScalePattern {
    pub const ALL: [ScalePattern; 9] = [
        Self::Major,
        Self::NaturalMinor,
        Self::HarmonicMinor,
        Self::Dorian,
        Self::Mixolydian,
        Self::Phrygian,
        Self::Lydian,
        Self::Locrian,
        Self::MelodicMinor,
    ];

    /// Semitones from the root for degrees 1-7
    pub fn intervals(self) -> [u8; 7] {
        match self {
            Self::Major => [0, 2, 4, 5, 7, 9, 11],
            Self::NaturalMinor => [0, 2, 3, 5, 7, 8, 10],
            Self::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
            Self::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Self::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Self::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            Self::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Self::Locrian => [0, 1, 3, 5, 6, 8, 10],
            Self::MelodicMinor => [0, 2, 3, 5, 7, 9, 11],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::NaturalMinor => "Natural Minor",
            Self::HarmonicMinor => "Harmonic Minor",
            Self::Dorian => "Dorian",
            Self::Mixolydian => "Mixolydian",
            Self::Phrygian => "Phrygian",
            Self::Lydian => "Lydian",
            Self::Locrian => "Locrian",
            Self::MelodicMinor => "Melodic Minor",
        }
    }

    /// Look up a pattern by display name. Case, spaces, hyphens and
    /// underscores are ignored; "Ionian", "Aeolian" and "Minor" are aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "ionian" => return Some(Self::Major),
            "aeolian" | "minor" => return Some(Self::NaturalMinor),
            _ => {}
        }

        Self::ALL.into_iter().find(|pattern| {
            let canonical: String = pattern
                .name()
                .chars()
                .filter(|c| *c != ' ')
                .flat_map(char::to_lowercase)
                .collect();
            canonical == key
        })
    }

    /// Major-family modes have a major third above the root.
    pub fn family(self) -> ScaleFamily {
        if self.intervals()[2] == 4 {
            ScaleFamily::Major
        } else {
            ScaleFamily::Minor
        }
    }
}

/// A concrete scale: a root plus the seven pitch classes of its pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    root: PitchClass,
    pattern: ScalePattern,
    tones: [PitchClass; 7],
}

impl Scale {
    pub fn new(root: PitchClass, pattern: ScalePattern) -> Self {
        let tones = pattern.intervals().map(|interval| root.transpose(interval as i32));
        Self { root, pattern, tones }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn pattern(&self) -> ScalePattern {
        self.pattern
    }

    pub fn intervals(&self) -> [u8; 7] {
        self.pattern.intervals()
    }

    pub fn tones(&self) -> &[PitchClass; 7] {
        &self.tones
    }

    /// Tone at a zero-based degree, wrapping past the seventh.
    pub fn degree(&self, index: usize) -> PitchClass {
        self.tones[index % 7]
    }

    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.tones.contains(&pitch)
    }

    pub fn family(&self) -> ScaleFamily {
        self.pattern.family()
    }

    /// Key label such as "C Major" or "A Natural Minor"
    pub fn key_name(&self) -> String {
        format!("{} {}", self.root, self.pattern.name())
    }
}

/// Build a scale from a root and a registered pattern name.
pub fn build_scale(root: PitchClass, pattern_name: &str) -> Result<Scale> {
    let pattern = ScalePattern::from_name(pattern_name)
        .ok_or_else(|| FretlabError::UnknownScale(pattern_name.to_string()))?;
    Ok(Scale::new(root, pattern))
}

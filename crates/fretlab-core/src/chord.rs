//! Chord values shared by the catalog and user sequences

use serde::{Deserialize, Serialize};

use crate::error::{FretlabError, Result};
use crate::pitch::PitchClass;
use crate::quality::ChordQuality;
use crate::voicing::{Voicing, synthesize_voicings};

/// Role a chord plays in the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonicFunction {
    Tonic,
    Subdominant,
    Dominant,
    /// Suspended dominant color (7sus4); pulls toward the tonic like a dominant
    Tension,
    /// Borrowed from outside the key
    Borrowed,
}

impl HarmonicFunction {
    /// Fixed lookup from a 1-indexed scale degree.
    pub fn for_degree(degree: u8) -> Self {
        match degree {
            1 | 3 | 6 => Self::Tonic,
            2 | 4 => Self::Subdominant,
            _ => Self::Dominant,
        }
    }

    pub fn is_dominant_like(self) -> bool {
        matches!(self, Self::Dominant | Self::Tension)
    }

    /// Label shown to players
    pub fn label(self) -> &'static str {
        match self {
            Self::Tonic => "Tonic",
            Self::Subdominant => "Subdominant",
            Self::Dominant => "Dominant",
            Self::Tension => "Tension",
            Self::Borrowed => "Stranger",
        }
    }
}

/// Which generator produced a catalog chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Core,
    Variation,
    Wildcard,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Core, Self::Variation, Self::Wildcard];

    pub fn name(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Variation => "Variation",
            Self::Wildcard => "Wildcard",
        }
    }
}

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Upper-case numeral for a 1-indexed scale degree.
pub fn degree_numeral(degree: u8) -> &'static str {
    NUMERALS[(degree.max(1) as usize - 1) % 7]
}

/// Roman numeral for a harmonized chord: upper case over a major third,
/// lower case otherwise, with a quality marker.
pub fn roman_numeral(degree: u8, quality: ChordQuality) -> String {
    let base = degree_numeral(degree);
    let numeral = if quality.has_major_third() {
        base.to_string()
    } else {
        base.to_lowercase()
    };

    let marker = match quality {
        ChordQuality::Dominant7 | ChordQuality::Minor7 => "7",
        ChordQuality::Major7 | ChordQuality::MinorMajor7 => "Maj7",
        ChordQuality::HalfDiminished7 => "ø",
        ChordQuality::Diminished7 => "°7",
        ChordQuality::Diminished => "°",
        ChordQuality::Unresolved { .. } => "?",
        _ => "",
    };

    format!("{numeral}{marker}")
}

/// A chord with its harmonic context and playable voicings.
///
/// Fields are read-only; edits go through [`clone_for_sequence`] and
/// [`set_active_voicing`], which return new values. Deserialized chords are
/// checked against the same invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChordRecord")]
pub struct Chord {
    root: PitchClass,
    quality: ChordQuality,
    display_name: String,
    roman_numeral: String,
    harmonic_function: HarmonicFunction,
    /// Root first, then 3rd (or suspension), 5th, extension
    tone_set: Vec<PitchClass>,
    /// 1-indexed; None for chords outside the key
    scale_degree: Option<u8>,
    is_diatonic: bool,
    category: Category,
    voicings: Vec<Voicing>,
    active_voicing: usize,
}

/// Serialized form of [`Chord`], validated before conversion
#[derive(Deserialize)]
struct ChordRecord {
    root: PitchClass,
    quality: ChordQuality,
    display_name: String,
    roman_numeral: String,
    harmonic_function: HarmonicFunction,
    tone_set: Vec<PitchClass>,
    scale_degree: Option<u8>,
    is_diatonic: bool,
    category: Category,
    voicings: Vec<Voicing>,
    active_voicing: usize,
}

impl TryFrom<ChordRecord> for Chord {
    type Error = FretlabError;

    fn try_from(record: ChordRecord) -> Result<Self> {
        if record.voicings.is_empty() {
            return Err(FretlabError::InvalidChord(format!(
                "{} has no voicings",
                record.display_name
            )));
        }
        if record.active_voicing >= record.voicings.len() {
            return Err(FretlabError::InvalidChord(format!(
                "{} selects voicing {} of {}",
                record.display_name,
                record.active_voicing,
                record.voicings.len()
            )));
        }
        if record.tone_set.first() != Some(&record.root)
            || record.tone_set.len() != record.quality.tone_count()
        {
            return Err(FretlabError::InvalidChord(format!(
                "{} tones {:?} do not match {:?}",
                record.display_name, record.tone_set, record.quality
            )));
        }

        Ok(Self {
            root: record.root,
            quality: record.quality,
            display_name: record.display_name,
            roman_numeral: record.roman_numeral,
            harmonic_function: record.harmonic_function,
            tone_set: record.tone_set,
            scale_degree: record.scale_degree,
            is_diatonic: record.is_diatonic,
            category: record.category,
            voicings: record.voicings,
            active_voicing: record.active_voicing,
        })
    }
}

impl Chord {
    /// Build a chord and attach its voicings. Tones come from the quality so
    /// the tone set always matches it.
    pub(crate) fn new(
        root: PitchClass,
        quality: ChordQuality,
        roman_numeral: String,
        harmonic_function: HarmonicFunction,
        scale_degree: Option<u8>,
        is_diatonic: bool,
        category: Category,
    ) -> Self {
        let tone_set = quality
            .intervals()
            .into_iter()
            .map(|interval| root.transpose(interval as i32))
            .collect();

        Self {
            root,
            quality,
            display_name: format!("{}{}", root, quality.suffix()),
            roman_numeral,
            harmonic_function,
            tone_set,
            scale_degree,
            is_diatonic,
            category,
            voicings: synthesize_voicings(root, quality),
            active_voicing: 0,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn roman_numeral(&self) -> &str {
        &self.roman_numeral
    }

    pub fn harmonic_function(&self) -> HarmonicFunction {
        self.harmonic_function
    }

    pub fn tone_set(&self) -> &[PitchClass] {
        &self.tone_set
    }

    pub fn scale_degree(&self) -> Option<u8> {
        self.scale_degree
    }

    pub fn is_diatonic(&self) -> bool {
        self.is_diatonic
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn voicings(&self) -> &[Voicing] {
        &self.voicings
    }

    pub fn active_voicing_index(&self) -> usize {
        self.active_voicing
    }

    pub fn active_voicing(&self) -> &Voicing {
        &self.voicings[self.active_voicing]
    }

    /// Pitch classes the voicings are built from: the tone set, or the
    /// fallback family's tones for an unresolved quality.
    pub fn voicing_tones(&self) -> Vec<PitchClass> {
        if !self.quality.is_unresolved() {
            return self.tone_set.clone();
        }
        self.quality
            .triad_family()
            .unwrap_or(ChordQuality::Major)
            .intervals()
            .into_iter()
            .map(|interval| self.root.transpose(interval as i32))
            .collect()
    }
}

/// Copy a chord for placement in a sequence, starting on its first voicing.
pub fn clone_for_sequence(chord: &Chord) -> Chord {
    Chord {
        active_voicing: 0,
        ..chord.clone()
    }
}

/// Return a copy of `chord` with a different active voicing.
pub fn set_active_voicing(chord: &Chord, index: usize) -> Result<Chord> {
    if index >= chord.voicings.len() {
        return Err(FretlabError::IndexOutOfRange {
            index,
            len: chord.voicings.len(),
        });
    }
    Ok(Chord {
        active_voicing: index,
        ..chord.clone()
    })
}

/// Return a copy of `chord` advanced to its next voicing, wrapping around.
pub fn cycle_voicing(chord: &Chord) -> Chord {
    Chord {
        active_voicing: (chord.active_voicing + 1) % chord.voicings.len(),
        ..chord.clone()
    }
}

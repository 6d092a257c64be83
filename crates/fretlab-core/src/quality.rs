//! Chord quality tags and the interval classifier

use serde::{Deserialize, Serialize};

/// Chord quality.
///
/// `Unresolved` keeps the raw intervals of a stack the classifier has no
/// name for, so the voicing fallback and tone count can still be derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Dominant7,
    Major7,
    Minor7,
    MinorMajor7,
    HalfDiminished7,
    Diminished7,
    Sus2,
    Sus4,
    Add9,
    Six,
    SevenSus4,
    Unresolved {
        third: u8,
        fifth: u8,
        seventh: Option<u8>,
    },
}

/// Classify a stacked chord from the intervals of its 3rd, 5th and optional
/// 7th above the root. Only the stacks reachable from the scale catalog are
/// named; everything else is `Unresolved`.
pub fn classify(third: u8, fifth: u8, seventh: Option<u8>) -> ChordQuality {
    match (third, fifth, seventh) {
        (4, 7, Some(11)) => ChordQuality::Major7,
        (4, 7, Some(10)) => ChordQuality::Dominant7,
        (3, 7, Some(10)) => ChordQuality::Minor7,
        (3, 7, Some(11)) => ChordQuality::MinorMajor7,
        (3, 6, Some(10)) => ChordQuality::HalfDiminished7,
        (3, 6, Some(9)) => ChordQuality::Diminished7,
        (4, 7, None) => ChordQuality::Major,
        (3, 7, None) => ChordQuality::Minor,
        (3, 6, None) => ChordQuality::Diminished,
        _ => ChordQuality::Unresolved { third, fifth, seventh },
    }
}

impl ChordQuality {
    /// Semitone offsets of the chord tones from the root, in tone-set order
    /// (root, 3rd or suspension, 5th, extension).
    pub fn intervals(self) -> Vec<u8> {
        match self {
            Self::Major => vec![0, 4, 7],
            Self::Minor => vec![0, 3, 7],
            Self::Diminished => vec![0, 3, 6],
            Self::Dominant7 => vec![0, 4, 7, 10],
            Self::Major7 => vec![0, 4, 7, 11],
            Self::Minor7 => vec![0, 3, 7, 10],
            Self::MinorMajor7 => vec![0, 3, 7, 11],
            Self::HalfDiminished7 => vec![0, 3, 6, 10],
            Self::Diminished7 => vec![0, 3, 6, 9],
            Self::Sus2 => vec![0, 2, 7],
            Self::Sus4 => vec![0, 5, 7],
            Self::Add9 => vec![0, 4, 7, 2],
            Self::Six => vec![0, 4, 7, 9],
            Self::SevenSus4 => vec![0, 5, 7, 10],
            Self::Unresolved { third, fifth, seventh } => {
                let mut intervals = vec![0, third, fifth];
                intervals.extend(seventh);
                intervals
            }
        }
    }

    pub fn tone_count(self) -> usize {
        match self {
            Self::Major | Self::Minor | Self::Diminished | Self::Sus2 | Self::Sus4 => 3,
            Self::Unresolved { seventh: None, .. } => 3,
            _ => 4,
        }
    }

    /// Suffix appended to the root name ("m", "maj7", "7sus4", ...)
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Diminished => "dim",
            Self::Dominant7 => "7",
            Self::Major7 => "maj7",
            Self::Minor7 => "m7",
            Self::MinorMajor7 => "m(maj7)",
            Self::HalfDiminished7 => "m7b5",
            Self::Diminished7 => "dim7",
            Self::Sus2 => "sus2",
            Self::Sus4 => "sus4",
            Self::Add9 => "add9",
            Self::Six => "6",
            Self::SevenSus4 => "7sus4",
            Self::Unresolved { .. } => "(?)",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Diminished => "Diminished",
            Self::Dominant7 => "Dominant 7",
            Self::Major7 => "Major 7",
            Self::Minor7 => "Minor 7",
            Self::MinorMajor7 => "Minor-Major 7",
            Self::HalfDiminished7 => "Half-Diminished 7",
            Self::Diminished7 => "Diminished 7",
            Self::Sus2 => "Sus2",
            Self::Sus4 => "Sus4",
            Self::Add9 => "Add9",
            Self::Six => "6",
            Self::SevenSus4 => "7sus4",
            Self::Unresolved { .. } => "Unresolved",
        }
    }

    /// True when the chord has a major third above the root.
    pub fn has_major_third(self) -> bool {
        self.intervals().get(1) == Some(&4)
    }

    /// Strip to the bare triad family (major, minor or diminished), if one
    /// can be read off the 3rd and 5th.
    pub fn triad_family(self) -> Option<ChordQuality> {
        match self {
            Self::Major | Self::Dominant7 | Self::Major7 | Self::Add9 | Self::Six => {
                Some(Self::Major)
            }
            Self::Minor | Self::Minor7 | Self::MinorMajor7 => Some(Self::Minor),
            Self::Diminished | Self::HalfDiminished7 | Self::Diminished7 => Some(Self::Diminished),
            Self::Sus2 | Self::Sus4 | Self::SevenSus4 => None,
            Self::Unresolved { third, fifth, .. } => match (third, fifth) {
                (3, 6) => Some(Self::Diminished),
                (3, _) => Some(Self::Minor),
                (4, _) => Some(Self::Major),
                _ => None,
            },
        }
    }

    pub fn is_unresolved(self) -> bool {
        matches!(self, Self::Unresolved { .. })
    }
}

//! Borrowed ("wildcard") chords from parallel modes

use crate::chord::{Category, Chord, HarmonicFunction};
use crate::quality::ChordQuality;
use crate::scale::{Scale, ScaleFamily};

/// A borrowed chord: semitones above the key root, quality and numeral
struct Borrowing {
    offset: i32,
    quality: ChordQuality,
    numeral: &'static str,
}

static MAJOR_KEY_BORROWINGS: [Borrowing; 4] = [
    Borrowing { offset: 10, quality: ChordQuality::Major, numeral: "♭VII" },
    Borrowing { offset: 3, quality: ChordQuality::Major, numeral: "♭III" },
    Borrowing { offset: 5, quality: ChordQuality::Minor, numeral: "iv" },
    Borrowing { offset: 8, quality: ChordQuality::Major, numeral: "♭VI" },
];

static MINOR_KEY_BORROWINGS: [Borrowing; 3] = [
    // Major dominant from harmonic minor
    Borrowing { offset: 7, quality: ChordQuality::Major, numeral: "V" },
    // Raised sixth from Dorian
    Borrowing { offset: 5, quality: ChordQuality::Major, numeral: "IV" },
    // Neapolitan
    Borrowing { offset: 1, quality: ChordQuality::Major, numeral: "♭II" },
];

/// Modal-interchange chords for the key. Depends only on whether the mode
/// is major- or minor-flavored, never on style.
pub fn wildcards(scale: &Scale) -> Vec<Chord> {
    let borrowings: &[Borrowing] = match scale.family() {
        ScaleFamily::Major => &MAJOR_KEY_BORROWINGS[..],
        ScaleFamily::Minor => &MINOR_KEY_BORROWINGS[..],
    };

    borrowings
        .iter()
        .map(|borrowing| {
            Chord::new(
                scale.root().transpose(borrowing.offset),
                borrowing.quality,
                borrowing.numeral.to_string(),
                HarmonicFunction::Borrowed,
                None,
                false,
                Category::Wildcard,
            )
        })
        .collect()
}

//! Fixed fret-offset tables for movable chord shapes
//!
//! Offsets are listed low E string first. `X` marks a muted string.
//! Barre shapes are relative to a barre at fret 0 with the root on the
//! anchor string; inversion shapes are relative to the bass note's fret and
//! may reach below it.

use crate::quality::ChordQuality;

pub(super) const X: i8 = i8::MIN;

/// Low E (6th) string
pub(super) const LOW_E: usize = 0;
/// A (5th) string
pub(super) const A_STRING: usize = 1;

/// E-shape (root on the 6th string) and A-shape (root on the 5th string)
pub(super) struct BarreShapes {
    pub e_shape: [i8; 6],
    pub a_shape: [i8; 6],
}

pub(super) struct InversionShape {
    pub label: &'static str,
    /// Chord tone in the bass, as semitones above the root
    pub bass_interval: u8,
    pub anchor: usize,
    pub offsets: [i8; 6],
}

pub(super) static MAJOR: BarreShapes = BarreShapes {
    e_shape: [0, 2, 2, 1, 0, 0],
    a_shape: [X, 0, 2, 2, 2, 0],
};

static MINOR: BarreShapes = BarreShapes {
    e_shape: [0, 2, 2, 0, 0, 0],
    a_shape: [X, 0, 2, 2, 1, 0],
};

static DIMINISHED: BarreShapes = BarreShapes {
    e_shape: [0, 1, 2, 0, X, X],
    a_shape: [X, 0, 1, 2, 1, X],
};

static DOMINANT7: BarreShapes = BarreShapes {
    e_shape: [0, 2, 0, 1, 0, 0],
    a_shape: [X, 0, 2, 0, 2, 0],
};

static MAJOR7: BarreShapes = BarreShapes {
    e_shape: [0, X, 1, 1, 0, X],
    a_shape: [X, 0, 2, 1, 2, 0],
};

static MINOR7: BarreShapes = BarreShapes {
    e_shape: [0, 2, 0, 0, 0, 0],
    a_shape: [X, 0, 2, 0, 1, 0],
};

static MINOR_MAJOR7: BarreShapes = BarreShapes {
    e_shape: [0, 2, 1, 0, 0, 0],
    a_shape: [X, 0, 2, 1, 1, 0],
};

static HALF_DIMINISHED7: BarreShapes = BarreShapes {
    e_shape: [0, 1, 0, 0, X, X],
    a_shape: [X, 0, 1, 0, 1, X],
};

static DIMINISHED7: BarreShapes = BarreShapes {
    e_shape: [0, 1, 2, 0, 2, 0],
    a_shape: [X, 0, 1, 2, 1, 2],
};

static SUS2: BarreShapes = BarreShapes {
    e_shape: [0, 2, 4, 4, X, X],
    a_shape: [X, 0, 2, 2, 0, 0],
};

static SUS4: BarreShapes = BarreShapes {
    e_shape: [0, 2, 2, 2, 0, 0],
    a_shape: [X, 0, 2, 2, 3, 0],
};

static ADD9: BarreShapes = BarreShapes {
    e_shape: [0, 2, 2, 1, 0, 2],
    a_shape: [X, 0, 2, 4, 2, 0],
};

static SIX: BarreShapes = BarreShapes {
    e_shape: [0, 2, 2, 1, 2, 0],
    a_shape: [X, 0, 2, 2, 2, 2],
};

static SEVEN_SUS4: BarreShapes = BarreShapes {
    e_shape: [0, 2, 0, 2, 0, 0],
    a_shape: [X, 0, 2, 0, 3, 0],
};

static MAJOR_INVERSIONS: [InversionShape; 3] = [
    InversionShape {
        label: "1st inversion, bass on 6th string",
        bass_interval: 4,
        anchor: LOW_E,
        offsets: [0, 3, 2, 0, 1, 0],
    },
    InversionShape {
        label: "1st inversion, bass on 5th string",
        bass_interval: 4,
        anchor: A_STRING,
        offsets: [X, 0, -2, -2, -2, X],
    },
    InversionShape {
        label: "2nd inversion, bass on 6th string",
        bass_interval: 7,
        anchor: LOW_E,
        offsets: [0, 0, -1, -3, -2, -3],
    },
];

static MINOR_INVERSIONS: [InversionShape; 2] = [
    InversionShape {
        label: "1st inversion, bass on 6th string",
        bass_interval: 3,
        anchor: LOW_E,
        offsets: [0, X, 2, 1, 2, 0],
    },
    InversionShape {
        label: "1st inversion, bass on 5th string",
        bass_interval: 3,
        anchor: A_STRING,
        offsets: [X, 0, -1, -1, -2, X],
    },
];

/// Barre shapes for a quality; `None` for qualities without a template.
pub(super) fn barre_shapes(quality: ChordQuality) -> Option<&'static BarreShapes> {
    let shapes = match quality {
        ChordQuality::Major => &MAJOR,
        ChordQuality::Minor => &MINOR,
        ChordQuality::Diminished => &DIMINISHED,
        ChordQuality::Dominant7 => &DOMINANT7,
        ChordQuality::Major7 => &MAJOR7,
        ChordQuality::Minor7 => &MINOR7,
        ChordQuality::MinorMajor7 => &MINOR_MAJOR7,
        ChordQuality::HalfDiminished7 => &HALF_DIMINISHED7,
        ChordQuality::Diminished7 => &DIMINISHED7,
        ChordQuality::Sus2 => &SUS2,
        ChordQuality::Sus4 => &SUS4,
        ChordQuality::Add9 => &ADD9,
        ChordQuality::Six => &SIX,
        ChordQuality::SevenSus4 => &SEVEN_SUS4,
        ChordQuality::Unresolved { .. } => return None,
    };
    Some(shapes)
}

/// Inversion shapes; only plain major and minor triads have any.
pub(super) fn inversion_shapes(quality: ChordQuality) -> &'static [InversionShape] {
    match quality {
        ChordQuality::Major => &MAJOR_INVERSIONS[..],
        ChordQuality::Minor => &MINOR_INVERSIONS[..],
        _ => &[],
    }
}

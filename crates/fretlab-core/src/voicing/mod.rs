//! Guitar voicing synthesis from movable shape templates

mod shapes;
mod sound;

pub use sound::{SoundingNote, Tuning, sounding_notes};

use serde::{Deserialize, Serialize};

use crate::error::FretlabError;
use crate::pitch::PitchClass;
use crate::quality::ChordQuality;

use shapes::{A_STRING, BarreShapes, InversionShape, LOW_E, X};

/// Fret value for a string that is not played
pub const MUTED: i8 = -1;

/// Highest fret a barre shape may start above before it is folded down an octave
const FOLD_THRESHOLD: i8 = 12;

/// A fingering on a six-string guitar. At least one string always sounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VoicingRecord")]
pub struct Voicing {
    label: String,
    /// Low E string first; -1 muted, 0 open
    string_frets: [i8; 6],
    /// First fret of the diagram window (never below 1)
    display_base_fret: u8,
}

/// Serialized form of [`Voicing`]; the display base fret is recomputed
#[derive(Deserialize)]
struct VoicingRecord {
    label: String,
    string_frets: [i8; 6],
}

impl TryFrom<VoicingRecord> for Voicing {
    type Error = FretlabError;

    fn try_from(record: VoicingRecord) -> Result<Self, Self::Error> {
        let frets = record.string_frets;
        if frets.iter().any(|&f| f < MUTED) {
            return Err(FretlabError::InvalidVoicing(format!("{:?} has a fret below the nut", frets)));
        }
        if frets.iter().all(|&f| f == MUTED) {
            return Err(FretlabError::InvalidVoicing(format!("{:?} mutes every string", frets)));
        }
        Ok(Self::new(record.label, frets))
    }
}

impl Voicing {
    pub(crate) fn new(label: impl Into<String>, string_frets: [i8; 6]) -> Self {
        let lowest = string_frets.iter().copied().filter(|&f| f >= 0).min().unwrap_or(0);
        Self {
            label: label.into(),
            string_frets,
            display_base_fret: lowest.max(1) as u8,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn string_frets(&self) -> &[i8; 6] {
        &self.string_frets
    }

    pub fn display_base_fret(&self) -> u8 {
        self.display_base_fret
    }

    /// Pitch class of each sounding string in standard tuning, low first
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        sounding_notes(self).into_iter().map(|note| note.pitch).collect()
    }
}

/// Synthesize playable voicings for a chord. Never returns an empty list:
/// a quality without its own template borrows its triad family's shapes,
/// then the major shapes.
///
/// Order: E-shape, A-shape, then any inversions that fit on the neck.
pub fn synthesize_voicings(root: PitchClass, quality: ChordQuality) -> Vec<Voicing> {
    let shapes = shape_family(quality);

    let mut voicings = vec![
        barre_voicing(root, &shapes.e_shape, LOW_E, "E-shape"),
        barre_voicing(root, &shapes.a_shape, A_STRING, "A-shape"),
    ];

    voicings.extend(
        shapes::inversion_shapes(quality)
            .iter()
            .filter_map(|shape| inversion_voicing(root, shape)),
    );

    voicings
}

fn shape_family(quality: ChordQuality) -> &'static BarreShapes {
    if let Some(shapes) = shapes::barre_shapes(quality) {
        return shapes;
    }

    let family = quality
        .triad_family()
        .filter(|family| shapes::barre_shapes(*family).is_some())
        .unwrap_or(ChordQuality::Major);
    tracing::debug!("No shape template for {:?}, using {:?} shapes", quality, family);

    shapes::barre_shapes(family).unwrap_or(&shapes::MAJOR)
}

/// Shift a barre template so its anchor string sounds `root`.
fn barre_voicing(root: PitchClass, template: &[i8; 6], anchor: usize, shape: &str) -> Voicing {
    let mut shift = Tuning::STANDARD.open_pitch(anchor).interval_to(root) as i8;
    let mut frets = shift_template(template, shift);

    let lowest = frets.iter().copied().filter(|&f| f >= 0).min().unwrap_or(0);
    if lowest > FOLD_THRESHOLD && template[anchor] + shift > FOLD_THRESHOLD {
        shift -= 12;
        frets = shift_template(template, shift);
    }

    let open = shift == 0 && frets.iter().all(|&f| f <= 4);
    let label = if open {
        format!("Open position ({shape})")
    } else {
        format!("Barre at fret {shift} ({shape})")
    };

    Voicing::new(label, frets)
}

/// Place an inversion shape so its bass string sounds the chosen chord
/// tone. Shapes that would need a fret below the nut are dropped.
fn inversion_voicing(root: PitchClass, shape: &InversionShape) -> Option<Voicing> {
    let bass = root.transpose(shape.bass_interval as i32);
    let bass_fret = Tuning::STANDARD.open_pitch(shape.anchor).interval_to(bass) as i8;

    let frets = shift_template(&shape.offsets, bass_fret);
    let playable = shape
        .offsets
        .iter()
        .zip(frets)
        .all(|(&offset, fret)| offset == X || fret >= 0);

    if !playable {
        tracing::trace!("Skipping {} for {}: below the nut", shape.label, root);
        return None;
    }

    Some(Voicing::new(format!("{} ({bass} bass)", shape.label), frets))
}

fn shift_template(template: &[i8; 6], shift: i8) -> [i8; 6] {
    template.map(|offset| if offset == X { MUTED } else { offset + shift })
}

//! Diatonic harmonization of a scale into Core chords

use crate::chord::{Category, Chord, HarmonicFunction, roman_numeral};
use crate::quality::{ChordQuality, classify};
use crate::scale::Scale;
use crate::style::Style;

/// Degrees (1-indexed) that blues turns into dominant sevenths
const BLUES_DOMINANT_DEGREES: [u8; 3] = [1, 4, 5];

/// Stack thirds on each of the seven scale degrees.
///
/// Pop and Folk keep triads, Jazz keeps the diatonic seventh, Blues forces
/// I, IV and V to dominant sevenths and leaves the rest as triads.
pub fn harmonize(scale: &Scale, style: Style) -> Vec<Chord> {
    (0..7).map(|index| harmonize_degree(scale, index, style)).collect()
}

fn harmonize_degree(scale: &Scale, index: usize, style: Style) -> Chord {
    let degree = index as u8 + 1;
    let root = scale.degree(index);
    let third = root.interval_to(scale.degree(index + 2));
    let fifth = root.interval_to(scale.degree(index + 4));
    let seventh = root.interval_to(scale.degree(index + 6));

    let (quality, function) = match style {
        Style::Blues if BLUES_DOMINANT_DEGREES.contains(&degree) => {
            let function = match degree {
                4 => HarmonicFunction::Subdominant,
                5 => HarmonicFunction::Dominant,
                _ => HarmonicFunction::for_degree(degree),
            };
            (ChordQuality::Dominant7, function)
        }
        Style::Jazz => (classify(third, fifth, Some(seventh)), HarmonicFunction::for_degree(degree)),
        _ => (classify(third, fifth, None), HarmonicFunction::for_degree(degree)),
    };

    if quality.is_unresolved() {
        tracing::debug!(
            "Degree {} of {} stacks to unresolved intervals {:?}",
            degree,
            scale.key_name(),
            quality.intervals()
        );
    }

    Chord::new(
        root,
        quality,
        roman_numeral(degree, quality),
        function,
        Some(degree),
        true,
        Category::Core,
    )
}

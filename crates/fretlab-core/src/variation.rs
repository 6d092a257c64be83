//! Suspended and added-tone siblings of Core chords

use crate::chord::{Category, Chord, HarmonicFunction, degree_numeral};
use crate::quality::ChordQuality;
use crate::scale::Scale;
use crate::style::Style;

/// Emit the "spice" siblings of every eligible Core chord, parent by parent.
///
/// Major and dominant-seventh parents get sus4 and sus2, plus add9 in
/// Pop/Folk. Major parents also get a 6, dominant parents a 7sus4.
pub fn variations(core: &[Chord], scale: &Scale, style: Style) -> Vec<Chord> {
    core.iter()
        .filter(|chord| chord.category() == Category::Core)
        .flat_map(|parent| siblings(parent, scale, style))
        .collect()
}

fn sibling_qualities(parent: ChordQuality, style: Style) -> Vec<ChordQuality> {
    let mut qualities = match parent {
        ChordQuality::Major | ChordQuality::Dominant7 => vec![ChordQuality::Sus4, ChordQuality::Sus2],
        _ => return Vec::new(),
    };

    if style.is_triadic() {
        qualities.push(ChordQuality::Add9);
    }

    match parent {
        ChordQuality::Major => qualities.push(ChordQuality::Six),
        ChordQuality::Dominant7 => qualities.push(ChordQuality::SevenSus4),
        _ => {}
    }

    qualities
}

fn siblings(parent: &Chord, scale: &Scale, style: Style) -> Vec<Chord> {
    let Some(degree) = parent.scale_degree() else {
        return Vec::new();
    };

    sibling_qualities(parent.quality(), style)
        .into_iter()
        .map(|quality| {
            let function = if quality == ChordQuality::SevenSus4 {
                HarmonicFunction::Tension
            } else {
                parent.harmonic_function()
            };
            let numeral = format!("{}{}", degree_numeral(degree), quality.suffix());
            let in_key = quality
                .intervals()
                .into_iter()
                .all(|interval| scale.contains(parent.root().transpose(interval as i32)));

            Chord::new(
                parent.root(),
                quality,
                numeral,
                function,
                Some(degree),
                in_key,
                Category::Variation,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmonizer::harmonize;
    use crate::pitch::PitchClass::*;
    use crate::scale::build_scale;

    #[test]
    fn test_c_major_pop_variations() {
        let scale = build_scale(C, "Major").unwrap();
        let core = harmonize(&scale, Style::Pop);
        let spice = variations(&core, &scale, Style::Pop);

        // C, F and G each get sus4, sus2, add9 and 6
        assert_eq!(spice.len(), 12);
        let on_c: Vec<&str> = spice
            .iter()
            .filter(|c| c.root() == C)
            .map(|c| c.display_name())
            .collect();
        assert_eq!(on_c, vec!["Csus4", "Csus2", "Cadd9", "C6"]);

        let csus4 = &spice[0];
        assert_eq!(csus4.tone_set(), &[C, F, G]);
        assert_eq!(csus4.roman_numeral(), "Isus4");
        assert_eq!(csus4.category(), Category::Variation);
        assert_eq!(csus4.harmonic_function(), HarmonicFunction::Tonic);
        assert!(csus4.is_diatonic());

        let cadd9 = &spice[2];
        assert_eq!(cadd9.tone_set(), &[C, E, G, D]);
        assert_eq!(cadd9.roman_numeral(), "Iadd9");
    }

    #[test]
    fn test_out_of_key_sibling_is_not_diatonic() {
        let scale = build_scale(C, "Major").unwrap();
        let core = harmonize(&scale, Style::Pop);
        let spice = variations(&core, &scale, Style::Pop);
        // Fsus4 needs Bb
        let fsus4 = spice.iter().find(|c| c.display_name() == "Fsus4").unwrap();
        assert!(!fsus4.is_diatonic());
    }

    #[test]
    fn test_blues_dominants_get_seven_sus4() {
        let scale = build_scale(C, "Major").unwrap();
        let core = harmonize(&scale, Style::Blues);
        let spice = variations(&core, &scale, Style::Blues);

        let names: Vec<&str> = spice.iter().map(|c| c.display_name()).collect();
        assert_eq!(
            names,
            vec!["Csus4", "Csus2", "C7sus4", "Fsus4", "Fsus2", "F7sus4", "Gsus4", "Gsus2", "G7sus4"]
        );

        let g7sus4 = &spice[8];
        assert_eq!(g7sus4.harmonic_function(), HarmonicFunction::Tension);
        assert_eq!(g7sus4.roman_numeral(), "V7sus4");
        assert_eq!(g7sus4.tone_set(), &[G, C, D, F]);
    }

    #[test]
    fn test_jazz_has_no_plain_major_parents() {
        let scale = build_scale(C, "Major").unwrap();
        let core = harmonize(&scale, Style::Jazz);
        let spice = variations(&core, &scale, Style::Jazz);
        // Only G7 qualifies: sus4, sus2, 7sus4 (no add9 outside Pop/Folk)
        let names: Vec<&str> = spice.iter().map(|c| c.display_name()).collect();
        assert_eq!(names, vec!["Gsus4", "Gsus2", "G7sus4"]);
    }

    #[test]
    fn test_minor_chords_are_skipped() {
        let scale = build_scale(A, "Natural Minor").unwrap();
        let core = harmonize(&scale, Style::Folk);
        let spice = variations(&core, &scale, Style::Folk);
        assert!(spice.iter().all(|c| [C, F, G].contains(&c.root())));
        assert!(spice.iter().all(|c| !c.voicings().is_empty()));
    }
}

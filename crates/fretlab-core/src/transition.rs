//! Labels for the move between adjacent chords in a progression

use serde::{Deserialize, Serialize};

use crate::chord::{Category, Chord, HarmonicFunction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    Resolution,
    TensionBuild,
    Surprise,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub kind: TransitionKind,
    pub label: String,
}

impl Transition {
    fn new(kind: TransitionKind, label: &str) -> Self {
        Self { kind, label: label.to_string() }
    }
}

/// Classify the move from `prev` to `next`. Order matters.
pub fn classify_transition(prev: &Chord, next: &Chord) -> Transition {
    use HarmonicFunction::*;

    let from = prev.harmonic_function();
    let to = next.harmonic_function();

    if next.category() == Category::Wildcard {
        return Transition::new(TransitionKind::Surprise, "Surprise");
    }

    match (from, to) {
        (f, Tonic) if f.is_dominant_like() => Transition::new(TransitionKind::Resolution, "Resolution"),
        (Tonic, t) if t.is_dominant_like() => Transition::new(TransitionKind::TensionBuild, "Tension build"),
        (Subdominant, t) if t.is_dominant_like() => Transition::new(TransitionKind::TensionBuild, "Push"),
        _ => Transition::new(TransitionKind::Neutral, "Neutral"),
    }
}

/// Transitions between consecutive chords; one fewer than the chords given.
pub fn transitions(chords: &[Chord]) -> Vec<Transition> {
    chords
        .windows(2)
        .map(|pair| classify_transition(&pair[0], &pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmonizer::harmonize;
    use crate::pitch::PitchClass::*;
    use crate::scale::build_scale;
    use crate::style::Style;
    use crate::variation::variations;
    use crate::wildcard::wildcards;

    fn c_major_core() -> Vec<Chord> {
        harmonize(&build_scale(C, "Major").unwrap(), Style::Pop)
    }

    #[test]
    fn test_dominant_to_tonic_resolves() {
        let core = c_major_core();
        let t = classify_transition(&core[4], &core[0]);
        assert_eq!(t.kind, TransitionKind::Resolution);
        assert_eq!(t.label, "Resolution");
    }

    #[test]
    fn test_order_sensitive() {
        let core = c_major_core();
        let forward = classify_transition(&core[0], &core[4]);
        let backward = classify_transition(&core[4], &core[0]);
        assert_eq!(forward.kind, TransitionKind::TensionBuild);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_subdominant_push() {
        let core = c_major_core();
        let t = classify_transition(&core[3], &core[4]);
        assert_eq!(t.kind, TransitionKind::TensionBuild);
        assert_eq!(t.label, "Push");
    }

    #[test]
    fn test_wildcard_is_surprise() {
        let scale = build_scale(C, "Major").unwrap();
        let core = c_major_core();
        let borrowed = wildcards(&scale);
        for prev in &core {
            assert_eq!(classify_transition(prev, &borrowed[0]).kind, TransitionKind::Surprise);
        }
        // Leaving a wildcard is not itself a surprise
        assert_eq!(classify_transition(&borrowed[0], &core[0]).kind, TransitionKind::Neutral);
    }

    #[test]
    fn test_seven_sus4_resolves_like_a_dominant() {
        let scale = build_scale(C, "Major").unwrap();
        let core = harmonize(&scale, Style::Blues);
        let spice = variations(&core, &scale, Style::Blues);
        let g7sus4 = spice.iter().find(|c| c.display_name() == "G7sus4").unwrap();
        assert_eq!(classify_transition(g7sus4, &core[0]).kind, TransitionKind::Resolution);
    }

    #[test]
    fn test_sequence_transitions() {
        let core = c_major_core();
        let progression = vec![core[0].clone(), core[5].clone(), core[3].clone(), core[4].clone(), core[0].clone()];
        let kinds: Vec<TransitionKind> = transitions(&progression).into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransitionKind::Neutral,
                TransitionKind::Neutral,
                TransitionKind::TensionBuild,
                TransitionKind::Resolution,
            ]
        );
        assert!(transitions(&progression[..1]).is_empty());
        assert!(transitions(&[]).is_empty());
    }
}

//! The full chord catalog for a key and style

use crate::chord::{Category, Chord};
use crate::error::Result;
use crate::harmonizer::harmonize;
use crate::pitch::PitchClass;
use crate::scale::{Scale, ScalePattern, build_scale};
use crate::style::Style;
use crate::variation::variations;
use crate::wildcard::wildcards;

/// Core chords, then their variations, then borrowed chords.
pub fn generate_chord_catalog(root: PitchClass, pattern_name: &str, style: Style) -> Result<Vec<Chord>> {
    let scale = build_scale(root, pattern_name)?;
    Ok(catalog_for_scale(&scale, style))
}

pub fn catalog_for_scale(scale: &Scale, style: Style) -> Vec<Chord> {
    let core = harmonize(scale, style);
    let spice = variations(&core, scale, style);
    let borrowed = wildcards(scale);
    tracing::debug!(
        "Built catalog for {} ({}): {} core, {} variations, {} wildcards",
        scale.key_name(),
        style,
        core.len(),
        spice.len(),
        borrowed.len()
    );

    let mut catalog = core;
    catalog.extend(spice);
    catalog.extend(borrowed);
    catalog
}

/// Catalog chords split by category, in `Category::ALL` order
pub fn group_by_category(catalog: &[Chord]) -> Vec<(Category, Vec<&Chord>)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let chords = catalog.iter().filter(|c| c.category() == category).collect();
            (category, chords)
        })
        .collect()
}

/// Find a catalog chord by display name ("Am7") or Roman numeral ("vi7").
pub fn find_chord<'a>(catalog: &'a [Chord], name: &str) -> Option<&'a Chord> {
    catalog
        .iter()
        .find(|c| c.display_name() == name)
        .or_else(|| catalog.iter().find(|c| c.roman_numeral() == name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CatalogKey {
    root: PitchClass,
    pattern: ScalePattern,
    style: Style,
}

/// Remembers the most recent catalog and rebuilds only when the
/// (root, scale, style) selection changes.
#[derive(Debug, Default)]
pub struct CatalogCache {
    current: Option<(CatalogKey, Vec<Chord>)>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, root: PitchClass, pattern_name: &str, style: Style) -> Result<&[Chord]> {
        let scale = build_scale(root, pattern_name)?;
        let key = CatalogKey { root, pattern: scale.pattern(), style };

        let stale = self.current.as_ref().is_none_or(|(cached, _)| *cached != key);
        if stale {
            tracing::debug!("Catalog cache miss for {:?}", key);
            self.current = Some((key, catalog_for_scale(&scale, style)));
        }

        Ok(self.current.as_ref().map(|(_, chords)| chords.as_slice()).unwrap_or_default())
    }

    pub fn invalidate(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{HarmonicFunction, clone_for_sequence, set_active_voicing};
    use crate::error::FretlabError;
    use crate::pitch::PitchClass::*;
    use crate::quality::ChordQuality;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_order_and_counts() {
        let catalog = generate_chord_catalog(C, "Major", Style::Pop).unwrap();
        let grouped = group_by_category(&catalog);
        let counts: Vec<(Category, usize)> = grouped.iter().map(|(c, v)| (*c, v.len())).collect();
        assert_eq!(
            counts,
            vec![(Category::Core, 7), (Category::Variation, 12), (Category::Wildcard, 4)]
        );
        assert_eq!(catalog.len(), 23);
    }

    #[test]
    fn test_degree_one_of_c_major_pop() {
        let catalog = generate_chord_catalog(C, "Major", Style::Pop).unwrap();
        let tonic = catalog
            .iter()
            .find(|c| c.category() == Category::Core && c.scale_degree() == Some(1))
            .unwrap();
        assert_eq!(tonic.quality(), ChordQuality::Major);
        assert_eq!(tonic.roman_numeral(), "I");
        assert_eq!(tonic.harmonic_function(), HarmonicFunction::Tonic);
        assert_eq!(tonic.tone_set(), &[C, E, G]);
    }

    #[test]
    fn test_blues_degree_four() {
        let catalog = generate_chord_catalog(C, "Major", Style::Blues).unwrap();
        let four = catalog
            .iter()
            .find(|c| c.category() == Category::Core && c.scale_degree() == Some(4))
            .unwrap();
        assert_eq!(four.quality(), ChordQuality::Dominant7);
        assert_eq!(four.tone_set(), &[F, A, C, EFlat]);
    }

    #[test]
    fn test_flat_seven_wildcard() {
        let catalog = generate_chord_catalog(C, "Major", Style::Jazz).unwrap();
        assert!(catalog.iter().any(|c| c.root() == BFlat
            && c.category() == Category::Wildcard
            && c.harmonic_function() == HarmonicFunction::Borrowed));
    }

    #[test]
    fn test_unknown_scale_fails_whole_catalog() {
        assert_eq!(
            generate_chord_catalog(C, "Bebop", Style::Pop),
            Err(FretlabError::UnknownScale("Bebop".to_string()))
        );
    }

    #[test]
    fn test_idempotent() {
        for style in Style::ALL {
            let first = generate_chord_catalog(E, "Harmonic Minor", style).unwrap();
            let second = generate_chord_catalog(E, "Harmonic Minor", style).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_every_voicing_plays_chord_tones() {
        for root in PitchClass::ALL {
            for pattern in ScalePattern::ALL {
                for style in Style::ALL {
                    let catalog = generate_chord_catalog(root, pattern.name(), style).unwrap();
                    for chord in &catalog {
                        assert!(!chord.voicings().is_empty());
                        assert!(chord.active_voicing_index() < chord.voicings().len());
                        let tones = chord.voicing_tones();
                        if !chord.quality().is_unresolved() {
                            assert_eq!(tones, chord.tone_set());
                        }
                        for voicing in chord.voicings() {
                            for pitch in voicing.pitch_classes() {
                                assert!(
                                    tones.contains(&pitch),
                                    "{} in {} {}: {} plays {}",
                                    chord.display_name(),
                                    root,
                                    pattern.name(),
                                    voicing.label(),
                                    pitch
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_sequence_copies_never_touch_catalog() {
        let catalog = generate_chord_catalog(G, "Major", Style::Pop).unwrap();
        let template = &catalog[0];
        let copy = clone_for_sequence(template);
        let changed = set_active_voicing(&copy, 1).unwrap();
        assert_eq!(changed.active_voicing_index(), 1);
        assert_eq!(template.active_voicing_index(), 0);
        assert_eq!(catalog, generate_chord_catalog(G, "Major", Style::Pop).unwrap());
    }

    #[test]
    fn test_find_chord() {
        let catalog = generate_chord_catalog(C, "Major", Style::Jazz).unwrap();
        assert_eq!(find_chord(&catalog, "G7").unwrap().roman_numeral(), "V7");
        assert_eq!(find_chord(&catalog, "ii7").unwrap().display_name(), "Dm7");
        assert!(find_chord(&catalog, "C#").is_none());
    }

    #[test]
    fn test_cache_rebuilds_on_key_change() {
        let mut cache = CatalogCache::new();
        let first = cache.get(C, "Major", Style::Pop).unwrap().to_vec();
        assert_eq!(cache.get(C, "ionian", Style::Pop).unwrap(), first.as_slice());

        let jazz = cache.get(C, "Major", Style::Jazz).unwrap();
        assert_eq!(jazz[0].display_name(), "Cmaj7");

        assert!(cache.get(C, "Nope", Style::Jazz).is_err());
        // A failed lookup leaves the previous entry in place
        assert_eq!(cache.get(C, "Major", Style::Jazz).unwrap()[0].display_name(), "Cmaj7");

        cache.invalidate();
        assert_eq!(cache.get(D, "Dorian", Style::Folk).unwrap()[0].display_name(), "Dm");
    }
}

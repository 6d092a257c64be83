//! fretlab-core: Scale harmonization and guitar voicing engine

pub mod catalog;
pub mod chord;
mod error;
pub mod harmonizer;
pub mod pitch;
pub mod quality;
pub mod scale;
pub mod sequence;
mod style;
pub mod transition;
pub mod variation;
pub mod voicing;
pub mod wildcard;

pub use catalog::{CatalogCache, catalog_for_scale, find_chord, generate_chord_catalog, group_by_category};
pub use chord::{Category, Chord, HarmonicFunction, clone_for_sequence, cycle_voicing, set_active_voicing};
pub use error::{FretlabError, Result};
pub use harmonizer::harmonize;
pub use pitch::PitchClass;
pub use quality::{ChordQuality, classify};
pub use scale::{Scale, ScaleFamily, ScalePattern, build_scale};
pub use sequence::{AnnotationContext, Sequence};
pub use style::Style;
pub use transition::{Transition, TransitionKind, classify_transition, transitions};
pub use variation::variations;
pub use voicing::{MUTED, SoundingNote, Tuning, Voicing, sounding_notes, synthesize_voicings};
pub use wildcard::wildcards;

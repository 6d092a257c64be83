//! A user's progression and the context handed to an annotator

use serde::{Deserialize, Serialize};

use crate::chord::{Chord, clone_for_sequence, set_active_voicing};
use crate::error::{FretlabError, Result};
use crate::scale::Scale;
use crate::style::Style;
use crate::transition::{Transition, transitions};

/// Ordered chord copies. Every insert stores a fresh copy, so catalog
/// templates are never shared with the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    chords: Vec<Chord>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `chord`, starting on its first voicing.
    pub fn add(&mut self, chord: &Chord) {
        tracing::debug!("Adding {} to sequence", chord.display_name());
        self.chords.push(clone_for_sequence(chord));
    }

    pub fn remove(&mut self, index: usize) -> Option<Chord> {
        if index < self.chords.len() {
            return Some(self.chords.remove(index));
        }
        None
    }

    /// Swap the chord at `index` for a copy using voicing `voicing`.
    /// Out-of-range positions or voicings leave the sequence unchanged.
    pub fn set_active_voicing(&mut self, index: usize, voicing: usize) -> Result<()> {
        let len = self.chords.len();
        let chord = self
            .chords
            .get(index)
            .ok_or(FretlabError::PositionOutOfRange { index, len })?;
        let updated = set_active_voicing(chord, voicing)?;
        self.chords[index] = updated;
        Ok(())
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn clear(&mut self) {
        self.chords.clear();
    }

    /// Transition into each chord after the first
    pub fn transitions(&self) -> Vec<Transition> {
        transitions(&self.chords)
    }

    pub fn annotation_context(&self, scale: &Scale, style: Style) -> AnnotationContext {
        AnnotationContext {
            key: scale.key_name(),
            style,
            chords: self.chords.iter().map(|c| c.display_name().to_string()).collect(),
            numerals: self.chords.iter().map(|c| c.roman_numeral().to_string()).collect(),
        }
    }
}

/// Plain data for a text annotator: the key, the style and the chords in
/// order. Formatting of any commentary is up to the annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationContext {
    pub key: String,
    pub style: Style,
    pub chords: Vec<String>,
    pub numerals: Vec<String>,
}

//! Plain-text rendering of chords and voicings

use fretlab_core::{Chord, MUTED, SoundingNote, Transition, Voicing};

/// Strings as labelled on a chord box, low E first
const STRING_NAMES: [&str; 6] = ["E", "A", "D", "G", "B", "e"];

/// Minimum number of fret rows drawn in a box diagram
const WINDOW_FRETS: i8 = 4;

/// Compact fret notation, e.g. "x02210" or "8-10-10-9-8-8"
pub fn tab(voicing: &Voicing) -> String {
    let frets = voicing.string_frets();
    let symbols: Vec<String> = frets
        .iter()
        .map(|&f| if f == MUTED { "x".to_string() } else { f.to_string() })
        .collect();

    if frets.iter().any(|&f| f > 9) {
        symbols.join("-")
    } else {
        symbols.concat()
    }
}

/// Vertical chord box starting at the voicing's display base fret
pub fn diagram(voicing: &Voicing) -> String {
    let frets = voicing.string_frets();
    let base = voicing.display_base_fret() as i8;
    let highest = frets.iter().copied().max().unwrap_or(0);
    let rows = WINDOW_FRETS.max(highest - base + 1);

    let mut out = String::new();
    out.push_str("    ");
    out.push_str(&STRING_NAMES.join(" "));
    out.push('\n');

    out.push_str("    ");
    let markers: Vec<&str> = frets
        .iter()
        .map(|&f| match f {
            MUTED => "x",
            0 => "o",
            _ => " ",
        })
        .collect();
    out.push_str(markers.join(" ").trim_end());
    out.push('\n');

    for row in 0..rows {
        let fret = base + row;
        let cells: Vec<&str> = frets.iter().map(|&f| if f == fret { "●" } else { "|" }).collect();
        out.push_str(&format!("{fret:>2}  {}\n", cells.join(" ")));
    }

    out
}

pub fn chord_line(chord: &Chord) -> String {
    let tones: Vec<&str> = chord.tone_set().iter().map(|p| p.name()).collect();
    format!(
        "{:<8}{:<10}{:<13}{}",
        chord.roman_numeral(),
        chord.display_name(),
        chord.harmonic_function().label(),
        tones.join(" ")
    )
}

pub fn voicing_line(voicing: &Voicing, active: bool) -> String {
    let marker = if active { "*" } else { " " };
    format!("   {marker} {:<18}{}", tab(voicing), voicing.label())
}

pub fn transition_line(transition: Option<&Transition>, chord: &Chord) -> String {
    let arrow = transition.map_or(String::from("start"), |t| format!("-> {}", t.label));
    format!("{:<16}{:<10}{}", arrow, chord.display_name(), chord.roman_numeral())
}

pub fn note_line(note: &SoundingNote) -> String {
    format!("{}{} (midi {})", note.pitch, note.octave, note.midi_number())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fretlab_core::{ChordQuality, PitchClass, synthesize_voicings};

    fn open_a_minor() -> Voicing {
        synthesize_voicings(PitchClass::A, ChordQuality::Minor).remove(1)
    }

    fn barre_a_minor() -> Voicing {
        synthesize_voicings(PitchClass::A, ChordQuality::Minor).remove(0)
    }

    #[test]
    fn test_tab() {
        assert_eq!(tab(&open_a_minor()), "x02210");
        let c_barre = synthesize_voicings(PitchClass::C, ChordQuality::Major).remove(0);
        assert_eq!(tab(&c_barre), "8-10-10-9-8-8");
    }

    #[test]
    fn test_open_diagram() {
        let text = diagram(&open_a_minor());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    E A D G B e");
        assert_eq!(lines[1], "    x o       o");
        assert_eq!(lines[2], " 1  | | | | ● |");
        assert_eq!(lines[3], " 2  | | ● ● | |");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_barre_diagram_starts_at_base_fret() {
        let text = diagram(&barre_a_minor());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], " 5  ● | | ● ● ●");
        assert_eq!(lines[4], " 7  | ● ● | | |");
    }
}

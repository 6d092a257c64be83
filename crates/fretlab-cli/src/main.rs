//! fretlab: explore scales, chords and guitar voicings from the terminal

mod config;
mod render;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use fretlab_core::{
    Category, Chord, PitchClass, Scale, Sequence, Style, build_scale, find_chord,
    generate_chord_catalog, group_by_category, set_active_voicing, sounding_notes,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;

#[derive(Parser)]
#[command(name = "fretlab", version, about = "Scale harmonization and guitar voicings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every chord for a key, grouped by category
    Catalog {
        #[command(flatten)]
        key: KeyArgs,
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the tones of a scale
    Scale {
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Build a progression from chord names or numerals and label its moves
    Progression {
        /// Chords by display name ("Am") or numeral ("vi")
        #[arg(required = true)]
        chords: Vec<String>,
        #[command(flatten)]
        key: KeyArgs,
        /// Print the annotator context and transitions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the sounding notes and fret diagram of one voicing
    Notes {
        chord: String,
        /// Voicing index (0 = first)
        #[arg(long, default_value_t = 0)]
        voicing: usize,
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Show the config file, or write the defaults with --init
    Config {
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args)]
struct KeyArgs {
    /// Root pitch, e.g. C, F#, Bb
    #[arg(long)]
    root: Option<String>,
    /// Scale name, e.g. "Major", "Dorian", "Harmonic Minor"
    #[arg(long)]
    scale: Option<String>,
    /// Pop, Folk, Jazz or Blues
    #[arg(long)]
    style: Option<String>,
}

/// Key selection after merging command line and config defaults
struct Selection {
    scale: Scale,
    style: Style,
}

impl KeyArgs {
    fn resolve(&self, config: &AppConfig) -> anyhow::Result<Selection> {
        let root_name = self.root.as_deref().unwrap_or(&config.defaults.root);
        let scale_name = self.scale.as_deref().unwrap_or(&config.defaults.scale);
        let style_name = self.style.as_deref().unwrap_or(&config.defaults.style);

        let root: PitchClass = root_name.parse()?;
        let scale = build_scale(root, scale_name)?;
        let style: Style = style_name.parse()?;
        Ok(Selection { scale, style })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fretlab_cli=info,fretlab_core=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::load_config();

    match cli.command {
        Command::Catalog { key, json } => {
            let selection = key.resolve(&config)?;
            print_catalog(&selection, &config, json || config.display.json)
        }
        Command::Scale { key } => {
            let selection = key.resolve(&config)?;
            let tones: Vec<&str> = selection.scale.tones().iter().map(|p| p.name()).collect();
            println!("{}: {}", selection.scale.key_name(), tones.join(" "));
            Ok(())
        }
        Command::Progression { chords, key, json } => {
            let selection = key.resolve(&config)?;
            print_progression(&selection, &chords, json || config.display.json)
        }
        Command::Notes { chord, voicing, key } => {
            let selection = key.resolve(&config)?;
            print_notes(&selection, &chord, voicing)
        }
        Command::Config { init } => {
            if init {
                let path = config::save_config(&AppConfig::default())?;
                tracing::info!("Wrote default config to {}", path.display());
            } else {
                println!("# {}", config::config_path().display());
                print!("{}", toml::to_string_pretty(&config).context("serializing config")?);
            }
            Ok(())
        }
    }
}

fn catalog_for(selection: &Selection) -> anyhow::Result<Vec<Chord>> {
    let scale = &selection.scale;
    Ok(generate_chord_catalog(scale.root(), scale.pattern().name(), selection.style)?)
}

fn lookup<'a>(catalog: &'a [Chord], name: &str, selection: &Selection) -> anyhow::Result<&'a Chord> {
    match find_chord(catalog, name) {
        Some(chord) => Ok(chord),
        None => bail!(
            "No chord named {:?} in {} ({})",
            name,
            selection.scale.key_name(),
            selection.style
        ),
    }
}

fn print_catalog(selection: &Selection, config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let catalog = catalog_for(selection)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("{} · {}", selection.scale.key_name(), selection.style);
    for (category, chords) in group_by_category(&catalog) {
        let heading = match category {
            Category::Wildcard => "Wildcards (borrowed)",
            Category::Variation => "Variations",
            Category::Core => "Core",
        };
        println!("\n== {heading} ==");
        for chord in chords {
            println!("{}", render::chord_line(chord));
            for (i, voicing) in chord.voicings().iter().enumerate() {
                if !config.display.show_inversions && voicing.label().contains("inversion") {
                    continue;
                }
                println!("{}", render::voicing_line(voicing, i == chord.active_voicing_index()));
            }
        }
    }
    Ok(())
}

fn print_progression(selection: &Selection, names: &[String], json: bool) -> anyhow::Result<()> {
    let catalog = catalog_for(selection)?;
    let mut sequence = Sequence::new();
    for name in names {
        sequence.add(lookup(&catalog, name, selection)?);
    }

    let transitions = sequence.transitions();
    if json {
        let context = sequence.annotation_context(&selection.scale, selection.style);
        let out = serde_json::json!({
            "context": context,
            "transitions": transitions,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (i, chord) in sequence.chords().iter().enumerate() {
        let into = i.checked_sub(1).and_then(|prev| transitions.get(prev));
        println!("{}", render::transition_line(into, chord));
    }
    Ok(())
}

fn print_notes(selection: &Selection, name: &str, index: usize) -> anyhow::Result<()> {
    let catalog = catalog_for(selection)?;
    let chord = set_active_voicing(lookup(&catalog, name, selection)?, index)?;
    let voicing = chord.active_voicing();

    println!("{} ({}): {}", chord.display_name(), chord.roman_numeral(), voicing.label());
    print!("{}", render::diagram(voicing));
    for note in sounding_notes(voicing) {
        println!("  {}", render::note_line(&note));
    }
    Ok(())
}

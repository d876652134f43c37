//! kinetic: generate one circular sequence and print it.
//!
//! Defaults come from ~/.kinetic/generator.yaml; flags override them. Uses the
//! reference collaborators, so every beat is drawn from the full move grid.

use clap::Parser;

use kinetic::generator::{
    GenerationOutcome, GeneratorConfig, PermutationType, PropContinuity, RotationType,
};
use kinetic::pictograph::{Beat, GridMode, Level, MirrorAxis, Sequence, SequenceMetadata};
use kinetic::reference::reference_builder;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Beats in the finished sequence
    #[arg(short, long)]
    length: Option<usize>,

    /// Level 1 (no turns), 2 (whole turns) or 3 (half turns and floats)
    #[arg(long)]
    level: Option<Level>,

    /// Maximum turns per hand per beat
    #[arg(short = 't', long = "turns")]
    turn_intensity: Option<f64>,

    /// quartered or halved
    #[arg(short, long)]
    rotation: Option<RotationType>,

    /// rotated or mirrored
    #[arg(short, long)]
    permutation: Option<PermutationType>,

    /// continuous or random prop spin
    #[arg(long)]
    continuity: Option<PropContinuity>,

    /// Mirror across the horizontal axis instead of the vertical one
    #[arg(long)]
    horizontal: bool,

    /// Swap hands in mirrored permutations
    #[arg(long)]
    color_swap: bool,

    /// Start on the box grid instead of the diamond grid
    #[arg(long = "box")]
    box_grid: bool,

    /// RNG seed
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(t) = self.turn_intensity {
            config.turn_intensity = t;
        }
        if let Some(r) = self.rotation {
            config.rotation_type = r;
        }
        if let Some(p) = self.permutation {
            config.permutation_type = p;
        }
        if let Some(c) = self.continuity {
            config.prop_continuity = c;
        }
        if self.horizontal {
            config.mirror_axis = MirrorAxis::Horizontal;
        }
        if self.color_swap {
            config.color_swap = true;
        }
        if self.box_grid {
            config.grid_mode = GridMode::Box;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

fn print_beat(beat: &Beat) {
    println!(
        "{:>3} {:<2} {:>8} -> {:<8} | blue {:<6} {:>3} {:<7} -> {:<7} \
         | red {:<6} {:>3} {:<7} -> {:<7}",
        beat.beat_number,
        beat.letter,
        beat.start_position.to_string(),
        beat.end_position.to_string(),
        beat.blue.motion_type.to_string(),
        beat.blue.turns.to_string(),
        beat.blue.start_orientation.to_string(),
        beat.blue.end_orientation.to_string(),
        beat.red.motion_type.to_string(),
        beat.red.turns.to_string(),
        beat.red.start_orientation.to_string(),
        beat.red.end_orientation.to_string(),
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Args::parse().apply(GeneratorConfig::load());
    let request = config.request();

    println!(
        "kinetic v{}: {} beats, level {}, {} {}, seed {}",
        env!("CARGO_PKG_VERSION"),
        request.length,
        request.level,
        request.rotation_type,
        request.permutation_type,
        config.seed
    );

    let mut builder = reference_builder(&config);
    let mut sequence = Sequence::new(SequenceMetadata {
        author: "kinetic".to_string(),
        ..Default::default()
    });

    let outcome = match builder.build_sequence(&mut sequence, &request) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("generation failed: {e}");
            std::process::exit(1);
        }
    };

    if let Some(start) = sequence.start() {
        print_beat(start);
    }
    for beat in sequence.beats() {
        print_beat(beat);
    }

    match outcome {
        GenerationOutcome::Extended { added } => println!(
            "word {} closed by permutation (+{added} beats), circular: {}",
            sequence.metadata.word, sequence.metadata.is_circular
        ),
        GenerationOutcome::WordOnly => println!(
            "word {} did not close; permutation skipped",
            sequence.metadata.word
        ),
    }
}

pub mod commands;

use anyhow::{Context, Result};
use cframes::{RoleDetector, SentenceDisplay};
use cframes_framenet::{JsonCorpus, PrecomputedParses};
use cframes_lexicon::Lexicon;
use cframes_pipeline::{frame_counts, frames_per_verb, histogram_lines, run_mapping, MappingConfig};
use clap::Parser;
use commands::{Commands, DetectArgs, MapArgs, StatsArgs};

/// Map Connotation Frame roles onto FrameNet frame elements.
#[derive(Parser, Debug)]
#[command(name = "cframes", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Map(args) => run_map(args),
            Commands::Detect(args) => run_detect(args),
            Commands::Stats(args) => run_stats(args),
        }
    }
}

fn run_map(args: MapArgs) -> Result<()> {
    let mut config = MappingConfig::load(&args.config)?;
    config.override_policies(args.span_policy, args.align_policy);

    let lexicon = Lexicon::load(&args.lexicon)?;
    let corpus = JsonCorpus::load(&args.corpus)?;
    let parses = PrecomputedParses::load(&args.parses)?;

    let (records, path) = run_mapping(&config, &lexicon, &corpus, &parses, &args.name)?;

    for record in &records {
        println!("{}", record);
    }
    tracing::info!(path = %path.display(), "stored mapping records");
    Ok(())
}

fn run_detect(args: DetectArgs) -> Result<()> {
    let parses = PrecomputedParses::load(&args.parses)
        .with_context(|| format!("reading parses for '{}'", args.lemma))?;
    let detector = RoleDetector::with_policy(args.span_policy);

    let mut sentences: Vec<_> = parses.iter().collect();
    sentences.sort_by(|a, b| a.text.cmp(&b.text));

    let mut shown = 0;
    for sentence in sentences {
        let detections = detector.detect(sentence, &args.lemma);
        if detections.is_empty() {
            continue;
        }
        println!("{}\n", SentenceDisplay::new(sentence).with_detections(&detections));
        shown += 1;
    }

    if shown == 0 {
        println!("No subject or object of '{}' found.", args.lemma);
    }
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let lexicon = Lexicon::load(&args.lexicon)?;
    let corpus = JsonCorpus::load(&args.corpus)?;

    let histogram = frames_per_verb(&frame_counts(&lexicon, &corpus));
    for line in histogram_lines(&histogram) {
        println!("{}", line);
    }
    Ok(())
}

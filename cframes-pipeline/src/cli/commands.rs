use cframes::{AlignPolicy, SpanPolicy};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map Connotation Frame roles onto FrameNet frame elements
    Map(MapArgs),

    /// Show detected subjects and objects of a lemma in parsed sentences
    Detect(DetectArgs),

    /// Print how many frames each lexicon verb evokes
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
pub struct MapArgs {
    /// Connotation Frame lexicon file
    #[arg(long)]
    pub lexicon: PathBuf,

    /// FrameNet corpus exported as JSON
    #[arg(long)]
    pub corpus: PathBuf,

    /// Precomputed parses of the example sentences (.json or .conllu)
    #[arg(long)]
    pub parses: PathBuf,

    /// TOML configuration; defaults are used if the file does not exist
    #[arg(long, default_value = "cframes.toml")]
    pub config: PathBuf,

    /// Object name the mapping records are stored under
    #[arg(long, default_value = "mapping_records")]
    pub name: String,

    /// Override the configured span policy (naive, short, long)
    #[arg(long)]
    pub span_policy: Option<SpanPolicy>,

    /// Override the configured align policy (exact, shared-boundary, contained, substring)
    #[arg(long)]
    pub align_policy: Option<AlignPolicy>,
}

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Parsed sentences (.json or .conllu)
    #[arg(long)]
    pub parses: PathBuf,

    /// Lemma of the governing verb
    #[arg(long)]
    pub lemma: String,

    /// How detected tokens are widened (naive, short, long)
    #[arg(long, default_value = "short")]
    pub span_policy: SpanPolicy,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Connotation Frame lexicon file
    #[arg(long)]
    pub lexicon: PathBuf,

    /// FrameNet corpus exported as JSON
    #[arg(long)]
    pub corpus: PathBuf,
}

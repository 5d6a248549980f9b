use std::path::PathBuf;

use clap::Parser;
use nafham_config::DiacriticPolicy;
use nafham_types::SearchDirection;

/// English/Arabic phrasebook lookup
#[derive(Debug, Parser)]
#[command(name = "nafham", version)]
pub struct Args {
    /// JSON config file; replaces the built-in defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra phrase files merged after the embedded set
    #[arg(short, long = "phrases", value_name = "FILE")]
    pub phrases: Vec<String>,

    /// Skip the embedded phrase set
    #[arg(long)]
    pub no_embedded: bool,

    /// Search direction: en-ar or ar-en
    #[arg(short, long)]
    pub direction: Option<SearchDirection>,

    /// Which combining marks to ignore: all, arabic, latin or keep
    #[arg(long)]
    pub diacritics: Option<DiacriticPolicy>,

    /// Run a single search and exit
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print one-shot results as JSON
    #[arg(long, requires = "query")]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

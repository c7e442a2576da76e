//! CLI command definitions

use clap::{Parser, ValueEnum};
use dialectic_domain::DatasetName;
use std::path::PathBuf;

/// Dataset to run the debate over
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetArg {
    /// Ambiguous questions with several valid answers
    Ambigdocs,
    /// Counterfactual or conflicting context
    Faitheval,
    /// Mixed ambiguity, misinformation and noise
    Ramdocs,
}

impl From<DatasetArg> for DatasetName {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Ambigdocs => DatasetName::AmbigDocs,
            DatasetArg::Faitheval => DatasetName::FaithEval,
            DatasetArg::Ramdocs => DatasetName::RamDocs,
        }
    }
}

/// CLI arguments for dialectic-rag
#[derive(Parser, Debug)]
#[command(name = "dialectic-rag")]
#[command(author, version, about = "Structured multi-agent debate over retrieved documents")]
#[command(long_about = r#"
dialectic-rag answers each query of a prepared dataset through a four-phase
debate between role-playing personas:

1. Thesis: one Proponent per document answers from that document alone
2a. Antithesis: a Devil's Advocate challenges the theses against all documents
2b. Rebuttal: each challenged Proponent defends, concedes or reconciles
3. Synthesis: an Aggregator-Judge reads the transcript and gives the answer

Input:  <data_dir>/<dataset>_test_prepared.jsonl
Output: <results_dir>/<dataset>_results_<timestamp>.jsonl

Configuration files are loaded from (in priority order):
1. DIALECTIC_* environment variables
2. --config <path>       Explicit config file
3. ./dialectic.toml      Project-level config
4. ~/.config/dialectic-rag/config.toml   Global config

Example:
  dialectic-rag --dataset ambigdocs
  dialectic-rag --dataset ramdocs --seat-concurrency 4 -v
"#)]
pub struct Cli {
    /// Dataset to process
    #[arg(long, value_enum, required_unless_present = "show_config")]
    pub dataset: Option<DatasetArg>,

    /// Directory holding prepared datasets (overrides config)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory for results and logs (overrides config)
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Seat calls in flight per phase (overrides config)
    #[arg(long, value_name = "N")]
    pub seat_concurrency: Option<usize>,

    /// Debates in flight per batch (overrides config)
    #[arg(long, value_name = "N")]
    pub debate_concurrency: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_is_required() {
        assert!(Cli::try_parse_from(["dialectic-rag"]).is_err());
        assert!(Cli::try_parse_from(["dialectic-rag", "--dataset", "squad"]).is_err());
    }

    #[test]
    fn test_show_config_alone() {
        let cli = Cli::try_parse_from(["dialectic-rag", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.dataset.is_none());
    }

    #[test]
    fn test_full_invocation() {
        let cli = Cli::try_parse_from([
            "dialectic-rag",
            "--dataset",
            "faitheval",
            "--results-dir",
            "out",
            "--seat-concurrency",
            "4",
            "-vv",
            "-q",
        ])
        .unwrap();

        assert_eq!(cli.dataset, Some(DatasetArg::Faitheval));
        assert_eq!(DatasetName::from(DatasetArg::Faitheval), DatasetName::FaithEval);
        assert_eq!(cli.results_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.seat_concurrency, Some(4));
        assert!(cli.debate_concurrency.is_none());
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }
}

use anyhow::Result;
use boolir_core::config::{DEFAULT_MAX_RESULTS, DEFAULT_RUN_LABEL};
use boolir_core::persist::write_results;
use boolir_core::RetrievalConfig;
use clap::{Args, Parser, Subcommand};
use retriever::{run_batches, search_once};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "retriever")]
#[command(about = "Boolean title/tag retrieval producing TREC run files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RunOpts {
    /// Label written in the last column of every run line
    #[arg(long, default_value = DEFAULT_RUN_LABEL)]
    run_label: String,
    /// Maximum results kept per query
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,
}

impl From<RunOpts> for RetrievalConfig {
    fn from(opts: RunOpts) -> Self { RetrievalConfig::new(opts.run_label).with_max_results(opts.max_results) }
}

#[derive(Subcommand)]
enum Commands {
    /// Index the answers and write one run file per topics input
    Run {
        /// Answers corpus (JSON/JSONL file or directory)
        #[arg(long)]
        answers: PathBuf,
        /// Topics inputs; repeat for several batches
        #[arg(long, required = true)]
        topics: Vec<PathBuf>,
        /// Directory for result_binary_<n>.tsv files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Evaluate one query and print its run lines
    Search {
        #[arg(long)]
        answers: PathBuf,
        /// Title text; its terms are ANDed
        #[arg(long)]
        title: String,
        /// Tags; their terms are ORed
        #[arg(long)]
        tags: Vec<String>,
        #[command(flatten)]
        opts: RunOpts,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { answers, topics, output_dir, opts } => {
            for path in run_batches(&answers, &topics, &output_dir, opts.into())? {
                tracing::info!(path = %path.display(), "wrote run file");
            }
            Ok(())
        }
        Commands::Search { answers, title, tags, opts } => {
            let entries = search_once(&answers, &title, tags, opts.into())?;
            write_results(std::io::stdout().lock(), &entries)
        }
    }
}

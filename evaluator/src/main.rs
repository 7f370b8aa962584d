use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "evaluator")]
#[command(about = "Rank judged corpora by cosine similarity and score retrieval quality", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a judged corpus and write the ranked report
    Run {
        /// Input path (file or directory)
        #[arg(long)]
        input: PathBuf,
        /// Output report file
        #[arg(long, default_value = "results.txt")]
        output: PathBuf,
        /// Also dump the full result as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, output, json } => {
            let result = evaluator::run(&input, &output, json.as_deref())?;
            println!("MRR={}", result.score);
            Ok(())
        }
    }
}

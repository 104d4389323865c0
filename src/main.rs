//! FastFaidx CLI entry point
//!
//! Builds `.fai` indexes for one or more FASTA files; independent files are
//! indexed in parallel, each by its own sequential pipeline.

use clap::Parser;
use fast_faidx::index_fasta;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fast-faidx")]
#[command(about = "High-performance FASTA random-access indexer")]
#[command(version)]
#[command(author = "FastFaidx Contributors")]
struct Cli {
    /// FASTA files to index (each gets a sibling <file>.fai)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of threads for indexing multiple files
    #[arg(short = 't', long, default_value = "1")]
    threads: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create thread pool: {}", e))?;

    let total = cli.inputs.len();
    let results: Vec<_> = pool.install(|| {
        cli.inputs
            .par_iter()
            .map(|path| (path.clone(), index_fasta(path)))
            .collect()
    });

    let mut indexed = 0usize;
    let mut failed = 0usize;
    for (path, result) in results {
        match result {
            Ok(records) => {
                indexed += 1;
                eprintln!("{}: {} sequences indexed", path.display(), records.len());
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}", e);
            }
        }
    }

    eprintln!("\n=== Indexing Statistics ===");
    eprintln!("Total files:     {}", total);
    eprintln!("Indexed:         {}", indexed);
    eprintln!("Failed:          {}", failed);
    eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());

    if failed > 0 {
        anyhow::bail!("{} of {} files could not be indexed", failed, total);
    }
    Ok(())
}

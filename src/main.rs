use clap::Parser;
use std::path::PathBuf;

mod diagnostics;
mod dispatch;
mod error;
mod log;
mod render;
mod textio;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "alloc-bench-csv")]
#[command(about = "Convert allocator benchmark logs to CSV", long_about = None)]
struct Cli {
    /// Output mode: `csv` (one combined table) or `csv-dir` (one table per section).
    /// An output path without an extension always gets one table per section.
    mode: String,

    /// Benchmark log to read.
    log: PathBuf,

    /// Output CSV file, or directory for per-section tables.
    out: PathBuf,

    /// Name of the section the log's records are grouped under.
    #[arg(long, default_value = log::DEFAULT_SECTION)]
    section: String,

    /// Do not print the paths of written files.
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alloc_bench_csv=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let args = dispatch::RunArgs {
        mode: cli.mode,
        log: cli.log,
        out: cli.out,
        section: cli.section,
    };

    match dispatch::run(&args)? {
        dispatch::RunOutcome::Written(paths) => {
            if !cli.quiet {
                for p in paths {
                    println!("Wrote {}", p.display());
                }
            }
        }
        // Already reported on stderr; not a failure.
        dispatch::RunOutcome::Rejected(e) => tracing::debug!(%e, "nothing written"),
    }

    Ok(())
}

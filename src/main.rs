// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up diagnostic logging (stderr)
// 3. Crawl the website and extract every page's content
// 4. Write the results to a JSON file
// 5. Exit with proper code (0 = success, 2 = error)
//
// Pages that fail to download are not errors at this level: the crawler
// reports them and carries on, even when the starting URL itself is
// unusable. Only bad settings or a failure to write the output file end
// the program with an error.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - crawl settings
mod crawl;    // src/crawl/ - queue, link filter, crawl loop
mod error;    // src/error.rs - error types
mod extract;  // src/extract/ - title/date/body extraction
mod fetch;    // src/fetch/ - downloading pages
mod output;   // src/output.rs - JSON writer

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.crawl_config();
    config.validate()?;

    // An unusable seed URL is reported by the crawl and yields no pages
    let results = crawl::crawl(&cli.url, config)
        .await
        .context("could not set up the crawler")?;

    output::write_results(&results, &cli.output)
        .with_context(|| format!("could not write {}", cli.output.display()))?;

    Ok(())
}

// Logs go to stderr so they never mix with the progress lines on stdout.
// RUST_LOG wins over --verbose when both are set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

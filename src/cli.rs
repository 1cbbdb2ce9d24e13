// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using a
// Rust struct and attributes (the #[...] things). Every field becomes an
// argument; doc comments become the --help text.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{
    CrawlConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

#[derive(Parser, Debug)]
#[command(
    name = "rag-scraper",
    version = "0.1.0",
    about = "Crawl a website and extract article content for RAG pipelines",
    long_about = "rag-scraper crawls a website breadth-first, staying on the starting host, \
                  and saves the title, date and main text of every page to a JSON file."
)]
pub struct Cli {
    /// URL of the website to scrape (e.g., https://example.com/blog)
    pub url: String,

    /// Maximum number of pages to scrape
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Maximum link depth to follow (0 = only the starting page)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Output JSON file
    #[arg(long, default_value = "scraped_content.json")]
    pub output: PathBuf,

    /// Extra file extension to skip, on top of .pdf .jpg .png .gif
    ///
    /// Can be repeated: --exclude-ext .zip --exclude-ext .mp4
    #[arg(long = "exclude-ext", value_name = "EXT")]
    pub exclude_ext: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print debug logs to stderr (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    // Turns the parsed arguments into crawl settings
    pub fn crawl_config(&self) -> CrawlConfig {
        let builder = CrawlConfig::builder()
            .max_pages(self.max_pages)
            .max_depth(self.max_depth)
            .timeout(Duration::from_secs(self.timeout))
            .user_agent(self.user_agent.as_str());

        self.exclude_ext
            .iter()
            .fold(builder, |builder, ext| builder.exclude_extension(ext))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rag-scraper", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.max_pages, 20);
        assert_eq!(cli.max_depth, 2);
        assert_eq!(cli.output, PathBuf::from("scraped_content.json"));

        let config = cli.crawl_config();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "rag-scraper",
            "https://example.com",
            "--max-pages",
            "5",
            "--max-depth",
            "0",
            "--output",
            "out.json",
            "--exclude-ext",
            "zip",
            "--exclude-ext",
            ".mp4",
            "--timeout",
            "3",
        ])
        .unwrap();

        let config = cli.crawl_config();
        assert_eq!(config.max_pages, 5);
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.excluded_extensions.ends_with(&[".zip".to_string(), ".mp4".to_string()]));
    }

    #[test]
    fn test_zero_max_pages_fails_validation() {
        let cli =
            Cli::try_parse_from(["rag-scraper", "https://example.com", "--max-pages", "0"]).unwrap();
        assert!(cli.crawl_config().validate().is_err());
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["rag-scraper"]).is_err());
    }
}

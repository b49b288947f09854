//! # dirtally
//!
//! A CLI tool for finding directories with unusually large file counts.
//!
//! ## Overview
//!
//! dirtally is built on top of dirtallylib and provides a command-line
//! interface for taking a file-count census of a directory tree. It walks
//! the tree once, tallies the files directly inside every directory,
//! optionally regroups the tallies by path depth, and prints the largest
//! offenders — handy when hunting for cleanup candidates or planning
//! inode quotas.
//!
//! ## Usage
//!
//! ```bash
//! # Census of the home directory (default), directories over 100 files
//! dirtally
//!
//! # Scan /var, report anything over 500 files, ungrouped
//! dirtally --dir /var --cutoff 500 --show-depth 0
//!
//! # Top 20 offenders under /srv as JSON
//! dirtally -d /srv -r 20 -f json
//!
//! # Collapse results onto their first two path segments
//! dirtally -d /data -s 2
//!
//! # Skip cache directories entirely
//! dirtally -d /home/me --exclude '**/.cache' --exclude '**/node_modules'
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console::style;
use dirtallylib::{
    group_by_depth, render, scan, FilterConfig, Header, OutputFormat, ScanOptions,
};
use tracing::{debug, Level};

/// Find directories holding more files than a cutoff.
#[derive(Debug, Parser)]
#[command(name = "dirtally", version, about, author = "Arthur Debert")]
struct Cli {
    /// Minimum number of files in a directory for it to be reported
    /// (strictly greater qualifies)
    #[arg(short, long, default_value_t = 100)]
    cutoff: i64,

    /// Number of top results to show
    #[arg(short, long, default_value_t = 100)]
    results: i64,

    /// Directory depth to group results by (0 or less disables grouping)
    #[arg(short = 's', long = "show-depth", default_value_t = 3)]
    show_depth: i64,

    /// Directory to start the census from (defaults to the home directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Output format: tsv, csv, or json
    #[arg(short, long, default_value = "tsv")]
    format: OutputFormat,

    /// Report only directories matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    include: Vec<String>,

    /// Prune directories matching this glob, subtree included (repeatable)
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Follow directory symlinks during the walk
    #[arg(long)]
    follow_links: bool,

    /// Omit the header row (tsv/csv only)
    #[arg(long)]
    no_header: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Resolve the scan root, falling back to the home directory.
    fn root(&self) -> anyhow::Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .context("could not determine the home directory; pass --dir explicitly"),
        }
    }

    /// Build the library scan options from the parsed arguments.
    fn scan_options(&self) -> anyhow::Result<ScanOptions> {
        let mut filter = FilterConfig::new();
        for pattern in &self.include {
            filter = filter.include(pattern)?;
        }
        for pattern in &self.exclude {
            filter = filter.exclude(pattern)?;
        }

        Ok(ScanOptions::new()
            .cutoff(self.cutoff)
            .filter(filter)
            .follow_links(self.follow_links))
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let root = cli.root()?;
    let options = cli.scan_options()?;

    debug!("scanning {} with cutoff {}", root.display(), cli.cutoff);
    let entries = scan(&root, &options)?;
    debug!("{} directories above the cutoff", entries.len());

    // Negative flag values disable grouping / truncate to nothing,
    // matching the library's unsigned APIs.
    let depth = cli.show_depth.max(0) as usize;
    let entries = group_by_depth(entries, depth);

    let top_n = cli.results.max(0) as usize;
    let header = Header::default();
    let header = if cli.no_header && cli.format != OutputFormat::Json {
        None
    } else {
        Some(&header)
    };

    let output = render(&entries, top_n, cli.format, header)?;
    println!("{output}");

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so machine-readable stdout stays clean.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use log::LevelFilter;

use crate::io::DEFAULT_MAX_DOWNLOAD_SIZE;
use crate::zip::{DEFAULT_MAX_ENTRY_SIZE, DEFAULT_MAX_TOTAL_SIZE, ZipPolicy};

#[derive(Parser, Debug)]
#[command(name = "zipgate")]
#[command(version)]
#[command(about = "Validate an untrusted ZIP bundle before anything in it is used", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipgate bundle.zip                        validate, print a summary\n  \
  zipgate -l -v https://example.com/i2pseeds.zip   validate and list entries\n  \
  zipgate -p bundle.zip routerInfo-x.dat    validate, print one entry")]
pub struct Cli {
    /// ZIP file path or HTTP URL
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Entries to print with -p (default: all)
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// List entries after validation
    #[arg(short = 'l')]
    pub list: bool,

    /// Verbose listing; repeat for debug logging
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print entry contents to stdout, no messages
    #[arg(short = 'p')]
    pub pipe: bool,

    /// Quiet mode, only errors
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Byte offset of the ZIP stream inside SOURCE
    #[arg(long, value_name = "BYTES", default_value_t = 0)]
    pub offset: usize,

    /// Largest accepted decompressed size of one entry
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_ENTRY_SIZE)]
    pub max_entry_size: u64,

    /// Largest accepted decompressed size of all entries together
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_TOTAL_SIZE)]
    pub max_total_size: u64,

    /// Largest archive fetched from SOURCE
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_DOWNLOAD_SIZE)]
    pub max_download_size: u64,
}

impl Cli {
    pub fn is_http_url(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet || self.pipe
    }

    pub fn policy(&self) -> ZipPolicy {
        ZipPolicy::default()
            .max_entry_size(self.max_entry_size)
            .max_total_size(self.max_total_size)
    }

    /// Log level implied by -q / -v, used unless RUST_LOG is set
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

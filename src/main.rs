//! Main entry point for the zipgate CLI application.
//!
//! Fetches an archive from a local path or an HTTP URL, validates it, and
//! on success prints a summary, a listing, or entry contents.

use anyhow::{Result, bail};
use clap::Parser;
use std::process::ExitCode;
use tokio::io::AsyncWriteExt;

use zipgate::{ArchiveSource, Cli, HttpSource, LocalFileSource, ValidatedArchive, ZipExtractor};

/// Application entry point.
///
/// Any error, including a rejected archive, ends with exit status 1 and
/// the reason on stderr.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("zipgate: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    if cli.is_http_url() {
        let source = HttpSource::new(cli.source.clone())?;
        process_source(&source, cli).await?;

        if !cli.is_quiet() {
            eprintln!(
                "\nTotal bytes transferred: {}",
                format_size(source.transferred_bytes())
            );
        }
    } else {
        let source = LocalFileSource::new(&cli.source);
        process_source(&source, cli).await?;
    }

    Ok(())
}

/// Fetch, validate, then report.
///
/// Nothing from the archive is printed before the whole archive has been
/// accepted.
async fn process_source<S: ArchiveSource>(source: &S, cli: &Cli) -> Result<()> {
    let data = source.fetch(cli.max_download_size).await?;

    let archive = ZipExtractor::with_offset(&data, cli.policy(), cli.offset)
        .extract()
        .map_err(|e| anyhow::Error::new(e).context(format!("{} rejected", source.location())))?;

    if cli.pipe {
        return pipe_entries(&archive, &cli.names).await;
    }

    if cli.list {
        list_entries(&archive, cli.verbose > 0);
    } else if !cli.is_quiet() {
        println!(
            "OK: {} entries, {}",
            archive.len(),
            format_size(archive.total_size())
        );
    }

    Ok(())
}

/// List entries of a validated archive.
///
/// - Simple format: just entry names, one per line
/// - Verbose format: table with sizes, ratio, timestamp and CRC
fn list_entries(archive: &ValidatedArchive, verbose: bool) {
    if !verbose {
        for name in archive.names() {
            println!("{}", name);
        }
        return;
    }

    println!(
        "{:>10}  {:>10}  {:>5}  {:>10}  {:>5}  {:>8}  Name",
        "Length", "Size", "Cmpr", "Date", "Time", "CRC-32"
    );
    println!("{}", "-".repeat(80));

    for entry in archive.entries() {
        let (year, month, day) = entry.mod_date();
        let (hour, minute, _second) = entry.mod_time();
        println!(
            "{:>10}  {:>10}  {}  {:04}-{:02}-{:02}  {:02}:{:02}  {:08x}  {}",
            entry.uncompressed_size,
            entry.compressed_size,
            ratio(entry.compressed_size, entry.uncompressed_size),
            year,
            month,
            day,
            hour,
            minute,
            entry.crc32,
            entry.file_name
        );
    }

    let total_compressed: u64 = archive.entries().map(|e| e.compressed_size).sum();
    println!("{}", "-".repeat(80));
    println!(
        "{:>10}  {:>10}  {}  {:>31}  {} files",
        archive.total_size(),
        total_compressed,
        ratio(total_compressed, archive.total_size()),
        "",
        archive.len()
    );
}

/// Write the content of the named entries (all when `names` is empty).
async fn pipe_entries(archive: &ValidatedArchive, names: &[String]) -> Result<()> {
    let mut stdout = tokio::io::stdout();

    if names.is_empty() {
        let show_filename = archive.len() > 1;
        for entry in archive.entries() {
            if show_filename {
                stdout
                    .write_all(format!("--- {} ---\n", entry.file_name).as_bytes())
                    .await?;
            }
            stdout.write_all(&entry.data).await?;
        }
    } else {
        // Resolve every name first so a typo prints nothing.
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            match archive.get(name) {
                Some(entry) => selected.push(entry),
                None => bail!("no such entry: {}", name),
            }
        }
        let show_filename = selected.len() > 1;
        for entry in selected {
            if show_filename {
                stdout
                    .write_all(format!("--- {} ---\n", entry.file_name).as_bytes())
                    .await?;
            }
            stdout.write_all(&entry.data).await?;
        }
    }

    stdout.flush().await?;
    Ok(())
}

/// Space saved by compression, as a right-aligned percentage.
fn ratio(compressed: u64, uncompressed: u64) -> String {
    if uncompressed > 0 && compressed <= uncompressed {
        format!("{:>4}%", 100 - (compressed * 100 / uncompressed))
    } else {
        "   0%".to_string()
    }
}

/// Format a byte size into a human-readable string.
///
/// ```ignore
/// assert_eq!(format_size(500), "500 bytes");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

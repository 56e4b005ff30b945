use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use excerpo_core::{
    Export, ExtractConfig, RecencyWindow, accept_post, dedup_exact, harvest_file, snapshot_files, write_export,
};
use owo_colors::OwoColorize;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract post records from archived feed snapshots into a JSON export
#[derive(Parser, Debug)]
#[command(name = "excerpo")]
#[command(author = "Excerpo Contributors")]
#[command(version = VERSION)]
#[command(about = "Extract post records from archived feed snapshots", long_about = None)]
struct Args {
    /// Directory of snapshot .html files, processed in filename order
    #[arg(value_name = "DIR")]
    input: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "posts.json", value_name = "FILE")]
    output: PathBuf,

    /// Capacity of the recent-posts dedup window
    #[arg(long, default_value = "20", value_name = "NUM")]
    window_size: usize,

    /// First capture date recorded in the export metadata
    #[arg(long, default_value = "", value_name = "DATE")]
    start_date: String,

    /// Last capture date recorded in the export metadata
    #[arg(long, default_value = "", value_name = "DATE")]
    end_date: String,

    /// Enable progress logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    let files = snapshot_files(&args.input)
        .with_context(|| format!("Failed to list snapshots in {}", args.input.display()))?;

    if args.verbose {
        echo::print_step(1, 3, "Listing snapshots");
        echo::print_detail("Directory", &args.input.display().to_string());
        echo::print_detail("Snapshots", &files.len().to_string());
        eprintln!();
        echo::print_step(2, 3, "Extracting posts");
    }

    let extract_config = ExtractConfig::default();
    let mut window = RecencyWindow::new(args.window_size);
    let mut accumulated = Vec::new();

    for path in &files {
        let posts =
            harvest_file(path, &extract_config).with_context(|| format!("Failed to process {}", path.display()))?;
        let extracted = posts.len();

        for post in posts {
            accept_post(post, &mut window, &mut accumulated);
        }

        if args.verbose {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("?");
            eprintln!(
                "  {} {} {}",
                "Processing".dimmed(),
                name.bright_white(),
                format!("({} posts, {} accepted so far)", extracted, accumulated.len()).dimmed()
            );
        }
    }

    let accepted = accumulated.len();
    let unique = dedup_exact(accumulated);

    if args.verbose {
        eprintln!();
        echo::print_info(&format!("Accepted {} posts, {} unique", accepted, unique.len()));
        eprintln!();
        echo::print_step(3, 3, "Writing export");
    }

    let export = Export::new(unique, args.start_date, args.end_date);
    write_export(&args.output, &export)
        .with_context(|| format!("Failed to write export to {}", args.output.display()))?;

    echo::print_success(&format!(
        "Exported {} posts to {}",
        export.metadata.count,
        args.output.display().bright_white()
    ));

    Ok(())
}

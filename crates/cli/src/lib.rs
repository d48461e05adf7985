use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use gitspect_repository::GitRepository;
use gitspect_segmenter::{SegmentationStats, Segmenter, SegmenterError};
use std::io;
use std::path::PathBuf;

use config::{resolve_config, Overrides};
use flags::ContinuationFlag;
use history::{segment_history, select_commits, CommitSelection};
use report::{render_commits_text, render_documents_text, render_json, DocumentReport};

mod config;
mod flags;
mod history;
mod report;
mod sources;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    if text.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| {
            if text.ends_with('\n') {
                Ok(())
            } else {
                stdout.write_all(b"\n")
            }
        })
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "gitspect")]
#[command(about = "Split Python-like sources into definition segments, across git history", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Segmenter configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Columns per tab stop
    #[arg(long, global = true)]
    tab_width: Option<usize>,

    /// How wrapped statements are recognised
    #[arg(long, global = true, value_enum)]
    continuation: Option<ContinuationFlag>,

    /// Do not emit one-line definitions such as `def f(): pass`
    #[arg(long, global = true)]
    no_inline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment files or directories
    Segment(SegmentArgs),

    /// List commits of a repository
    Commits(CommitsArgs),

    /// Segment the files each selected commit changed
    History(HistoryArgs),
}

#[derive(Args)]
struct SegmentArgs {
    /// Files or directories to segment
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CommitsArgs {
    /// Repository root
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    #[command(flatten)]
    selection: CommitSelection,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct HistoryArgs {
    /// Repository root
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    #[command(flatten)]
    selection: CommitSelection,

    /// Segment changed files of any language
    #[arg(long)]
    all_files: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let overrides = Overrides {
        tab_width: cli.tab_width,
        continuation: cli.continuation,
        no_inline: cli.no_inline,
    };
    let config = resolve_config(cli.config.as_deref(), overrides)?;
    let segmenter = Segmenter::new(config).context("Failed to create segmenter")?;

    match cli.command {
        Commands::Segment(args) => run_segment(args, &segmenter)?,
        Commands::Commits(args) => run_commits(args)?,
        Commands::History(args) => run_history(args, &segmenter)?,
    }

    Ok(())
}

fn run_segment(args: SegmentArgs, segmenter: &Segmenter) -> Result<()> {
    let files = sources::collect_sources(&args.paths)?;

    let mut reports = Vec::with_capacity(files.len());
    let mut totals = SegmentationStats::default();
    for path in &files {
        match segmenter.segment_file(path) {
            Ok(doc) => {
                totals.merge(&doc.stats());
                reports.push(DocumentReport::from_document(&doc));
            }
            Err(SegmenterError::InvalidUtf8(name)) => {
                log::warn!("Skipping {name}: not valid UTF-8");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to segment {}", path.display()))
            }
        }
    }
    log::info!(
        "Segmented {} of {} files | {totals}",
        reports.len(),
        files.len()
    );

    let output = if args.json {
        render_json(&reports)?
    } else {
        render_documents_text(&reports)
    };
    print_stdout(&output)
}

fn run_commits(args: CommitsArgs) -> Result<()> {
    let repo = open_repository(&args.repo)?;
    let commits = select_commits(&repo, &args.selection)?;

    let output = if args.json {
        render_json(&commits)?
    } else {
        render_commits_text(&commits)
    };
    print_stdout(&output)
}

fn run_history(args: HistoryArgs, segmenter: &Segmenter) -> Result<()> {
    let repo = open_repository(&args.repo)?;
    let commits = select_commits(&repo, &args.selection)?;
    let reports = segment_history(&repo, segmenter, &commits, args.all_files)?;

    let output = if args.json {
        render_json(&reports)?
    } else {
        render_documents_text(&reports)
    };
    print_stdout(&output)
}

fn open_repository(path: &std::path::Path) -> Result<GitRepository> {
    GitRepository::open(path)
        .with_context(|| format!("Failed to open repository {}", path.display()))
}

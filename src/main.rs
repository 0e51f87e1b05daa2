//! memit: print markdown notes as a section tree, a graph, or code chunks.
#![allow(clippy::multiple_crate_versions)]

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use memit::chunk::{self, ChunkKind};
use memit::formats::markdown::MarkdownFormat;
use memit::{config, graph, parser, Result, SectionTree};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "memit")]
#[command(about = "Parse markdown notes into sections and code chunks", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["filepath", "dirpath", "path"])))]
#[command(group(ArgGroup::new("output").args(["json", "graph", "chunks"])))]
struct Args {
    /// Markdown file to parse
    #[arg(long, short = 'f', value_name = "FILE")]
    filepath: Option<PathBuf>,

    /// Directory of markdown files to parse
    #[arg(long, short = 'd', value_name = "DIR")]
    dirpath: Option<PathBuf>,

    /// File or directory, detected from the path
    #[arg(long, short = 'p', value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print the nested section tree (default)
    #[arg(long)]
    json: bool,

    /// Print nodes and parent/child links
    #[arg(long)]
    graph: bool,

    /// Print the chunks that have content
    #[arg(long)]
    chunks: bool,

    /// Chunk kind to extract with --chunks
    #[arg(long, default_value = "code")]
    kind: ChunkKind,

    /// Most chunks to print with --chunks
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// File extensions to match in directories
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log parsing steps
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Only log warnings
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let Some(source) = Source::from_args(&args) else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "one of --filepath, --dirpath or --path is required",
            )
            .exit()
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match run(&args, source) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, source: Source<'_>) -> Result<String> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions.clone_from(&args.ext);
    }
    if let Some(limit) = args.limit {
        cfg.max_chunks = limit;
    }

    let tree = load_tree(source, &cfg)?;

    match Output::from_args(args) {
        Output::Graph => {
            let export = graph::to_graph(&tree)?;
            if args.pretty {
                export.to_json_pretty()
            } else {
                export.to_json()
            }
        }
        Output::Chunks => {
            let chunks = chunk::collect_with_content(&tree, args.kind, cfg.max_chunks);
            let json = if args.pretty {
                serde_json::to_string_pretty(&chunks)?
            } else {
                serde_json::to_string(&chunks)?
            };
            Ok(json)
        }
        Output::Tree => {
            if args.pretty {
                tree.to_json_pretty()
            } else {
                tree.to_json()
            }
        }
    }
}

/// What gets printed to stdout.
enum Output {
    Tree,
    Graph,
    Chunks,
}

impl Output {
    fn from_args(args: &Args) -> Self {
        match (args.json, args.graph, args.chunks) {
            (true, _, _) | (false, false, false) => Self::Tree,
            (false, true, _) => Self::Graph,
            (false, false, true) => Self::Chunks,
        }
    }
}

/// Where the notes come from.
enum Source<'a> {
    File(&'a Path),
    Directory(&'a Path),
    Detect(&'a Path),
}

impl<'a> Source<'a> {
    fn from_args(args: &'a Args) -> Option<Self> {
        args.filepath
            .as_deref()
            .map(Self::File)
            .or_else(|| args.dirpath.as_deref().map(Self::Directory))
            .or_else(|| args.path.as_deref().map(Self::Detect))
    }
}

fn load_tree(source: Source<'_>, cfg: &config::Config) -> Result<SectionTree> {
    let parser = parser::Parser::new(MarkdownFormat).with_extensions(cfg.file_extensions.clone());

    match source {
        Source::File(file) => parser.parse_file(file),
        Source::Directory(dir) => parser.parse_directory(dir),
        Source::Detect(path) if path.is_dir() => parser.parse_directory(path),
        Source::Detect(path) => parser.parse_file(path),
    }
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;

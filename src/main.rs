//! fldr - Build nested folder outlines from indented text.
//!
//! Usage:
//!   fldr                          Launch the interactive shell
//!   fldr show [FILE]              Parse indented text and print the tree
//!   fldr paste --into FILE --from FILE --select PATH...
//!                                 Paste one outline into folders of another
//!   fldr --help                   Show help

mod render;
mod settings;
mod shell;

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fldr_core::{FolderTree, MalformedIndentPolicy, ParseWarning, TreeStats, WorkspaceConfig};
use fldr_ops::{MergeReport, ParseReport, Workspace};

use crate::settings::Overrides;
use crate::shell::Shell;

#[derive(Parser)]
#[command(
    name = "fldr",
    version,
    about = "Build nested folder outlines from indented text",
    long_about = "fldr turns indented text into a folder tree, lets you browse and \
                  select folders, and pastes a second outline into every selected \
                  folder, merging folders that share a name.\n\n\
                  Run `fldr` with no subcommand for the interactive shell."
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Leading whitespace characters per nesting level
    #[arg(long, global = true)]
    indent_unit: Option<usize>,

    /// What to do with lines indented past any parent folder
    #[arg(long, global = true)]
    malformed: Option<MalformedArg>,

    /// Name of the root folder
    #[arg(long, global = true)]
    root_name: Option<String>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse indented text and print the resulting tree
    Show {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Paste one outline into selected folders of another
    Paste {
        /// Outline to paste into
        #[arg(long)]
        into: PathBuf,

        /// Outline to paste from
        #[arg(long)]
        from: PathBuf,

        /// Target folder as a `/`-separated name path; `/` is the root
        #[arg(short, long = "select", required = true)]
        select: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive shell (the default)
    Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    /// Indented text that parses back into the same tree
    Outline,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MalformedArg {
    /// Place the line at the current level
    Coerce,
    /// Drop the line
    Skip,
}

impl From<MalformedArg> for MalformedIndentPolicy {
    fn from(arg: MalformedArg) -> Self {
        match arg {
            MalformedArg::Coerce => MalformedIndentPolicy::Coerce,
            MalformedArg::Skip => MalformedIndentPolicy::Skip,
        }
    }
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    tree: &'a FolderTree,
    stats: TreeStats,
    warnings: &'a [ParseWarning],
}

#[derive(Serialize)]
struct PasteOutput<'a> {
    tree: &'a FolderTree,
    stats: TreeStats,
    merge: MergeReport,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = Overrides {
        indent_unit: cli.indent_unit,
        malformed: cli.malformed.map(Into::into),
        root_name: cli.root_name.clone(),
    };
    let config = settings::load(cli.config.as_deref(), &overrides)?;

    match cli.command {
        Some(Command::Show { input, format }) => {
            run_show(&config, input.as_deref(), format)?;
        }
        Some(Command::Paste {
            into,
            from,
            select,
            format,
        }) => {
            run_paste(&config, &into, &from, &select, format)?;
        }
        Some(Command::Shell) | None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(config, stdin.lock(), io::stdout());
            shell.run()?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to warnings.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Read a file, or stdin when no path (or `-`) is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Build a workspace from an outline file.
fn load_workspace(
    config: &WorkspaceConfig,
    path: Option<&Path>,
) -> Result<(Workspace, ParseReport)> {
    let text = read_input(path)?;
    let mut workspace = Workspace::new(config.clone());
    let report = workspace.create_from_text(&text);
    Ok((workspace, report))
}

fn print_warnings(report: &ParseReport) {
    for warning in &report.warnings {
        eprintln!("warning: {}", warning.message());
    }
}

/// Parse and print a tree.
fn run_show(config: &WorkspaceConfig, input: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (workspace, report) = load_workspace(config, input)?;
    let tree = workspace.tree();

    match format {
        OutputFormat::Text => {
            print_warnings(&report);
            for line in render::tree_lines(&tree.root) {
                println!("{line}");
            }
            println!();
            println!("{}", render::stats_line(&tree.stats()));
        }
        OutputFormat::Outline => {
            print_warnings(&report);
            println!("{}", render::indented_text(&tree.root, config.parse.indent_unit));
        }
        OutputFormat::Json => {
            let output = ShowOutput {
                tree,
                stats: tree.stats(),
                warnings: &report.warnings,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Paste the `from` outline into the selected folders of the `into` outline.
fn run_paste(
    config: &WorkspaceConfig,
    into: &Path,
    from: &Path,
    select: &[String],
    format: OutputFormat,
) -> Result<()> {
    let (mut primary, primary_report) = load_workspace(config, Some(into))?;
    let clipboard_config = config.for_clipboard();
    let (clipboard, clipboard_report) = load_workspace(&clipboard_config, Some(from))?;
    print_warnings(&primary_report);
    print_warnings(&clipboard_report);

    for path in select {
        let names: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some(node) = primary.tree().resolve_names(&names) else {
            bail!("No folder at '{path}' in {}", into.display());
        };
        let id = node.id;
        primary.select(id)?;
    }

    let merge = primary.paste_clipboard_into_selection(&clipboard);
    let tree = primary.tree();

    match format {
        OutputFormat::Text => {
            for line in render::tree_lines(&tree.root) {
                println!("{line}");
            }
            println!();
            println!(
                "Pasted into {} folder(s): {} created, {} merged",
                merge.targets, merge.created, merge.matched
            );
        }
        OutputFormat::Outline => {
            println!("{}", render::indented_text(&tree.root, config.parse.indent_unit));
        }
        OutputFormat::Json => {
            let output = PasteOutput {
                tree,
                stats: tree.stats(),
                merge,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

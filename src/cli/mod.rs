//! CLI command definitions and handlers

mod analyze;
mod batch;
mod compare;
mod init;
mod menu;

use crate::batch::{SkipReason, SkippedFile};
use crate::config::{load_project_config, ProjectConfig};
use crate::engine::MetricsEngine;
use crate::models::Verdict;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Default number of batch workers
const DEFAULT_WORKERS: usize = 8;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// Lyar - forensic linguistic analysis of statements
///
/// Scores free text for lexical deception markers (self-reference, hedging,
/// time leaps, conviction qualifiers, fillers) against fixed baselines.
#[derive(Parser, Debug)]
#[command(name = "lyar")]
#[command(
    version,
    about = "Forensic linguistic analysis: score statements for lexical deception markers",
    long_about = "Lyar measures the density of five linguistic marker categories in a \
statement and compares each against a forensic baseline. Categories crossing their \
baseline add a fixed weight to a 0-100 risk score.\n\n\
Run without a subcommand to open the interactive menu.",
    after_help = "\
Examples:
  lyar analyze statement.txt                 Terminal report
  lyar analyze statement.txt --format html   HTML dashboard (Forensic_Report.html)
  lyar compare a.txt b.txt                   Which statement is more credible
  lyar batch statements/                     Rank a folder of .txt statements
  lyar lexicon                               Show marker lists, baselines and weights"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers for batch runs (1-64)
    #[arg(long, global = true, value_parser = parse_workers)]
    pub workers: Option<usize>,

    /// Disable ANSI colors in terminal output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single statement file
    #[command(after_help = "\
Examples:
  lyar analyze statement.txt                          Terminal report
  lyar analyze statement.txt --format json            JSON output for scripting
  lyar analyze statement.txt --format html -o r.html  Standalone HTML dashboard
  lyar analyze statement.txt --fail-on moderate       Exit code 1 on moderate+ risk")]
    Analyze {
        /// Statement file (plain UTF-8 text)
        file: PathBuf,

        /// Output format: text, json, html
        #[arg(long, short = 'f', value_parser = ["text", "json", "html"])]
        format: Option<String>,

        /// Output file path (default: stdout, or the configured HTML file for html)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if the verdict is at this level or higher
        #[arg(long, value_parser = ["low", "moderate", "high"])]
        fail_on: Option<String>,
    },

    /// Compare two statements and name the more credible one
    Compare {
        /// First statement file
        first: PathBuf,

        /// Second statement file
        second: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// Rank every statement in a folder by risk score
    #[command(after_help = "\
Examples:
  lyar batch statements/                         Rank *.txt, write batch_risk_analysis.svg
  lyar batch statements/ --ext md --no-chart     Rank *.md without a chart
  lyar batch statements/ --format json           JSON ranking")]
    Batch {
        /// Folder containing statement files
        dir: PathBuf,

        /// Statement file extension (default: txt)
        #[arg(long)]
        ext: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Output file path for the ranking (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Chart path (default: batch_risk_analysis.svg)
        #[arg(long, conflicts_with = "no_chart")]
        chart: Option<PathBuf>,

        /// Skip writing the risk chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Show marker phrases, baselines and weights
    Lexicon {
        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Create a lyar.toml config file with example settings
    Init,

    /// Interactive menu (default when no subcommand is given)
    Menu,

    /// Show version information
    Version,
}

/// Shared state for one CLI invocation
pub struct Session {
    pub engine: MetricsEngine,
    pub config: ProjectConfig,
    pub color: bool,
    pub workers: usize,
}

impl Session {
    pub fn new(config: ProjectConfig, no_color: bool, workers: Option<usize>) -> Result<Self> {
        // A broken lexicon is a programming error: fail before doing any work
        let engine = MetricsEngine::standard().context("Built-in lexicon is invalid")?;
        let color = !no_color && !config.no_color() && console::colors_enabled();
        let workers = workers
            .or(config.defaults.workers)
            .unwrap_or(DEFAULT_WORKERS)
            .clamp(1, 64);
        Ok(Self {
            engine,
            config,
            color,
            workers,
        })
    }

    /// Resolve the output format from the flag, then config, then text.
    ///
    /// A configured `html` default falls back to text for commands without
    /// an HTML renderer.
    pub fn format(&self, flag: Option<&str>, allow_html: bool) -> Result<OutputFormat> {
        if let Some(flag) = flag {
            return OutputFormat::from_str(flag);
        }
        let configured = match self.config.defaults.format.as_deref() {
            Some(s) => OutputFormat::from_str(s)?,
            None => OutputFormat::Text,
        };
        if configured == OutputFormat::Html && !allow_html {
            return Ok(OutputFormat::Text);
        }
        Ok(configured)
    }
}

/// JSON body printed in place of a report when a statement has no words,
/// so stdout stays parseable
#[derive(Debug, Serialize)]
pub(crate) struct SkipNotice {
    pub skipped: Vec<SkippedFile>,
}

impl SkipNotice {
    pub(crate) fn no_words<'p>(paths: impl IntoIterator<Item = &'p Path>) -> Self {
        Self {
            skipped: paths
                .into_iter()
                .map(|path| SkippedFile {
                    file_name: path.display().to_string(),
                    reason: SkipReason::NoWords,
                })
                .collect(),
        }
    }

    pub(crate) fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Read a statement file as UTF-8 text
pub(crate) fn read_statement(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read statement: {}", path.display()))
}

/// Write rendered output to a file, creating parent directories
pub(crate) fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = load_project_config(&cwd);

    // console decides styling per stream on its own; turn it off for both
    if cli.no_color || config.no_color() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    if let Some(Commands::Init) = cli.command {
        return init::run(&cwd);
    }
    if let Some(Commands::Version) = cli.command {
        println!("lyar {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let session = Session::new(config, cli.no_color, cli.workers)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Analyze {
            file,
            format,
            output,
            fail_on,
        }) => {
            let format = session.format(format.as_deref(), true)?;
            let verdict = analyze::run(&session, &file, format, output.as_deref(), &mut out)?;

            if let (Some(level), Some(verdict)) = (fail_on, verdict) {
                let threshold = Verdict::from_str(&level)?;
                if verdict >= threshold {
                    out.flush()?;
                    eprintln!("Verdict '{}' meets --fail-on {}", verdict, level);
                    std::process::exit(1);
                }
            }
            Ok(())
        }

        Some(Commands::Compare {
            first,
            second,
            format,
        }) => {
            let format = session.format(format.as_deref(), false)?;
            compare::run(&session, &first, &second, format, &mut out)
        }

        Some(Commands::Batch {
            dir,
            ext,
            format,
            output,
            chart,
            no_chart,
        }) => {
            let format = session.format(format.as_deref(), false)?;
            let extension = ext.unwrap_or_else(|| session.config.extension().to_string());
            let chart = if no_chart {
                None
            } else {
                Some(chart.unwrap_or_else(|| session.config.chart_output()))
            };
            batch::run(
                &session,
                &dir,
                &extension,
                format,
                output.as_deref(),
                chart.as_deref(),
                &mut out,
            )
        }

        Some(Commands::Lexicon { format }) => {
            let rendered =
                reporters::render_lexicon(session.engine.lexicon(), OutputFormat::from_str(&format)?)?;
            out.write_all(rendered.as_bytes())?;
            Ok(())
        }

        Some(Commands::Menu) | None => {
            let stdin = std::io::stdin();
            menu::run(&session, &mut stdin.lock(), &mut out)
        }

        Some(Commands::Init) | Some(Commands::Version) => Ok(()),
    }
}

//! Project-level configuration (`lyar.toml`)
//!
//! Only presentation defaults live here. Lexicon phrases, baselines and
//! weights are fixed in code and cannot be overridden.
//!
//! ```toml
//! [defaults]
//! format = "text"
//! html_output = "Forensic_Report.html"
//! chart_output = "batch_risk_analysis.svg"
//! extension = "txt"
//! workers = 4
//! no_color = false
//! ```

use crate::batch::DEFAULT_EXTENSION;
use crate::reporters::chart::DEFAULT_CHART_PATH;
use crate::reporters::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file name searched in the working directory
pub const CONFIG_FILE: &str = "lyar.toml";

/// Default HTML report file name
pub const DEFAULT_HTML_OUTPUT: &str = "Forensic_Report.html";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json, html)
    #[serde(default)]
    pub format: Option<String>,

    /// Where `analyze --format html` writes when no `--output` is given
    #[serde(default)]
    pub html_output: Option<PathBuf>,

    /// Where batch runs write the risk chart
    #[serde(default)]
    pub chart_output: Option<PathBuf>,

    /// Statement file extension for batch runs
    #[serde(default)]
    pub extension: Option<String>,

    /// Default number of workers
    #[serde(default)]
    pub workers: Option<usize>,

    /// Disable ANSI colors by default
    #[serde(default)]
    pub no_color: Option<bool>,
}

impl ProjectConfig {
    pub fn html_output(&self) -> PathBuf {
        self.defaults
            .html_output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HTML_OUTPUT))
    }

    pub fn chart_output(&self) -> PathBuf {
        self.defaults
            .chart_output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_PATH))
    }

    pub fn extension(&self) -> &str {
        self.defaults.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    }

    pub fn no_color(&self) -> bool {
        self.defaults.no_color.unwrap_or(false)
    }

    /// Drop default values that cannot be used, logging each one.
    ///
    /// A bad value behaves as if the key were absent.
    pub fn validate(&mut self) {
        if let Some(format) = self.defaults.format.as_deref() {
            if let Err(e) = format.parse::<OutputFormat>() {
                warn!("Ignoring [defaults] format in {}: {}", CONFIG_FILE, e);
                self.defaults.format = None;
            }
        }
        if let Some(workers) = self.defaults.workers {
            if !(1..=64).contains(&workers) {
                warn!(
                    "Ignoring [defaults] workers = {} in {}: must be between 1 and 64",
                    workers, CONFIG_FILE
                );
                self.defaults.workers = None;
            }
        }
        if self.defaults.extension.as_deref().is_some_and(|e| e.trim_start_matches('.').is_empty()) {
            warn!("Ignoring empty [defaults] extension in {}", CONFIG_FILE);
            self.defaults.extension = None;
        }
    }
}

/// Load project configuration from `dir`.
///
/// A missing file yields defaults; a malformed file is logged and ignored,
/// as is any single unusable value.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(CONFIG_FILE);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(mut config) => {
                debug!("Loaded project config from {}", toml_path.display());
                config.validate();
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Example config written by `lyar init`
pub const EXAMPLE_CONFIG: &str = r#"# Lyar project configuration

[defaults]
# Output format: "text", "json" or "html"
# format = "text"

# File written by `lyar analyze --format html` without --output
# html_output = "Forensic_Report.html"

# Chart written by `lyar batch`
# chart_output = "batch_risk_analysis.svg"

# Statement file extension for batch runs
# extension = "txt"

# Parallel workers for batch runs (1-64)
# workers = 8

# Disable ANSI colors
# no_color = false
"#;

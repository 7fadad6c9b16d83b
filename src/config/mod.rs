//! Configuration module for Lyar
//!
//! This module handles:
//! - Project-level configuration (lyar.toml)
//! - CLI defaults (format, output paths, batch extension, workers)

mod project_config;

pub use project_config::{
    load_project_config, CliDefaults, ProjectConfig, CONFIG_FILE, DEFAULT_HTML_OUTPUT,
    EXAMPLE_CONFIG,
};

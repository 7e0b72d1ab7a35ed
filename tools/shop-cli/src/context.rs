//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_commerce::prelude::*;
use shop_observability::StructuredLogger;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Directory the config file was found in, if any.
    pub config_dir: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Session logger.
    pub logger: StructuredLogger,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_dir) = if let Some(path) = config_path {
            let dir = Path::new(path).parent().map(Path::to_path_buf);
            (CliConfig::load(path)?, dir)
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, dir)) => (config, Some(dir)),
                None => (CliConfig::default(), None),
            }
        };

        let logger = StructuredLogger::new(SessionId::generate())
            .with_min_level(config.logging.level)
            .with_format(config.logging.format);

        Ok(Self {
            config,
            config_dir,
            output,
            logger,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, current));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the configured catalog, or the bundled one.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.config.catalog.path {
            Some(path) => {
                let resolved = self.resolve_path(path);
                Catalog::load(&resolved)
                    .with_context(|| format!("Failed to load catalog: {}", resolved.display()))
            }
            None => Ok(Catalog::builtin()),
        }
    }

    /// Resolve a path relative to the config file, or the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            return path;
        }
        match &self.config_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(path),
            _ => self.cwd.join(path),
        }
    }
}

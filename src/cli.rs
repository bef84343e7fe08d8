use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Three-screen navigation demo for the terminal.
#[derive(Debug, Parser)]
#[command(name = "sampleapp", version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Flags win over values from the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["sampleapp", "--log-level", "debug", "--log-file", "/tmp/x.log"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["sampleapp"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }
}

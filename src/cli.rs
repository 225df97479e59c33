//! Command-line argument parsing for the replay runner
//!
//! Supports:
//! - Replaying a YAML script against a fresh board
//! - Overriding the drag threshold and history depth from config
//! - Choosing where exports and the final dump are written

use clap::Parser;
use std::path::PathBuf;

use crate::config::BoardConfig;

/// Replay scripted input against a dragboard
#[derive(Parser, Debug)]
#[command(name = "dragboard", version, about = "Replay scripted input against a dragboard")]
pub struct CliArgs {
    /// YAML replay script
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Pointer travel that turns a click into a drag
    #[arg(long, value_name = "N")]
    pub threshold: Option<f64>,

    /// Maximum undo depth (0 keeps no history)
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,

    /// Write exports and the final state dump to this file
    #[arg(short = 'd', long, value_name = "PATH")]
    pub dump: Option<PathBuf>,

    /// Print the final state dump to stdout
    #[arg(short = 'p', long)]
    pub print: bool,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub script: PathBuf,
    pub board: BoardConfig,
    /// Explicit dump target; exports fall back to the logs directory without one
    pub dump_path: Option<PathBuf>,
    pub print: bool,
}

impl CliArgs {
    /// Merge parsed CLI args over the loaded config
    pub fn into_config(self, mut board: BoardConfig) -> Result<RunConfig, String> {
        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(format!("Invalid threshold: {}", threshold));
            }
            board.drag_threshold = threshold;
        }

        if let Some(limit) = self.history_limit {
            board.history_limit = Some(limit);
        }

        Ok(RunConfig {
            script: self.script,
            board,
            dump_path: self.dump,
            print: self.print,
        })
    }
}

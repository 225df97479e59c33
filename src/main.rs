use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use dragboard::cli::{CliArgs, RunConfig};
use dragboard::commands::Cmd;
use dragboard::config::BoardConfig;
use dragboard::config_paths;
use dragboard::dump::StateDump;
use dragboard::model::BoardModel;
use dragboard::replay::{self, Script};

/// Where exports go: the explicit dump path, or the logs directory
fn export_path(config: &RunConfig) -> Result<PathBuf> {
    config
        .dump_path
        .clone()
        .or_else(config_paths::default_dump_file)
        .ok_or_else(|| anyhow!("No dump path given and no config directory available"))
}

fn main() -> Result<()> {
    dragboard::tracing::init();

    let args = CliArgs::parse();
    let config = args
        .into_config(BoardConfig::load())
        .map_err(|e| anyhow!(e))?;

    let script = Script::from_path(&config.script)?;
    tracing::info!(
        "Replaying {} steps from {}",
        script.steps.len(),
        config.script.display()
    );

    let mut model = BoardModel::new(config.board.clone());
    let stats = replay::run(&mut model, &script, |cmd, model| match cmd {
        Cmd::Redraw => Ok(()),
        Cmd::Export => {
            let path = export_path(&config)?;
            StateDump::from_model(model)
                .write_to(&path)
                .map_err(|e| anyhow!(e))
                .context("Export failed")
        }
    })?;

    let dump = StateDump::from_model(&model);
    if let Some(path) = &config.dump_path {
        dump.write_to(path).map_err(|e| anyhow!(e))?;
    }
    if config.print {
        println!("{}", dump.to_json().map_err(|e| anyhow!(e))?);
    }

    eprintln!(
        "{} steps, {} messages, {} redraws, {} exports; {} of {} objects on the board, {} selected",
        stats.steps,
        stats.messages,
        stats.redraws,
        stats.exports,
        model.attached().len(),
        model.scene.object_count(),
        model.selection.len(),
    );

    Ok(())
}

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::{
    error::Rejection,
    protocol::{parse_snapshot, WallIntent},
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wall_core::{load_settings, load_settings_from, LayoutCatalog, Outcome, WallStore};

#[derive(Parser, Debug)]
#[command(about = "Inspect and replay video wall state")]
struct Cli {
    /// JSON catalog snapshot to load before running the command.
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Settings file; defaults to videowall.toml plus VIDEOWALL__* overrides.
    #[arg(long)]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in layouts.
    Layouts,
    /// Print catalog keys in picker order.
    Order,
    /// Apply a JSON array of intents and print the resulting render view.
    Replay {
        #[arg(long)]
        intents: PathBuf,
    },
}

#[derive(Serialize)]
struct LayoutRow {
    id: usize,
    name: &'static str,
    cells: usize,
}

#[derive(Serialize)]
struct ReplayStep {
    intent: &'static str,
    applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<Rejection>,
}

#[derive(Serialize)]
struct ReplayReport {
    steps: Vec<ReplayStep>,
    view: wall_core::RenderView,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => load_settings_from(path)?,
        None => load_settings(),
    };
    let mut store = WallStore::new(LayoutCatalog::builtin(), &settings);

    if let Some(path) = &cli.snapshot {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot '{}'", path.display()))?;
        let webcasts = parse_snapshot(&raw)
            .with_context(|| format!("invalid snapshot '{}'", path.display()))?;
        info!(count = webcasts.len(), "loaded webcast snapshot");
        store.dispatch(WallIntent::SetWebcastsRaw { webcasts });
    }

    match cli.command {
        Command::Layouts => {
            let rows: Vec<LayoutRow> = store
                .layouts()
                .descriptors()
                .iter()
                .map(|layout| LayoutRow {
                    id: layout.id.0,
                    name: layout.name,
                    cells: layout.num_cells(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::Order => {
            let order = store.display_order();
            println!("{}", serde_json::to_string_pretty(order.as_slice())?);
        }
        Command::Replay { intents: script } => {
            let raw = fs::read_to_string(&script)
                .with_context(|| format!("failed to read intents '{}'", script.display()))?;
            let intents: Vec<WallIntent> = serde_json::from_str(&raw)
                .with_context(|| format!("invalid intent script '{}'", script.display()))?;

            let steps = intents
                .into_iter()
                .map(|intent| {
                    let name = intent.name();
                    match store.dispatch(intent) {
                        Outcome::Applied => ReplayStep {
                            intent: name,
                            applied: true,
                            rejection: None,
                        },
                        Outcome::Ignored(reason) => ReplayStep {
                            intent: name,
                            applied: false,
                            rejection: Some(reason),
                        },
                    }
                })
                .collect();

            let report = ReplayReport {
                steps,
                view: store.render_view(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

//! key-manager CLI.
//!
//! Generates demo API keys for a network and keeps them in local storage,
//! with commands to list, inspect, toggle and delete them.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use key_store::{Config, KeyStore, Notification, Notifier, Severity, Storage};

mod view;

#[derive(Parser)]
#[command(name = "key-manager")]
#[command(about = "Generate and manage demo API keys", long_about = None)]
struct Cli {
    /// Configuration file (YAML); defaults to file storage in the current directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new API key
    Generate {
        /// Network UUID the key is issued for
        #[arg(long)]
        network_uuid: String,

        /// Label for the key
        #[arg(long, default_value = "")]
        name: String,
    },

    /// List all API keys
    List,

    /// Show key details
    Show {
        /// Record id or key value
        key: String,
    },

    /// Mark a key as active
    Activate {
        /// Record id or key value
        key: String,
    },

    /// Mark a key as inactive
    Deactivate {
        /// Record id or key value
        key: String,
    },

    /// Delete a key
    Delete {
        /// Record id or key value
        key: String,
    },

    /// Print all keys as JSON
    Export,
}

/// Prints successes to stdout, everything else to stderr.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Success => println!("[{}] {}", notification.severity, notification.message),
            Severity::Error | Severity::Warning => {
                eprintln!("[{}] {}", notification.severity, notification.message)
            }
        }
    }
}

fn open_store(config_path: Option<&Path>) -> key_store::Result<KeyStore<Box<dyn Storage>>> {
    match config_path {
        Some(path) => {
            let config = Config::from_file(path)?;
            // Storage paths in the file are relative to the file itself
            let base_path = path.parent().unwrap_or(Path::new("."));
            config.open_store(base_path)
        }
        None => Config::default().open_store(Path::new(".")),
    }
}

fn set_active<S: Storage>(
    store: &mut KeyStore<S>,
    reference: &str,
    active: bool,
    notifier: &mut impl Notifier,
) -> key_store::Result<()> {
    let selected = store.details(reference)?;
    store.set_active(&selected.id, active)?;
    notifier.notify(Notification::success(if active {
        "API key activated"
    } else {
        "API key deactivated"
    }));
    Ok(())
}

fn run(cli: Cli, notifier: &mut impl Notifier) -> key_store::Result<()> {
    let mut store = open_store(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate { network_uuid, name } => {
            let record = store.generate(&network_uuid, &name)?;
            print!("{}", view::render_details(&store.details(&record.id)?));
            notifier.notify(Notification::success("API key created"));
        }
        Commands::List => print!("{}", view::render_list(store.list())),
        Commands::Show { key } => print!("{}", view::render_details(&store.details(&key)?)),
        Commands::Activate { key } => set_active(&mut store, &key, true, notifier)?,
        Commands::Deactivate { key } => set_active(&mut store, &key, false, notifier)?,
        Commands::Delete { key } => {
            let selected = store.details(&key)?;
            store.delete(&selected.id)?;
            notifier.notify(Notification::success("API key deleted"));
        }
        Commands::Export => println!("{}", store.to_json()?),
    }

    Ok(())
}

fn main() -> ExitCode {
    // Enable basic logging; set RUST_LOG=info for visibility.
    env_logger::init();

    let cli = Cli::parse();
    let mut notifier = ConsoleNotifier;

    match run(cli, &mut notifier) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {e:?}");
            notifier.notify(e.notification());
            ExitCode::FAILURE
        }
    }
}

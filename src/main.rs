use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use mail_labels::backend::EventManager;
use mail_labels::backend::http::{ApiClient, HttpEventManager, HttpLabelService};
use mail_labels::config::Config;
use mail_labels::i18n::{Catalog, ModalTexts, SourceCatalog, TomlCatalog};
use mail_labels::label::{Label, LabelDraft};
use mail_labels::modal::{LabelModal, ModalContext, ModalParams};
use mail_labels::notification::ToastQueue;
use mail_labels::{logger, ui};

#[derive(Parser)]
#[command(name = "mail-labels", version, about = "Create and edit mail labels and folders")]
struct Cli {
    /// Configuration file (defaults to ./mail-labels.toml, then the XDG config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dialog for a new label or folder
    Create {
        /// Create a folder instead of a label
        #[arg(long)]
        folder: bool,
    },
    /// Open the dialog pre-filled with an existing label or folder
    Edit {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        folder: bool,
        /// Explicit notify flag; defaults to on for folders
        #[arg(long)]
        notify: Option<bool>,
    },
    /// Write the default configuration file
    InitConfig {
        /// Target path (defaults to the XDG config dir)
        path: Option<PathBuf>,
    },
}

impl Command {
    fn draft(&self) -> Option<LabelDraft> {
        match self {
            Self::Create { folder: true } => Some(LabelDraft::new_folder()),
            Self::Create { folder: false } => Some(LabelDraft::new_label()),
            Self::Edit {
                id,
                name,
                color,
                folder,
                notify,
            } => Some(LabelDraft {
                id: Some(id.clone()),
                name: Some(name.clone()),
                color: color.clone(),
                exclusive: Some(i32::from(*folder)),
                notify: notify.map(i32::from),
            }),
            Self::InitConfig { .. } => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { path } = &cli.command {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    // Check if API token is set
    let Ok(token) = std::env::var(&config.api.token_env) else {
        eprintln!("❌ Error: {} environment variable not set", config.api.token_env);
        eprintln!("\n💡 To use this app:");
        eprintln!("1. Create an API token for your mail account");
        eprintln!("2. Set it as environment variable: export {}=your_token_here", config.api.token_env);
        eprintln!("3. Run the app again");
        return Ok(());
    };
    let uid = std::env::var(&config.api.uid_env).ok();

    let catalog: Box<dyn Catalog> = match &config.i18n.catalog {
        Some(path) => Box::new(TomlCatalog::load(path)?),
        None => Box::new(SourceCatalog),
    };

    let client = ApiClient::from_config(&config.api, &token, uid.as_deref()).context("Failed to build API client")?;
    let toasts = ToastQueue::new();

    // Establish the event cursor so the refresh after saving has something to follow
    let events = Arc::new(HttpEventManager::new(client.clone()));
    if let Err(e) = events.call().await {
        log::warn!("Could not fetch the latest event ID: {}", e);
    }

    let mut ctx = ModalContext::new(
        Arc::new(HttpLabelService::new(client)),
        events,
        Arc::new(toasts.clone()),
    );
    ctx.texts = Arc::new(ModalTexts::resolve(catalog.as_ref()));
    ctx.palette = config.palette();
    ctx.focus_delay = config.focus_delay();

    let Some(draft) = cli.command.draft() else {
        return Ok(());
    };

    let saved: Arc<Mutex<Option<Label>>> = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&saved);
    let params = ModalParams::new(draft, move |label| {
        if let Ok(mut slot) = slot.lock() {
            *slot = label;
        }
    });

    let modal = LabelModal::open(ctx, params);
    ui::run_app(ui::App::new(modal, toasts, config.toast_ttl())).await?;

    let label = saved.lock().ok().and_then(|mut slot| slot.take());
    if let Some(label) = label {
        println!("{}", serde_json::to_string_pretty(&label)?);
    }

    Ok(())
}

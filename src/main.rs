#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{Level as TraceLevel, debug, info};
use tracing_subscriber::FmtSubscriber;

use dom_lens::config::PreferenceStore;
use dom_lens::inspector::Inspector;
use dom_lens::ipc::{InspectorRequest, InspectorServer};
use dom_lens::panel::{OptionFlag, Panel};

#[derive(Parser, Debug)]
#[command(
    name = "dom-lens",
    about = "Hover inspector showing the identifying attributes of the element under the cursor"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the inspector process for a page
    Inspect,

    /// Show or change preferences from the control panel
    Panel {
        /// Address of the active tab, used for the supported-page check
        #[arg(long)]
        tab_url: Option<String>,

        #[command(subcommand)]
        action: PanelAction,
    },
}

#[derive(Subcommand, Debug)]
enum PanelAction {
    /// Print the current status and display options
    Status,
    /// Turn hover inspection on
    Enable,
    /// Turn hover inspection off
    Disable,
    /// Set a single display option
    Set {
        flag: OptionFlag,
        /// New value for the flag (true or false)
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect => run_inspector()?,
        Command::Panel { tab_url, action } => run_panel(tab_url.as_deref(), action)?,
    }
    Ok(())
}

fn run_inspector() -> Result<()> {
    let store = PreferenceStore::open_default();
    // Read failure means defaults: inspection off, everything but the
    // all-attributes dump on
    let prefs = store.load();
    info!(enabled = prefs.enabled, "Loaded preferences");

    let mut inspector = Inspector::new(prefs);
    let server = InspectorServer::bind()?;
    info!(socket = ?server.path(), "Inspector listening");

    // Page teardown: drop the highlight and hide the overlay before exit
    let shutdown = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGTERM, shutdown.clone())?;
    signal_hook::flag::register(signal_hook::consts::SIGINT, shutdown.clone())?;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            inspector.teardown();
            info!("Inspector shut down");
            return Ok(());
        }

        let mut conn = match server.accept() {
            Ok(conn) => conn,
            Err(err) => {
                if shutdown.load(Ordering::Relaxed) {
                    inspector.teardown();
                    info!("Inspector shut down");
                    return Ok(());
                }
                return Err(err);
            }
        };
        debug!("Sender connected");

        loop {
            match conn.recv() {
                Ok(InspectorRequest::Control(message)) => inspector.apply(message),
                Ok(InspectorRequest::PointerEnter {
                    element,
                    rect,
                    viewport,
                }) => inspector.pointer_enter(element, rect, viewport),
                Ok(InspectorRequest::PointerLeave { node }) => inspector.pointer_leave(node),
                Ok(InspectorRequest::Shutdown) => {
                    info!("Shutdown requested");
                    inspector.teardown();
                    return Ok(());
                }
                Err(err) => {
                    debug!(error = ?err, "Sender disconnected");
                    break;
                }
            }
        }
    }
}

fn run_panel(tab_url: Option<&str>, action: PanelAction) -> Result<()> {
    let store = PreferenceStore::open_default();
    let mut panel = Panel::open(store, tab_url);

    if !panel.supported() {
        // Informational notice; the settings stay hidden on such pages
        println!("This page does not support inspection.");
        if !matches!(action, PanelAction::Status) {
            return Ok(());
        }
    }

    match action {
        PanelAction::Status => print_status(&panel),
        PanelAction::Enable => {
            panel.set_enabled(true)?;
            println!("{}", panel.status().label());
        }
        PanelAction::Disable => {
            panel.set_enabled(false)?;
            println!("{}", panel.status().label());
        }
        PanelAction::Set { flag, value } => {
            panel.set_option(flag, value)?;
            print_status(&panel);
        }
    }
    Ok(())
}

fn print_status(panel: &Panel) {
    println!("{}", panel.status().label());

    let options = panel.preferences().options;
    println!("showId: {}", options.show_id);
    println!("showClass: {}", options.show_class);
    println!("showTag: {}", options.show_tag);
    println!("showData: {}", options.show_data);
    println!("showAllAttrs: {}", options.show_all_attrs);
}

//! Tumbler CLI
//!
//! Validate picker configurations and print the primitive tree a host would
//! receive for them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tumbler_core::PickerValue;
use tumbler_platform::{HostEvent, HostPlatform, Orientation};
use tumbler_widgets::{Node, PickerAction, PickerConfig, PickerSelect};

#[derive(Parser)]
#[command(name = "tumbler")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tumbler picker select CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a picker config and summarize how it resolves
    Check {
        /// Config file (.toml or .json)
        config: PathBuf,
    },

    /// Print the render tree for a picker config as JSON
    Render {
        /// Config file (.toml or .json)
        config: PathBuf,

        /// Host platform (ios, android, desktop, harmony)
        #[arg(short, long, default_value = "ios")]
        platform: String,

        /// Render with the overlay open
        #[arg(long)]
        open: bool,

        /// Device orientation (portrait, landscape)
        #[arg(long, default_value = "portrait")]
        orientation: String,

        /// Replace the text field with placeholder caller content
        #[arg(long)]
        children: bool,

        /// Add a placeholder custom icon
        #[arg(long)]
        icon: bool,
    },

    /// List supported host platforms and their render strategies
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Check { config } => cmd_check(&config),
        Commands::Render {
            config,
            platform,
            open,
            orientation,
            children,
            icon,
        } => cmd_render(&config, &platform, open, &orientation, children, icon),
        Commands::Info => cmd_info(),
    }
}

fn load_picker(path: &Path) -> Result<PickerSelect> {
    let config = PickerConfig::load(path)
        .with_context(|| format!("Failed to load picker config {}", path.display()))?;
    Ok(PickerSelect::from_config(
        config,
        |value: &PickerValue, index: usize| {
            debug!(%value, index, "value changed");
        },
    ))
}

fn cmd_check(path: &Path) -> Result<()> {
    let picker = load_picker(path)?;

    let mut seen = HashSet::new();
    for item in picker.effective_items() {
        let key = item.list_key();
        if !seen.insert(key.clone()) {
            warn!("Duplicate item key '{}' (label '{}')", key, item.label);
        }
    }

    info!("Checking picker: {}", path.display());
    println!("Items:       {}", picker.caller_items().len());
    println!("Effective:   {}", picker.effective_items().len());
    println!("Selected:    {:?}", picker.display_label());
    println!(
        "Placeholder: {}",
        if picker.shows_placeholder_style() {
            "shown"
        } else {
            "hidden"
        }
    );
    println!("Strategies:");
    for host in HostPlatform::ALL {
        println!("  - {:<8} {:?}", host.name(), picker.strategy(host));
    }

    Ok(())
}

fn cmd_render(
    path: &Path,
    platform: &str,
    open: bool,
    orientation: &str,
    children: bool,
    icon: bool,
) -> Result<()> {
    let host: HostPlatform = platform.parse()?;
    let orientation: Orientation = orientation.parse()?;

    let mut picker = load_picker(path)?;
    if children {
        picker = picker.children(Node::custom("Children").test_id("children"));
    }
    if icon {
        picker = picker.icon(|test_id| Node::custom("Icon").test_id(test_id));
    }

    picker.dispatch(HostEvent::OrientationChanged(orientation));
    if open {
        let strategy = picker.strategy(host);
        if !strategy.uses_presentation() {
            warn!("{:?} on {} has no overlay, ignoring --open", strategy, host);
        } else {
            picker.dispatch(PickerAction::Toggle { animate: false });
            if !picker.is_open() {
                warn!("Picker is disabled, rendering closed");
            }
        }
    }

    let tree = picker.render(host);
    let json = serde_json::to_string_pretty(&tree).context("Failed to serialize render tree")?;
    println!("{}", json);

    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("Tumbler picker select");
    println!("=====================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Current host: {}", HostPlatform::current());
    println!();
    println!("Hosts:");
    for host in HostPlatform::ALL {
        let shape = if host.presents_modal_sheets() {
            "modal overlay"
        } else {
            "native inline, or headless overlay with children"
        };
        println!("  - {:<8} {}", host.name(), shape);
    }

    Ok(())
}

#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use esim_core::{Catalog, ShopConfig};
use tracing_subscriber::EnvFilter;

/// Startup settings, resolved once from the config file and command line
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Everything the UI needs from startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: ShopConfig,
    pub catalog: Catalog,
    /// Start with connectivity reported as offline
    pub start_offline: bool,
}

/// Get the startup settings (falls back to defaults before `main` ran)
pub fn get_settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_else(|| Settings {
        config: ShopConfig::default(),
        catalog: Catalog::default(),
        start_offline: false,
    })
}

/// eSIM Shop - travel data packages
#[derive(Parser, Debug)]
#[command(name = "esim-shop-desktop")]
#[command(about = "eSIM Shop - browse destinations and data packages")]
struct Args {
    /// Config file (default: <config dir>/esim-shop/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog JSON replacing the bundled one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Delay in milliseconds before hidden hints unmount
    #[arg(long)]
    hide_delay_ms: Option<u64>,

    /// Disable vibration feedback
    #[arg(long)]
    no_haptics: bool,

    /// Start with connectivity reported as offline (demo mode)
    #[arg(long)]
    offline: bool,
}

fn load_config(args: &Args) -> ShopConfig {
    let path = args.config.clone().unwrap_or_else(ShopConfig::default_path);
    let mut config = match ShopConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load config, using defaults");
            ShopConfig::default()
        }
    };

    if let Some(delay) = args.hide_delay_ms {
        config.hide_delay_ms = delay;
    }
    if args.no_haptics {
        config.haptics = false;
    }
    if args.catalog.is_some() {
        config.catalog = args.catalog.clone();
    }

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid settings, using defaults");
        config = ShopConfig::default();
    }
    config
}

fn load_catalog(config: &ShopConfig) -> Catalog {
    if let Some(ref path) = config.catalog {
        match Catalog::load(path) {
            Ok(catalog) => return catalog,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load catalog, using bundled one");
            }
        }
    }
    Catalog::bundled().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Bundled catalog is invalid");
        Catalog::default()
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args);
    let catalog = load_catalog(&config);

    tracing::info!(
        countries = catalog.countries().len(),
        hide_delay_ms = config.hide_delay_ms,
        haptics = config.haptics,
        offline = args.offline,
        "Starting eSIM Shop"
    );

    let _ = SETTINGS.set(Settings {
        config,
        catalog,
        start_offline: args.offline,
    });

    // Phone-shaped window
    let window_width = 420.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("eSIM Shop")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
